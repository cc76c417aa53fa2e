//! Operator semantics, precedence and operator overloading for expressions

use super::ast::{BinaryOp, Expr};
use std::ops::{BitAnd, BitOr, BitXor, Not};

impl BinaryOp {
    /// All binary connectives, in symbol-table order
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::Xor,
        BinaryOp::Eq,
        BinaryOp::Impl,
        BinaryOp::Nand,
        BinaryOp::Nor,
    ];

    /// Input symbol of the connective
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Or => '+',
            BinaryOp::And => '&',
            BinaryOp::Xor => '@',
            BinaryOp::Eq => '~',
            BinaryOp::Impl => '>',
            BinaryOp::Nand => '|',
            BinaryOp::Nor => '!',
        }
    }

    /// Look up the connective for an input symbol
    pub fn from_symbol(c: char) -> Option<Self> {
        BinaryOp::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Binding strength; higher binds tighter
    ///
    /// Negation binds tighter than every binary connective (it would be 6).
    /// All binary connectives are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::And | BinaryOp::Nand | BinaryOp::Nor => 5,
            BinaryOp::Or => 4,
            BinaryOp::Xor => 3,
            BinaryOp::Eq => 2,
            BinaryOp::Impl => 1,
        }
    }

    /// Human-readable name, used in legends and debug output
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Or => "OR",
            BinaryOp::And => "AND",
            BinaryOp::Xor => "XOR",
            BinaryOp::Eq => "EQ",
            BinaryOp::Impl => "IMPL",
            BinaryOp::Nand => "NAND",
            BinaryOp::Nor => "NOR",
        }
    }

    /// Apply the connective to two operand values
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOp::Or => a || b,
            BinaryOp::And => a && b,
            BinaryOp::Xor => a != b,
            BinaryOp::Eq => a == b,
            BinaryOp::Impl => !a || b,
            BinaryOp::Nand => !(a && b),
            BinaryOp::Nor => !(a || b),
        }
    }
}

/// Symbol used for negation in formula text
pub const NOT_SYMBOL: char = '-';

/// Logical NOT operator: `!a`
///
/// # Examples
///
/// ```
/// use truth_forms::Expr;
///
/// let a = Expr::variable("x_1");
/// assert_eq!(!a.clone(), Expr::not(a));
/// ```
impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self)
    }
}

/// Logical NOT operator for references: `!&a`
impl Not for &Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        Expr::not(self.clone())
    }
}

/// Logical AND operator: `a & b`
impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::And, self, rhs)
    }
}

/// Logical AND operator for references: `&a & &b`
impl BitAnd for &Expr {
    type Output = Expr;

    fn bitand(self, rhs: &Expr) -> Expr {
        Expr::binary(BinaryOp::And, self.clone(), rhs.clone())
    }
}

/// Logical OR operator: `a | b`
///
/// Note that `|` in Rust source means OR, whereas in formula text `|` is NAND
/// and OR is written `+`.
impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Or, self, rhs)
    }
}

/// Logical OR operator for references: `&a | &b`
impl BitOr for &Expr {
    type Output = Expr;

    fn bitor(self, rhs: &Expr) -> Expr {
        Expr::binary(BinaryOp::Or, self.clone(), rhs.clone())
    }
}

/// Logical XOR operator: `a ^ b`
impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Xor, self, rhs)
    }
}

/// Logical XOR operator for references: `&a ^ &b`
impl BitXor for &Expr {
    type Output = Expr;

    fn bitxor(self, rhs: &Expr) -> Expr {
        Expr::binary(BinaryOp::Xor, self.clone(), rhs.clone())
    }
}
