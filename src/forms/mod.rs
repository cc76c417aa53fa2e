//! Canonical forms derived from a truth table
//!
//! - [`TruthTable::sdnf`]: disjunction of minterms over the true rows
//! - [`TruthTable::sknf`]: conjunction of maxterms over the false rows
//! - [`TruthTable::zhegalkin`]: XOR-sum of monomials (algebraic normal form)
//! - [`TruthTable::dual`]: the dual function `¬f(¬x)`
//!
//! Text output comes in two [`Notation`]s. The ASCII notation uses the
//! formula grammar's own symbols, so its output can be parsed back:
//!
//! ```
//! use truth_forms::{Formula, Notation, TruthTable};
//!
//! let table = TruthTable::build(&Formula::parse("x_1 > y_1").unwrap()).unwrap();
//! let sknf = table.sknf(Notation::Ascii);
//! assert_eq!(sknf, "(-x_1+y_1)");
//!
//! let reparsed = TruthTable::build(&Formula::parse(&sknf).unwrap()).unwrap();
//! assert_eq!(reparsed, table);
//! ```
//!
//! [`TruthTable::sdnf`]: crate::TruthTable::sdnf
//! [`TruthTable::sknf`]: crate::TruthTable::sknf
//! [`TruthTable::zhegalkin`]: crate::TruthTable::zhegalkin
//! [`TruthTable::dual`]: crate::TruthTable::dual

mod canonical;
mod dual;
mod zhegalkin;

pub use zhegalkin::Zhegalkin;

use std::fmt;

/// Symbol set used when rendering normal forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    /// `¬ ∧ ∨ ⊕ ·`
    #[default]
    Unicode,
    /// `- & + @ &`, readable by the formula parser
    Ascii,
}

impl Notation {
    /// Negation prefix
    pub fn not(self) -> &'static str {
        match self {
            Notation::Unicode => "¬",
            Notation::Ascii => "-",
        }
    }

    /// Conjunction sign inside a minterm
    pub fn and(self) -> &'static str {
        match self {
            Notation::Unicode => "∧",
            Notation::Ascii => "&",
        }
    }

    /// Disjunction sign inside a maxterm
    pub fn or(self) -> &'static str {
        match self {
            Notation::Unicode => "∨",
            Notation::Ascii => "+",
        }
    }

    /// XOR separator between monomials, with surrounding spaces
    pub fn xor(self) -> &'static str {
        match self {
            Notation::Unicode => " ⊕ ",
            Notation::Ascii => " @ ",
        }
    }

    /// Product sign inside a monomial
    pub fn product(self) -> &'static str {
        match self {
            Notation::Unicode => "·",
            Notation::Ascii => "&",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Unicode => write!(f, "unicode"),
            Notation::Ascii => write!(f, "ascii"),
        }
    }
}
