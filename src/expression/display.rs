//! Display formatting for expression trees
//!
//! Output uses the input grammar's own symbols and only the parentheses that
//! precedence and left-associativity require, so printing and re-parsing a
//! tree gives back the same tree.

use super::ast::Expr;
use super::operators::NOT_SYMBOL;
use std::fmt;

/// Which side of a binary parent a subtree sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Expr {
    /// Format with the precedence of the enclosing operator to minimise parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, parent: Option<(u8, Side)>) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Not(inner) => {
                write!(f, "{}", NOT_SYMBOL)?;
                match inner.as_ref() {
                    Expr::Binary(..) => {
                        write!(f, "(")?;
                        inner.fmt_with_context(f, None)?;
                        write!(f, ")")
                    }
                    _ => inner.fmt_with_context(f, None),
                }
            }
            Expr::Binary(op, left, right) => {
                let prec = op.precedence();
                // Equal precedence on the right would re-associate to the left
                let needs_parens = match parent {
                    None => false,
                    Some((outer, Side::Left)) => prec < outer,
                    Some((outer, Side::Right)) => prec <= outer,
                };

                if needs_parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, Some((prec, Side::Left)))?;
                write!(f, " {} ", op.symbol())?;
                right.fmt_with_context(f, Some((prec, Side::Right)))?;
                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

/// Display formatting for expressions
///
/// # Examples
///
/// ```
/// use truth_forms::Formula;
///
/// let formula = Formula::parse("((x_1 & y_1)) + -{z_1 @ x_1}").unwrap();
/// assert_eq!(formula.to_string(), "x_1 & y_1 + -(z_1 @ x_1)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ast::BinaryOp;
    use crate::expression::parser::parse_expr;

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn test_no_parens_for_tighter_child() {
        let expr = Expr::binary(
            BinaryOp::Or,
            Expr::binary(BinaryOp::And, var("x_1"), var("y_1")),
            var("z_1"),
        );
        assert_eq!(expr.to_string(), "x_1 & y_1 + z_1");
    }

    #[test]
    fn test_parens_for_looser_child() {
        let expr = Expr::binary(
            BinaryOp::And,
            Expr::binary(BinaryOp::Or, var("x_1"), var("y_1")),
            var("z_1"),
        );
        assert_eq!(expr.to_string(), "(x_1 + y_1) & z_1");
    }

    #[test]
    fn test_right_nested_same_level_keeps_parens() {
        let expr = Expr::binary(
            BinaryOp::Impl,
            var("x_1"),
            Expr::binary(BinaryOp::Impl, var("y_1"), var("z_1")),
        );
        assert_eq!(expr.to_string(), "x_1 > (y_1 > z_1)");

        let expr = Expr::binary(
            BinaryOp::Impl,
            Expr::binary(BinaryOp::Impl, var("x_1"), var("y_1")),
            var("z_1"),
        );
        assert_eq!(expr.to_string(), "x_1 > y_1 > z_1");
    }

    #[test]
    fn test_negation() {
        assert_eq!(Expr::not(Expr::not(var("x_1"))).to_string(), "--x_1");
        let expr = Expr::not(Expr::binary(BinaryOp::Nor, var("x_1"), var("y_1")));
        assert_eq!(expr.to_string(), "-(x_1 ! y_1)");
    }

    #[test]
    fn test_display_parse_round_trip() {
        let inputs = [
            "x_1",
            "-x_1",
            "x_1 & y_1 + z_1",
            "(x_1 + y_1) & z_1",
            "x_1 > (y_1 > z_1)",
            "x_1 ~ y_1 @ z_1",
            "-(x_1 | y_1) ! -z_1",
            "[a_1 > b_1] ~ {c_1 + -(d_1 @ a_1)}",
        ];
        for input in inputs {
            let expr = parse_expr(input).unwrap();
            let reparsed = parse_expr(&expr.to_string()).unwrap();
            assert_eq!(expr, reparsed, "round trip of {}", input);
        }
    }
}
