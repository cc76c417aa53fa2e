//! Parsing support for boolean formulas

use super::ast::Expr;
use super::error::ParseError;
use super::lexer::{check_balance, Lexer, Token};
use crate::error::FormulaError;
use lalrpop_util::ParseError as LalrpopError;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/formula.rs"));
}

/// Parse formula text into an expression tree
///
/// Processing order is fixed: empty check, bracket balance over the raw text,
/// then tokenization and grammar in one streaming pass. The first failure
/// aborts parsing.
pub(crate) fn parse_expr(input: &str) -> Result<Expr, FormulaError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty.into());
    }

    check_balance(input)?;

    parser_impl::FormulaParser::new()
        .parse(Lexer::new(input))
        .map_err(convert_error)
}

/// Map a generated-parser error onto the crate's error taxonomy
fn convert_error(err: LalrpopError<usize, Token, super::error::LexError>) -> FormulaError {
    match err {
        LalrpopError::User { error } => error.into(),
        LalrpopError::UnrecognizedEof { .. } => ParseError::ExpectedOperand {
            found: None,
            position: None,
        }
        .into(),
        LalrpopError::UnrecognizedToken {
            token: (start, token, _),
            expected,
        } => {
            // When an operand could have started here, the formula is
            // incomplete; otherwise a complete formula is followed by junk.
            if expects_operand(&expected) {
                ParseError::ExpectedOperand {
                    found: Some(token.to_string()),
                    position: Some(start),
                }
                .into()
            } else {
                ParseError::TrailingInput {
                    found: token.to_string(),
                    position: start,
                }
                .into()
            }
        }
        LalrpopError::ExtraToken {
            token: (start, token, _),
        } => ParseError::TrailingInput {
            found: token.to_string(),
            position: start,
        }
        .into(),
        // Only produced by lalrpop's built-in lexer, which is not used here.
        LalrpopError::InvalidToken { location } => ParseError::ExpectedOperand {
            found: None,
            position: Some(location),
        }
        .into(),
    }
}

fn expects_operand(expected: &[String]) -> bool {
    expected.iter().any(|terminal| terminal == "\"var\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::ast::BinaryOp;
    use crate::expression::error::{BalanceError, LexError};

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn test_single_variable() {
        assert_eq!(parse_expr("x_1").unwrap(), var("x_1"));
        assert_eq!(parse_expr("  x_1\t\n").unwrap(), var("x_1"));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(
            parse_expr("x_1 + y_1 & z_1").unwrap(),
            Expr::binary(
                BinaryOp::Or,
                var("x_1"),
                Expr::binary(BinaryOp::And, var("y_1"), var("z_1"))
            )
        );
    }

    #[test]
    fn test_full_precedence_ladder() {
        // a > b ~ c @ d + e & -f  ==  a > (b ~ (c @ (d + (e & -f))))
        let expected = Expr::binary(
            BinaryOp::Impl,
            var("a_1"),
            Expr::binary(
                BinaryOp::Eq,
                var("b_1"),
                Expr::binary(
                    BinaryOp::Xor,
                    var("c_1"),
                    Expr::binary(
                        BinaryOp::Or,
                        var("d_1"),
                        Expr::binary(BinaryOp::And, var("e_1"), Expr::not(var("f_1"))),
                    ),
                ),
            ),
        );
        assert_eq!(
            parse_expr("a_1 > b_1 ~ c_1 @ d_1 + e_1 & -f_1").unwrap(),
            expected
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            parse_expr("x_1 > y_1 > z_1").unwrap(),
            Expr::binary(
                BinaryOp::Impl,
                Expr::binary(BinaryOp::Impl, var("x_1"), var("y_1")),
                var("z_1")
            )
        );
        // NAND, NOR and AND share a level
        assert_eq!(
            parse_expr("x_1 | y_1 & z_1 ! w_1").unwrap(),
            Expr::binary(
                BinaryOp::Nor,
                Expr::binary(
                    BinaryOp::And,
                    Expr::binary(BinaryOp::Nand, var("x_1"), var("y_1")),
                    var("z_1")
                ),
                var("w_1")
            )
        );
    }

    #[test]
    fn test_negation_and_brackets() {
        assert_eq!(
            parse_expr("--x_1").unwrap(),
            Expr::not(Expr::not(var("x_1")))
        );
        assert_eq!(
            parse_expr("-[x_1 + {y_1}]").unwrap(),
            Expr::not(Expr::binary(BinaryOp::Or, var("x_1"), var("y_1")))
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_expr("   "),
            Err(FormulaError::Parse(ParseError::Empty))
        ));
        assert!(matches!(
            parse_expr(""),
            Err(FormulaError::Parse(ParseError::Empty))
        ));
    }

    #[test]
    fn test_double_operator() {
        assert!(matches!(
            parse_expr("x_1&&y_1"),
            Err(FormulaError::Parse(ParseError::ExpectedOperand {
                position: Some(4),
                ..
            }))
        ));
    }

    #[test]
    fn test_missing_right_operand() {
        assert!(matches!(
            parse_expr("x_1 &"),
            Err(FormulaError::Parse(ParseError::ExpectedOperand {
                found: None,
                ..
            }))
        ));
    }

    #[test]
    fn test_trailing_input() {
        assert!(matches!(
            parse_expr("x_1 y_1"),
            Err(FormulaError::Parse(ParseError::TrailingInput { position: 4, .. }))
        ));
        assert!(matches!(
            parse_expr("(x_1) -y_1"),
            Err(FormulaError::Parse(ParseError::TrailingInput { .. }))
        ));
    }

    #[test]
    fn test_empty_brackets() {
        assert!(matches!(
            parse_expr("x_1 & ()"),
            Err(FormulaError::Parse(ParseError::ExpectedOperand { .. }))
        ));
    }

    #[test]
    fn test_balance_checked_before_lexing() {
        // The stray '#' would be a lexical error, but balance is checked first.
        assert!(matches!(
            parse_expr("(x_1 # y_1"),
            Err(FormulaError::Balance(BalanceError::Unclosed { .. }))
        ));
        assert!(matches!(
            parse_expr("[x_1 & y_1)"),
            Err(FormulaError::Balance(BalanceError::MismatchedClose { .. }))
        ));
    }

    #[test]
    fn test_lex_errors_propagate() {
        assert!(matches!(
            parse_expr("x & y_1"),
            Err(FormulaError::Lex(LexError::InvalidVariable { .. }))
        ));
        assert!(matches!(
            parse_expr("x_1 = y_1"),
            Err(FormulaError::Lex(LexError::UnknownCharacter { character: '=', .. }))
        ));
    }
}
