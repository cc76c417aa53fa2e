//! Error types for formula lexing, bracket checking, parsing and evaluation
//!
//! Every position is a byte offset into the raw formula text.

use std::fmt;
use std::sync::Arc;

/// Errors raised while splitting formula text into tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that is not whitespace, an operator, a bracket or part of a variable
    UnknownCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character
        position: usize,
    },
    /// A run of variable characters that does not match `letter '_' digits`
    InvalidVariable {
        /// The rejected identifier
        name: Arc<str>,
        /// Byte offset where the identifier starts
        position: usize,
    },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnknownCharacter {
                character,
                position,
            } => write!(
                f,
                "invalid symbol {:?} at position {}",
                character, position
            ),
            LexError::InvalidVariable { name, position } => write!(
                f,
                "invalid variable name {:?} at position {} (expected a letter, '_' and digits, e.g. x_1)",
                name, position
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Errors raised by the bracket balance pre-check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    /// A closing bracket with no open bracket before it
    UnexpectedClose {
        /// The closing bracket
        bracket: char,
        /// Byte offset of the closing bracket
        position: usize,
    },
    /// A closing bracket whose kind differs from the innermost open bracket
    MismatchedClose {
        /// The innermost open bracket
        open: char,
        /// Byte offset of the open bracket
        open_position: usize,
        /// The closing bracket found
        close: char,
        /// Byte offset of the closing bracket
        position: usize,
    },
    /// An open bracket still unclosed at end of input
    Unclosed {
        /// The open bracket
        bracket: char,
        /// Byte offset of the open bracket
        position: usize,
    },
}

impl fmt::Display for BalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceError::UnexpectedClose { bracket, position } => write!(
                f,
                "unbalanced brackets: '{}' at position {} has no matching open bracket",
                bracket, position
            ),
            BalanceError::MismatchedClose {
                open,
                open_position,
                close,
                position,
            } => write!(
                f,
                "unbalanced brackets: '{}' at position {} closes '{}' opened at position {}",
                close, position, open, open_position
            ),
            BalanceError::Unclosed { bracket, position } => write!(
                f,
                "unbalanced brackets: '{}' at position {} is never closed",
                bracket, position
            ),
        }
    }
}

impl std::error::Error for BalanceError {}

/// Errors raised by the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The formula is empty or whitespace only
    Empty,
    /// An operand (variable, negation or bracketed sub-expression) was required
    ExpectedOperand {
        /// Text of the token found instead, `None` at end of input
        found: Option<String>,
        /// Byte offset of the token, `None` at end of input
        position: Option<usize>,
    },
    /// A complete formula was followed by more tokens
    TrailingInput {
        /// Text of the first unconsumed token
        found: String,
        /// Byte offset of the first unconsumed token
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty formula"),
            ParseError::ExpectedOperand {
                found: Some(found),
                position: Some(position),
            } => write!(
                f,
                "expected variable or sub-expression at position {}, found {:?}",
                position, found
            ),
            ParseError::ExpectedOperand { .. } => write!(
                f,
                "expected variable or sub-expression, found end of formula"
            ),
            ParseError::TrailingInput { found, position } => write!(
                f,
                "unexpected trailing characters at position {}: {:?}",
                position, found
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors raised while evaluating an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The assignment has no value for a variable used in the expression
    UnboundVariable {
        /// Name of the unbound variable
        name: Arc<str>,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable { name } => {
                write!(f, "variable not found in assignment: {}", name)
            }
        }
    }
}

impl std::error::Error for EvalError {}
