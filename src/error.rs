//! Error types for formula analysis
//!
//! [`FormulaError`] is the single error type returned by the public API. Each
//! stage of processing contributes its own variant so callers can tell a bad
//! character from a bracket mismatch or a grammar error programmatically.

use crate::expression::error::{BalanceError, EvalError, LexError, ParseError};
use std::fmt;
use std::io;

/// The main error type for formula analysis
#[derive(Debug)]
pub enum FormulaError {
    /// Bad character or malformed variable name
    Lex(LexError),

    /// Bracket mismatch or unclosed bracket
    Balance(BalanceError),

    /// Malformed grammar, trailing tokens or empty input
    Parse(ParseError),

    /// Unbound variable during evaluation
    Eval(EvalError),

    /// The formula has more distinct variables than a table may be built for
    ///
    /// Truth tables double in size with every variable, so the limit is set
    /// by [`AnalysisConfig::max_variables`](crate::AnalysisConfig::max_variables).
    TooManyVariables {
        /// Number of distinct variables in the formula
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// IO error wrapper
    ///
    /// Wraps standard IO errors raised while reading formula files or writing reports.
    Io(io::Error),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::Lex(err) => write!(f, "lexical error: {}", err),
            FormulaError::Balance(err) => write!(f, "{}", err),
            FormulaError::Parse(err) => write!(f, "parse error: {}", err),
            FormulaError::Eval(err) => write!(f, "evaluation error: {}", err),
            FormulaError::TooManyVariables { count, max } => write!(
                f,
                "formula has {} variables, but truth tables are limited to {}",
                count, max
            ),
            FormulaError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormulaError::Lex(err) => Some(err),
            FormulaError::Balance(err) => Some(err),
            FormulaError::Parse(err) => Some(err),
            FormulaError::Eval(err) => Some(err),
            FormulaError::TooManyVariables { .. } => None,
            FormulaError::Io(err) => Some(err),
        }
    }
}

impl From<LexError> for FormulaError {
    fn from(err: LexError) -> Self {
        FormulaError::Lex(err)
    }
}

impl From<BalanceError> for FormulaError {
    fn from(err: BalanceError) -> Self {
        FormulaError::Balance(err)
    }
}

impl From<ParseError> for FormulaError {
    fn from(err: ParseError) -> Self {
        FormulaError::Parse(err)
    }
}

impl From<EvalError> for FormulaError {
    fn from(err: EvalError) -> Self {
        FormulaError::Eval(err)
    }
}

impl From<io::Error> for FormulaError {
    fn from(err: io::Error) -> Self {
        FormulaError::Io(err)
    }
}

// Conversion from FormulaError to io::Error for use in IO-centric callers
impl From<FormulaError> for io::Error {
    fn from(err: FormulaError) -> Self {
        match err {
            FormulaError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
