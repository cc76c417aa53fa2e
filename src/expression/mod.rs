//! Boolean formula text, its tokens and its expression tree
//!
//! A formula is written with variables of the form `x_1` (a letter, an
//! underscore and digits) and the following symbols:
//!
//! | Symbol          | Meaning                 | Precedence |
//! |-----------------|-------------------------|------------|
//! | `-`             | NOT (prefix)            | 6          |
//! | `&` `\|` `!`    | AND, NAND, NOR          | 5          |
//! | `+`             | OR                      | 4          |
//! | `@`             | XOR                     | 3          |
//! | `~`             | EQ (equivalence)        | 2          |
//! | `>`             | IMPL (implication)      | 1          |
//! | `()` `[]` `{}`  | grouping                |            |
//!
//! Binary operators are left-associative and may be chained freely. A
//! closing bracket must match the kind of the bracket it closes.
//!
//! # Examples
//!
//! ```
//! use truth_forms::Formula;
//!
//! let formula = Formula::parse("x_1 & y_1 + -z_1").unwrap();
//! let names: Vec<&str> = formula.variables().names().collect();
//! assert_eq!(names, ["x_1", "y_1", "z_1"]);
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
pub mod lexer;
mod operators;
mod parser;


pub use ast::{BinaryOp, Expr, ExprNode};
pub use error::{BalanceError, EvalError, LexError, ParseError};
pub use eval::Assignment;
pub use lexer::{BracketKind, Token};
pub use operators::NOT_SYMBOL;

use crate::error::FormulaError;
use crate::table::VariableSet;
use log::debug;
use std::fmt;
use std::sync::Arc;

/// A parsed boolean formula
///
/// Owns the raw source text, the expression tree and the sorted set of
/// variables that defines the column order of every table derived from it.
/// All three are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    source: Arc<str>,
    expr: Expr,
    variables: VariableSet,
}

impl Formula {
    /// Parse a formula from text
    ///
    /// Leading and trailing whitespace is ignored. Fails with the first
    /// [`BalanceError`], [`LexError`] or [`ParseError`] encountered.
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        let expr = parser::parse_expr(input)?;
        let formula = Formula::from_expr_with_source(expr, input.trim());
        debug!(
            "parsed formula {:?}: {} nodes, {} variables",
            formula.source(),
            formula.expr.size(),
            formula.variables.len()
        );
        Ok(formula)
    }

    /// Wrap an existing expression tree
    ///
    /// The source text is the tree's own rendering.
    pub fn from_expr(expr: Expr) -> Self {
        let source = expr.to_string();
        Formula::from_expr_with_source(expr, &source)
    }

    fn from_expr_with_source(expr: Expr, source: &str) -> Self {
        let variables = VariableSet::from_names(expr.collect_variables());
        Formula {
            source: Arc::from(source),
            expr,
            variables,
        }
    }

    /// The text this formula was parsed from, trimmed
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The expression tree
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Sorted, duplicate-free variables of the formula
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Evaluate the formula under an assignment
    pub fn evaluate<A: Assignment + ?Sized>(&self, assignment: &A) -> Result<bool, FormulaError> {
        Ok(self.expr.evaluate(assignment)?)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

impl std::str::FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

impl From<Expr> for Formula {
    fn from(expr: Expr) -> Self {
        Formula::from_expr(expr)
    }
}
