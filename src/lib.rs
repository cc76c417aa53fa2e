//! # Truth Forms
//!
//! Truth tables and canonical normal forms for boolean formulas.
//!
//! ## Overview
//!
//! A formula such as `x_1 & -y_1 > z_1` is parsed into an expression tree,
//! evaluated over every assignment of its variables, and the resulting truth
//! table is analysed:
//!
//! - variables that never affect the value (fictitious variables) are found
//!   and can be removed
//! - the perfect disjunctive and conjunctive normal forms (SDNF, SKNF) are
//!   synthesised
//! - the Zhegalkin polynomial (algebraic normal form) is computed
//! - the dual function is derived
//!
//! ## Quick Start
//!
//! ```
//! use truth_forms::{Formula, Notation, TruthTable};
//!
//! # fn main() -> Result<(), truth_forms::FormulaError> {
//! let formula = Formula::parse("x_1 + y_1")?;
//! let table = TruthTable::build(&formula)?;
//!
//! assert_eq!(table.values(), &[false, true, true, true]);
//! assert_eq!(table.sdnf(Notation::Unicode), "(¬x_1∧y_1)∨(x_1∧¬y_1)∨(x_1∧y_1)");
//! assert_eq!(table.sknf(Notation::Unicode), "(x_1∨y_1)");
//! assert_eq!(table.anf(Notation::Unicode), "x_1 ⊕ y_1 ⊕ x_1·y_1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Formulas Programmatically
//!
//! ```
//! use truth_forms::{Expr, Formula};
//!
//! let x = Expr::variable("x_1");
//! let y = Expr::variable("y_1");
//!
//! // `!` is NOT, `&` is AND, `|` is OR, `^` is XOR
//! let formula = Formula::from(!(x.clone() & y.clone()) ^ x);
//! assert_eq!(formula.source(), "-(x_1 & y_1) @ x_1");
//! ```
//!
//! ## Full Analysis
//!
//! [`BooleanFunction`] keeps a formula with its table and variable analysis,
//! and [`report`] renders everything as text:
//!
//! ```
//! use truth_forms::{report, BooleanFunction};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut function = BooleanFunction::parse("x_1 & y_1 + x_1")?;
//! let text = report::report_string(&mut function)?;
//! assert!(text.contains("y_1: fictitious"));
//! assert!(text.contains("SDNF: (x_1)"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade. Nothing is printed unless the
//! application installs a logger.

pub mod error;
pub mod expression;
pub mod forms;
mod function;
pub mod input;
pub mod report;
pub mod table;

pub use error::FormulaError;
pub use expression::{BinaryOp, Expr, ExprNode, Formula};
pub use forms::{Notation, Zhegalkin};
pub use function::BooleanFunction;
pub use table::{Essentiality, Reduction, RemovalMode, Row, TruthTable, VariableSet};

/// Default upper bound on the number of variables in a truth table
pub const DEFAULT_MAX_VARIABLES: usize = 20;

/// Hard upper bound on the number of variables in a truth table
///
/// Row indices are `usize`, so a table can have at most `usize::BITS - 1`
/// columns. Larger configured limits are lowered to this value.
pub const MAX_SUPPORTED_VARIABLES: usize = usize::BITS as usize - 1;

/// Options for analysing a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// How fictitious variables are removed
    pub removal: RemovalMode,
    /// Symbols used for normal forms
    pub notation: Notation,
    /// Largest number of distinct variables a table may be built for,
    /// capped at [`MAX_SUPPORTED_VARIABLES`]
    pub max_variables: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            removal: RemovalMode::Batch,
            notation: Notation::Unicode,
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
