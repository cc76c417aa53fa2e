//! Truth tables over a sorted variable set
//!
//! Row `i` of a table with `n` variables assigns variable `j` the bit
//! `n - 1 - j` of `i`: the first variable varies slowest, the last fastest.
//! Every derivation in this crate (normal forms, Zhegalkin polynomial,
//! fictitious-variable analysis, dual function) relies on this ordering.
//!
//! # Examples
//!
//! ```
//! use truth_forms::{Formula, TruthTable};
//!
//! let formula = Formula::parse("x_1 & y_1").unwrap();
//! let table = TruthTable::build(&formula).unwrap();
//!
//! assert_eq!(table.num_rows(), 4);
//! assert_eq!(table.values(), &[false, false, false, true]);
//!
//! let row = table.row(2);
//! assert_eq!(row.inputs().collect::<Vec<_>>(), vec![true, false]);
//! ```

mod analysis;

pub use analysis::{Essentiality, Reduction, RemovalMode};

use crate::error::FormulaError;
use crate::expression::{Assignment, Formula};
use crate::{DEFAULT_MAX_VARIABLES, MAX_SUPPORTED_VARIABLES};
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Ordered, duplicate-free list of variable names
///
/// Names are kept in lexicographic order; this order is the column order of
/// every table and the literal order of every normal form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VariableSet(Vec<Arc<str>>);

impl VariableSet {
    /// Create an empty variable set
    pub fn new() -> Self {
        VariableSet(Vec::new())
    }

    /// Build a set from names in any order, sorting and removing duplicates
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = Arc<str>>,
    {
        let sorted: BTreeSet<Arc<str>> = names.into_iter().collect();
        VariableSet(sorted.into_iter().collect())
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no variables
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name of the variable at column `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|name| name.as_ref())
    }

    /// Column index of `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.binary_search_by(|probe| probe.as_ref().cmp(name)).ok()
    }

    /// Iterate over names in column order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|name| name.as_ref())
    }

    /// Iterate over the shared name handles in column order
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<str>> {
        self.0.iter()
    }

    /// Keep only the columns listed in `keep` (ascending indices)
    pub(crate) fn select(&self, keep: &[usize]) -> VariableSet {
        VariableSet(keep.iter().map(|&i| Arc::clone(&self.0[i])).collect())
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a Arc<str>;
    type IntoIter = std::slice::Iter<'a, Arc<str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A boolean function given by its value on every assignment
///
/// The table always holds exactly `2^n` values for `n` variables. It is
/// immutable: reductions and the dual function produce new tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    variables: VariableSet,
    values: Vec<bool>,
}

impl TruthTable {
    /// Build the table of a formula over its own variables
    ///
    /// Fails with [`FormulaError::TooManyVariables`] above the default limit.
    pub fn build(formula: &Formula) -> Result<Self, FormulaError> {
        TruthTable::build_with_limit(formula, DEFAULT_MAX_VARIABLES)
    }

    /// Build the table of a formula, refusing more than `max_variables` columns
    ///
    /// Limits above [`MAX_SUPPORTED_VARIABLES`] are lowered to it, since row
    /// indices must fit in a `usize`.
    pub fn build_with_limit(formula: &Formula, max_variables: usize) -> Result<Self, FormulaError> {
        let max_variables = max_variables.min(MAX_SUPPORTED_VARIABLES);
        let variables = formula.variables().clone();
        let n = variables.len();
        if n > max_variables {
            return Err(FormulaError::TooManyVariables {
                count: n,
                max: max_variables,
            });
        }

        let num_rows = 1usize << n;
        debug!("building truth table: {} variables, {} rows", n, num_rows);

        let mut values = Vec::with_capacity(num_rows);
        for index in 0..num_rows {
            let assignment = RowAssignment {
                variables: &variables,
                index,
            };
            let value = formula.evaluate(&assignment)?;
            trace!("row {:0width$b} -> {}", index, value as u8, width = n.max(1));
            values.push(value);
        }

        Ok(TruthTable { variables, values })
    }

    /// Create a table from raw values in row order
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` is not `2^variables.len()`, or if there are
    /// more than [`MAX_SUPPORTED_VARIABLES`] variables.
    pub fn from_values(variables: VariableSet, values: Vec<bool>) -> Self {
        assert!(
            variables.len() <= MAX_SUPPORTED_VARIABLES,
            "truth table over {} variables exceeds the supported {}",
            variables.len(),
            MAX_SUPPORTED_VARIABLES
        );
        let num_rows = 1usize << variables.len();
        assert_eq!(
            values.len(),
            num_rows,
            "truth table over {} variables needs {} rows",
            variables.len(),
            num_rows
        );
        TruthTable { variables, values }
    }

    /// Column variables, in order
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Number of variables (columns)
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows, always `2^num_variables()`
    pub fn num_rows(&self) -> usize {
        self.values.len()
    }

    /// Function values in row order
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Function value at row `index`
    pub fn value(&self, index: usize) -> bool {
        self.values[index]
    }

    /// Bit mask selecting variable `var` within a row index
    pub fn mask(&self, var: usize) -> usize {
        debug_assert!(var < self.num_variables());
        1usize << (self.num_variables() - 1 - var)
    }

    /// Value of variable `var` in row `index`
    pub fn input(&self, index: usize, var: usize) -> bool {
        index & self.mask(var) != 0
    }

    /// Row at `index`; panics when out of range
    pub fn row(&self, index: usize) -> Row<'_> {
        assert!(index < self.num_rows(), "row {} out of range", index);
        Row { table: self, index }
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        (0..self.num_rows()).map(move |index| Row { table: self, index })
    }

    /// Number of rows where the function is true
    pub fn count_true(&self) -> usize {
        self.values.iter().filter(|&&v| v).count()
    }

    /// `Some(value)` if the function is constant, `None` otherwise
    pub fn constant(&self) -> Option<bool> {
        let first = self.values[0];
        self.values.iter().all(|&v| v == first).then_some(first)
    }

    /// Restrict the table to the columns in `keep`, fixing the others to 0
    ///
    /// The dropped columns must not influence the value, which is what makes
    /// fixing them to 0 lossless.
    pub(crate) fn project(&self, keep: &[usize]) -> TruthTable {
        let n = self.num_variables();
        let m = keep.len();
        let values = (0..1usize << m)
            .map(|k| {
                let index = keep
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| k & (1 << (m - 1 - j)) != 0)
                    .fold(0usize, |acc, (_, &var)| acc | (1 << (n - 1 - var)));
                self.values[index]
            })
            .collect();
        TruthTable {
            variables: self.variables.select(keep),
            values,
        }
    }
}

/// One row of a truth table
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a TruthTable,
    index: usize,
}

impl<'a> Row<'a> {
    /// Row index, the assignment read as a binary number
    pub fn index(&self) -> usize {
        self.index
    }

    /// Function value in this row
    pub fn value(&self) -> bool {
        self.table.values[self.index]
    }

    /// Value of variable `var` in this row
    pub fn input(&self, var: usize) -> bool {
        self.table.input(self.index, var)
    }

    /// Variable values in column order
    pub fn inputs(&self) -> impl Iterator<Item = bool> + 'a {
        let table = self.table;
        let index = self.index;
        (0..table.num_variables()).map(move |var| table.input(index, var))
    }

    /// Variable names paired with their values in this row
    pub fn assignment(&self) -> impl Iterator<Item = (&'a str, bool)> + 'a {
        let table = self.table;
        let index = self.index;
        table
            .variables
            .names()
            .enumerate()
            .map(move |(var, name)| (name, table.input(index, var)))
    }
}

/// Assignment view of a row index over a variable set
struct RowAssignment<'a> {
    variables: &'a VariableSet,
    index: usize,
}

impl Assignment for RowAssignment<'_> {
    fn value_of(&self, name: &str) -> Option<bool> {
        let n = self.variables.len();
        self.variables
            .position(name)
            .map(|var| self.index & (1 << (n - 1 - var)) != 0)
    }
}
