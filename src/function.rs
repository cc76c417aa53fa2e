//! A formula together with everything derived from it
//!
//! [`BooleanFunction`] parses once, builds the truth table once and keeps the
//! per-variable analysis alongside. Removing fictitious variables replaces
//! the table and its analysis together, so the two never disagree.

use crate::error::FormulaError;
use crate::expression::Formula;
use crate::forms::{Notation, Zhegalkin};
use crate::table::{Essentiality, Reduction, RemovalMode, TruthTable};
use crate::AnalysisConfig;
use log::debug;
use std::sync::Arc;

/// Formula, truth table and variable analysis
///
/// # Examples
///
/// ```
/// use truth_forms::{BooleanFunction, Notation};
///
/// let mut f = BooleanFunction::parse("x_1 & y_1 + x_1").unwrap();
/// assert_eq!(f.table().num_variables(), 2);
///
/// let removed = f.remove_fictitious().to_vec();
/// assert_eq!(removed.len(), 1);
/// assert_eq!(&*removed[0], "y_1");
/// assert_eq!(f.sdnf(), "(x_1)");
/// ```
#[derive(Debug, Clone)]
pub struct BooleanFunction {
    formula: Formula,
    config: AnalysisConfig,
    table: TruthTable,
    essentiality: Essentiality,
    removed: Vec<Arc<str>>,
}

impl BooleanFunction {
    /// Parse a formula and build its table with the default configuration
    pub fn parse(input: &str) -> Result<Self, FormulaError> {
        BooleanFunction::new(Formula::parse(input)?)
    }

    /// Build the table of `formula` with the default configuration
    pub fn new(formula: Formula) -> Result<Self, FormulaError> {
        BooleanFunction::with_config(formula, AnalysisConfig::default())
    }

    /// Build the table of `formula` under `config`
    pub fn with_config(formula: Formula, config: AnalysisConfig) -> Result<Self, FormulaError> {
        let table = TruthTable::build_with_limit(&formula, config.max_variables)?;
        let essentiality = table.essentiality();
        Ok(BooleanFunction {
            formula,
            config,
            table,
            essentiality,
            removed: Vec::new(),
        })
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Current truth table, reduced if fictitious variables were removed
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Analysis of the current table
    pub fn essentiality(&self) -> &Essentiality {
        &self.essentiality
    }

    /// Variables removed so far
    pub fn removed(&self) -> &[Arc<str>] {
        &self.removed
    }

    /// Rebuild the full table from the formula, undoing any removal
    pub fn rebuild(&mut self) -> Result<(), FormulaError> {
        let table = TruthTable::build_with_limit(&self.formula, self.config.max_variables)?;
        self.essentiality = table.essentiality();
        self.table = table;
        self.removed.clear();
        Ok(())
    }

    /// Remove fictitious variables using the configured mode
    ///
    /// Returns every variable removed since the last rebuild.
    pub fn remove_fictitious(&mut self) -> &[Arc<str>] {
        self.remove_fictitious_with(self.config.removal)
    }

    pub fn remove_fictitious_with(&mut self, mode: RemovalMode) -> &[Arc<str>] {
        let Reduction { table, removed, .. } = self.table.remove_fictitious(mode);
        if !removed.is_empty() {
            debug!("{} removal dropped {} variable(s)", mode, removed.len());
            // Table and analysis are replaced together
            self.essentiality = table.essentiality();
            self.table = table;
            self.removed.extend(removed);
            self.removed.sort();
        }
        &self.removed
    }

    /// SDNF of the current table in the configured notation
    pub fn sdnf(&self) -> String {
        self.table.sdnf(self.config.notation)
    }

    /// SKNF of the current table in the configured notation
    pub fn sknf(&self) -> String {
        self.table.sknf(self.config.notation)
    }

    pub fn zhegalkin(&self) -> Zhegalkin {
        self.table.zhegalkin()
    }

    /// Zhegalkin polynomial as text in the configured notation
    pub fn anf(&self) -> String {
        self.table.anf(self.config.notation)
    }

    /// Truth table of the dual function
    pub fn dual(&self) -> TruthTable {
        self.table.dual()
    }

    pub fn notation(&self) -> Notation {
        self.config.notation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_build_and_forms() {
        let f = BooleanFunction::parse("x_1&y_1").unwrap();
        assert_eq!(f.table().values(), &[false, false, false, true]);
        assert_eq!(f.sdnf(), "(x_1∧y_1)");
        assert_eq!(f.anf(), "x_1·y_1");
        assert!(f.removed().is_empty());
    }

    #[test]
    fn test_remove_swaps_table_and_analysis() {
        let mut f = BooleanFunction::parse("x_1 @ x_1").unwrap();
        assert!(f.essentiality().is_fictitious(0));

        let removed = f.remove_fictitious().to_vec();
        assert_eq!(removed, vec![Arc::from("x_1")]);
        assert_eq!(f.table().num_variables(), 0);
        assert!(f.essentiality().variables().is_empty());
        assert_eq!(f.sdnf(), "0");
    }

    #[test]
    fn test_rebuild_restores_full_table() {
        let mut f = BooleanFunction::parse("a_1 + a_1 & b_1").unwrap();
        let full = f.table().clone();
        f.remove_fictitious();
        assert_eq!(f.table().num_variables(), 1);

        f.rebuild().unwrap();
        assert_eq!(f.table(), &full);
        assert!(f.removed().is_empty());
    }

    #[test]
    fn test_config_limits_and_notation() {
        let config = AnalysisConfig {
            max_variables: 1,
            ..AnalysisConfig::default()
        };
        let formula = Formula::parse("x_1 + y_1").unwrap();
        assert!(matches!(
            BooleanFunction::with_config(formula, config),
            Err(FormulaError::TooManyVariables { count: 2, max: 1 })
        ));

        let config = AnalysisConfig {
            notation: Notation::Ascii,
            ..AnalysisConfig::default()
        };
        let f = BooleanFunction::with_config(Formula::parse("-x_1").unwrap(), config).unwrap();
        assert_eq!(f.sdnf(), "(-x_1)");
        assert_eq!(f.anf(), "1 @ x_1");
    }

    #[test]
    fn test_repeated_removal_is_noop() {
        let mut f = BooleanFunction::parse("x_1 & (y_1 > y_1)").unwrap();
        let first = f.remove_fictitious().to_vec();
        let second = f.remove_fictitious().to_vec();
        assert_eq!(first, second);
    }
}
