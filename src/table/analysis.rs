//! Fictitious-variable detection and removal

use super::{TruthTable, VariableSet};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Strategy for removing fictitious variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RemovalMode {
    /// Detect once, then remove every detected variable in one pass
    #[default]
    Batch,
    /// Repeat detection and removal until no fictitious variable remains
    FixedPoint,
}

/// Per-variable verdict of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Essentiality {
    variables: VariableSet,
    essential: Vec<bool>,
}

impl Essentiality {
    /// Variables the verdicts refer to, in column order
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Whether variable `var` affects the value
    pub fn is_essential(&self, var: usize) -> bool {
        self.essential[var]
    }

    /// Whether variable `var` never affects the value
    pub fn is_fictitious(&self, var: usize) -> bool {
        !self.essential[var]
    }

    /// Variable names paired with `true` when essential
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.variables.names().zip(self.essential.iter().copied())
    }

    /// Column indices of the fictitious variables
    pub fn fictitious_indices(&self) -> Vec<usize> {
        (0..self.essential.len()).filter(|&v| !self.essential[v]).collect()
    }

    /// Names of the fictitious variables, in column order
    pub fn fictitious(&self) -> Vec<Arc<str>> {
        self.variables
            .iter()
            .zip(&self.essential)
            .filter(|(_, &essential)| !essential)
            .map(|(name, _)| Arc::clone(name))
            .collect()
    }

    pub fn has_fictitious(&self) -> bool {
        self.essential.iter().any(|&e| !e)
    }
}

/// Result of removing fictitious variables from a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Table over the remaining variables
    pub table: TruthTable,
    /// Removed variable names, in the column order of the original table
    pub removed: Vec<Arc<str>>,
    /// Number of detect-and-remove passes that removed something
    pub passes: usize,
}

impl TruthTable {
    /// Check whether variable `var` never affects the value
    ///
    /// Compares every row where the variable is 0 with its partner row where
    /// it is 1.
    pub fn is_fictitious(&self, var: usize) -> bool {
        let mask = self.mask(var);
        (0..self.num_rows())
            .filter(|&i| i & mask == 0)
            .all(|i| self.values[i] == self.values[i | mask])
    }

    /// Classify every variable as essential or fictitious
    pub fn essentiality(&self) -> Essentiality {
        let essential = (0..self.num_variables())
            .map(|var| !self.is_fictitious(var))
            .collect();
        Essentiality {
            variables: self.variables.clone(),
            essential,
        }
    }

    /// Remove the given variables, which must all be fictitious
    ///
    /// Each pair of rows that differ only in removed variables collapses to
    /// the row where those variables are 0.
    pub fn remove_variables(&self, remove: &[usize]) -> TruthTable {
        debug_assert!(
            remove.iter().all(|&v| self.is_fictitious(v)),
            "only fictitious variables can be removed"
        );
        let keep: Vec<usize> = (0..self.num_variables())
            .filter(|v| !remove.contains(v))
            .collect();
        self.project(&keep)
    }

    /// Remove fictitious variables according to `mode`
    pub fn remove_fictitious(&self, mode: RemovalMode) -> Reduction {
        let mut table = self.clone();
        let mut removed = Vec::new();
        let mut passes = 0;

        loop {
            let essentiality = table.essentiality();
            let indices = essentiality.fictitious_indices();
            if indices.is_empty() {
                break;
            }

            let names = essentiality.fictitious();
            debug!(
                "pass {}: removing {} fictitious variable(s): {}",
                passes + 1,
                names.len(),
                names.iter().map(|n| n.as_ref()).collect::<Vec<_>>().join(", ")
            );
            table = table.remove_variables(&indices);
            removed.extend(names);
            passes += 1;

            if mode == RemovalMode::Batch {
                break;
            }
        }

        // Keep the report order stable regardless of how many passes ran
        removed.sort();
        debug!(
            "reduced table from {} to {} variables",
            self.num_variables(),
            table.num_variables()
        );
        Reduction {
            table,
            removed,
            passes,
        }
    }
}

impl fmt::Display for RemovalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalMode::Batch => write!(f, "batch"),
            RemovalMode::FixedPoint => write!(f, "fixed-point"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Formula;
    use test_log::test;

    fn table(input: &str) -> TruthTable {
        TruthTable::build(&Formula::parse(input).unwrap()).unwrap()
    }

    #[test]
    fn test_all_essential() {
        let t = table("x_1 & y_1");
        let e = t.essentiality();
        assert!(e.is_essential(0));
        assert!(e.is_essential(1));
        assert!(!e.has_fictitious());
        assert!(e.fictitious().is_empty());
    }

    #[test]
    fn test_self_xor_is_fictitious() {
        let t = table("x_1 @ x_1");
        assert!(t.is_fictitious(0));
        assert_eq!(t.essentiality().fictitious(), vec![Arc::from("x_1")]);
    }

    #[test]
    fn test_absorbed_variable_is_fictitious() {
        // x_1 + x_1 & y_1 == x_1
        let t = table("x_1 + x_1 & y_1");
        let e = t.essentiality();
        assert_eq!(e.iter().collect::<Vec<_>>(), vec![("x_1", true), ("y_1", false)]);
    }

    #[test]
    fn test_fictitious_flip_never_changes_value() {
        let t = table("a_1 & (b_1 + -b_1) @ c_1 ~ c_1");
        let e = t.essentiality();
        for var in e.fictitious_indices() {
            let mask = t.mask(var);
            for i in 0..t.num_rows() {
                assert_eq!(t.value(i), t.value(i ^ mask));
            }
        }
    }

    #[test]
    fn test_remove_collapses_rows() {
        let t = table("x_1 & (y_1 + -y_1) + z_1 & -z_1");
        let reduction = t.remove_fictitious(RemovalMode::Batch);
        assert_eq!(reduction.removed, vec![Arc::from("y_1"), Arc::from("z_1")]);
        assert_eq!(reduction.passes, 1);
        assert_eq!(reduction.table.num_variables(), 1);
        assert_eq!(reduction.table.values(), &[false, true]);
    }

    #[test]
    fn test_remove_all_variables_leaves_constant() {
        let t = table("x_1 @ x_1");
        let reduction = t.remove_fictitious(RemovalMode::Batch);
        assert_eq!(reduction.table.num_variables(), 0);
        assert_eq!(reduction.table.values(), &[false]);
    }

    #[test]
    fn test_nothing_to_remove() {
        let t = table("x_1 @ y_1");
        let reduction = t.remove_fictitious(RemovalMode::FixedPoint);
        assert!(reduction.removed.is_empty());
        assert_eq!(reduction.passes, 0);
        assert_eq!(reduction.table, t);
    }

    #[test]
    fn test_modes_agree() {
        for input in ["a_1 + a_1 & b_1", "x_1 > x_1 & y_1 + z_1 @ z_1", "p_1 ~ q_1"] {
            let t = table(input);
            let batch = t.remove_fictitious(RemovalMode::Batch);
            let fixed = t.remove_fictitious(RemovalMode::FixedPoint);
            assert_eq!(batch.table, fixed.table, "{}", input);
            assert_eq!(batch.removed, fixed.removed, "{}", input);
        }
    }

    #[test]
    fn test_reduced_table_agrees_with_original() {
        let formula = Formula::parse("x_1 & -w_1 + (y_1 > y_1) & -x_1 & -w_1").unwrap();
        let t = TruthTable::build(&formula).unwrap();
        let reduced = t.remove_fictitious(RemovalMode::Batch).table;
        for row in t.rows() {
            let index = reduced
                .variables()
                .names()
                .enumerate()
                .filter(|&(_, name)| {
                    let var = t.variables().position(name).unwrap();
                    row.input(var)
                })
                .fold(0, |acc, (j, _)| acc | reduced.mask(j));
            assert_eq!(reduced.value(index), row.value());
        }
    }
}
