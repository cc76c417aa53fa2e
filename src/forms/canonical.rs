//! Perfect disjunctive and conjunctive normal forms

use super::Notation;
use crate::table::TruthTable;

impl TruthTable {
    /// Perfect disjunctive normal form (SDNF)
    ///
    /// One parenthesised minterm per true row, literals in variable order,
    /// a variable negated where its bit is 0. An all-false function gives `"0"`.
    ///
    /// ```
    /// use truth_forms::{Formula, Notation, TruthTable};
    ///
    /// let table = TruthTable::build(&Formula::parse("x_1 & y_1").unwrap()).unwrap();
    /// assert_eq!(table.sdnf(Notation::Unicode), "(x_1∧y_1)");
    /// ```
    pub fn sdnf(&self, notation: Notation) -> String {
        self.canonical(true, notation)
    }

    /// Perfect conjunctive normal form (SKNF)
    ///
    /// One parenthesised maxterm per false row, a variable negated where its
    /// bit is 1. A tautology gives `"1"`.
    pub fn sknf(&self, notation: Notation) -> String {
        self.canonical(false, notation)
    }

    /// Shared builder: `target` selects the rows that produce terms
    fn canonical(&self, target: bool, notation: Notation) -> String {
        let (inner, outer) = if target {
            (notation.and(), notation.or())
        } else {
            (notation.or(), notation.and())
        };

        let terms: Vec<String> = self
            .rows()
            .filter(|row| row.value() == target)
            .map(|row| {
                let literals: Vec<String> = row
                    .assignment()
                    .map(|(name, bit)| {
                        // Minterms negate 0 bits, maxterms negate 1 bits
                        if bit == target {
                            name.to_string()
                        } else {
                            format!("{}{}", notation.not(), name)
                        }
                    })
                    .collect();
                literals.join(inner)
            })
            .collect();

        if terms.is_empty() {
            return if target { "0" } else { "1" }.to_string();
        }

        terms
            .iter()
            .map(|term| {
                if term.is_empty() {
                    // A table with no variables: the single row is the constant
                    if target { "1" } else { "0" }.to_string()
                } else {
                    format!("({})", term)
                }
            })
            .collect::<Vec<_>>()
            .join(outer)
    }
}
