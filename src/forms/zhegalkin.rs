//! Zhegalkin polynomial (algebraic normal form)
//!
//! A monomial is stored as a bit mask in *natural* order: bit `j` stands for
//! variable `j`. Table rows use the opposite order (variable `j` is bit
//! `n - 1 - j`), so every conversion between the two goes through
//! [`natural_to_row`].

use super::Notation;
use crate::table::{TruthTable, VariableSet};
use log::debug;
use std::fmt;

/// Map a natural-order index to the table row with the same assignment
fn natural_to_row(natural: usize, n: usize) -> usize {
    (0..n)
        .filter(|&j| natural & (1 << j) != 0)
        .fold(0, |row, j| row | (1 << (n - 1 - j)))
}

/// XOR-sum of conjunctions of variables
///
/// The polynomial of a function is unique, so two tables are equal exactly
/// when their polynomials are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zhegalkin {
    variables: VariableSet,
    /// Monomial masks in ascending order; mask 0 is the constant 1
    monomials: Vec<usize>,
}

impl Zhegalkin {
    /// Compute the polynomial of a truth table with the Möbius transform
    pub fn from_table(table: &TruthTable) -> Self {
        let n = table.num_variables();
        let size = table.num_rows();

        let mut coeffs: Vec<bool> = (0..size)
            .map(|k| table.value(natural_to_row(k, n)))
            .collect();

        for bit in 0..n {
            let step = 1 << bit;
            for k in 0..size {
                if k & step != 0 {
                    coeffs[k] ^= coeffs[k ^ step];
                }
            }
        }

        let monomials: Vec<usize> = (0..size).filter(|&k| coeffs[k]).collect();
        debug!(
            "zhegalkin polynomial over {} variables: {} monomials",
            n,
            monomials.len()
        );
        Zhegalkin {
            variables: table.variables().clone(),
            monomials,
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Monomial masks, bit `j` set when variable `j` occurs
    pub fn monomials(&self) -> &[usize] {
        &self.monomials
    }

    /// Whether the constant term 1 is present
    pub fn has_constant(&self) -> bool {
        self.monomials.first() == Some(&0)
    }

    pub fn is_zero(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Largest number of variables in one monomial
    pub fn degree(&self) -> usize {
        self.monomials
            .iter()
            .map(|m| m.count_ones() as usize)
            .max()
            .unwrap_or(0)
    }

    /// Linear functions have no monomial of degree above 1
    pub fn is_linear(&self) -> bool {
        self.degree() <= 1
    }

    /// Evaluate with `inputs[j]` bound to variable `j`
    ///
    /// # Panics
    ///
    /// Panics if `inputs` does not have one value per variable.
    pub fn evaluate(&self, inputs: &[bool]) -> bool {
        assert_eq!(inputs.len(), self.variables.len(), "one input per variable");
        let point: usize = inputs
            .iter()
            .enumerate()
            .filter(|&(_, &bit)| bit)
            .fold(0, |acc, (j, _)| acc | (1 << j));
        // A monomial is 1 exactly when all of its variables are
        self.monomials
            .iter()
            .filter(|&&m| m & point == m)
            .count()
            % 2
            == 1
    }

    /// Expand back into a truth table
    pub fn to_table(&self) -> TruthTable {
        let n = self.variables.len();
        let values = (0..1usize << n)
            .map(|row| {
                let inputs: Vec<bool> = (0..n).map(|j| row & (1 << (n - 1 - j)) != 0).collect();
                self.evaluate(&inputs)
            })
            .collect();
        TruthTable::from_values(self.variables.clone(), values)
    }

    /// Render with the symbols of `notation`
    pub fn render(&self, notation: Notation) -> String {
        if self.monomials.is_empty() {
            return "0".to_string();
        }
        self.monomials
            .iter()
            .map(|&mask| {
                if mask == 0 {
                    return "1".to_string();
                }
                self.variables
                    .names()
                    .enumerate()
                    .filter(|&(j, _)| mask & (1 << j) != 0)
                    .map(|(_, name)| name)
                    .collect::<Vec<_>>()
                    .join(notation.product())
            })
            .collect::<Vec<_>>()
            .join(notation.xor())
    }
}

impl fmt::Display for Zhegalkin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Notation::Unicode))
    }
}

impl TruthTable {
    /// Zhegalkin polynomial of this function
    ///
    /// ```
    /// use truth_forms::{Formula, TruthTable};
    ///
    /// let table = TruthTable::build(&Formula::parse("x_1 + y_1").unwrap()).unwrap();
    /// assert_eq!(table.zhegalkin().to_string(), "x_1 ⊕ y_1 ⊕ x_1·y_1");
    /// ```
    pub fn zhegalkin(&self) -> Zhegalkin {
        Zhegalkin::from_table(self)
    }

    /// Zhegalkin polynomial rendered as text
    pub fn anf(&self, notation: Notation) -> String {
        self.zhegalkin().render(notation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Formula;

    fn table(input: &str) -> TruthTable {
        TruthTable::build(&Formula::parse(input).unwrap()).unwrap()
    }

    #[test]
    fn test_natural_to_row() {
        // bit 0 (first variable) lands on the highest row bit
        assert_eq!(natural_to_row(0b001, 3), 0b100);
        assert_eq!(natural_to_row(0b110, 3), 0b011);
        assert_eq!(natural_to_row(0, 0), 0);
    }

    #[test]
    fn test_and_or() {
        assert_eq!(table("x_1&y_1").anf(Notation::Unicode), "x_1·y_1");
        assert_eq!(table("x_1+y_1").anf(Notation::Unicode), "x_1 ⊕ y_1 ⊕ x_1·y_1");
    }

    #[test]
    fn test_constant_terms() {
        assert_eq!(table("-x_1").anf(Notation::Unicode), "1 ⊕ x_1");
        assert_eq!(table("x_1@x_1").anf(Notation::Unicode), "0");
        assert_eq!(table("x_1 > x_1").anf(Notation::Unicode), "1");
        assert_eq!(table("x_1 ~ y_1").anf(Notation::Ascii), "1 @ x_1 @ y_1");
    }

    #[test]
    fn test_asymmetric_function_uses_right_variables() {
        // x_1 & -y_1 = x_1 ⊕ x_1·y_1; swapping the index order would give y_1 terms
        let z = table("x_1 & -y_1").zhegalkin();
        assert_eq!(z.to_string(), "x_1 ⊕ x_1·y_1");
        assert_eq!(z.monomials(), &[0b01, 0b11]);
    }

    #[test]
    fn test_degree_and_linearity() {
        let xor = table("a_1 @ b_1 @ c_1").zhegalkin();
        assert_eq!(xor.degree(), 1);
        assert!(xor.is_linear());

        let and = table("a_1 & b_1 & c_1").zhegalkin();
        assert_eq!(and.degree(), 3);
        assert!(!and.is_linear());

        let zero = table("a_1 @ a_1").zhegalkin();
        assert!(zero.is_zero());
        assert_eq!(zero.degree(), 0);
    }

    #[test]
    fn test_expansion_matches_table() {
        for input in [
            "x_1 > y_1 & z_1",
            "-(a_1 | b_1) ~ c_1 + d_1",
            "[p_1 ! q_1] @ {r_1 & -p_1}",
        ] {
            let t = table(input);
            assert_eq!(t.zhegalkin().to_table(), t, "{}", input);
        }
    }

    #[test]
    fn test_evaluate_point() {
        let z = table("x_1 + y_1").zhegalkin();
        assert!(!z.evaluate(&[false, false]));
        assert!(z.evaluate(&[true, false]));
        assert!(z.evaluate(&[true, true]));
        assert!(!z.has_constant());
    }
}
