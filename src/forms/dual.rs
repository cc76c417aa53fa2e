use crate::table::TruthTable;

impl TruthTable {
    /// The dual function `¬f(¬x)`
    ///
    /// Row `i` of the dual is the negated value of row `2^n - 1 - i`.
    ///
    /// ```
    /// use truth_forms::{Formula, TruthTable};
    ///
    /// let and = TruthTable::build(&Formula::parse("x_1 & y_1").unwrap()).unwrap();
    /// let or = TruthTable::build(&Formula::parse("x_1 + y_1").unwrap()).unwrap();
    /// assert_eq!(and.dual(), or);
    /// ```
    pub fn dual(&self) -> TruthTable {
        let values = self.values().iter().rev().map(|&v| !v).collect();
        TruthTable::from_values(self.variables().clone(), values)
    }

    /// Whether the function equals its own dual
    pub fn is_self_dual(&self) -> bool {
        self.values()
            .iter()
            .zip(self.values().iter().rev())
            .all(|(&a, &b)| a != b)
    }
}
