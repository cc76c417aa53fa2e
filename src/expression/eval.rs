//! Evaluation of expression trees under a variable assignment

use super::ast::{Expr, ExprNode};
use super::error::EvalError;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Source of variable values for evaluation
///
/// Implemented for the usual map types and for truth-table rows, so the same
/// evaluator serves interactive use and exhaustive table building.
pub trait Assignment {
    /// Value bound to `name`, or `None` if the variable is unbound
    fn value_of(&self, name: &str) -> Option<bool>;
}

impl Assignment for HashMap<Arc<str>, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Assignment for BTreeMap<Arc<str>, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Assignment for HashMap<&str, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<A: Assignment + ?Sized> Assignment for &A {
    fn value_of(&self, name: &str) -> Option<bool> {
        (**self).value_of(name)
    }
}

impl Expr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Every variable referenced by the expression must be bound; the first
    /// unbound one encountered aborts evaluation.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_forms::Formula;
    /// use std::collections::HashMap;
    ///
    /// let formula = Formula::parse("x_1 > y_1").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert("x_1", true);
    /// assignment.insert("y_1", false);
    /// assert_eq!(formula.expr().evaluate(&assignment), Ok(false));
    ///
    /// assignment.remove("y_1");
    /// assert!(formula.expr().evaluate(&assignment).is_err());
    /// ```
    pub fn evaluate<A: Assignment + ?Sized>(&self, assignment: &A) -> Result<bool, EvalError> {
        self.fold(|node: ExprNode<'_, Result<bool, EvalError>>| match node {
            ExprNode::Variable(name) => {
                assignment
                    .value_of(name)
                    .ok_or_else(|| EvalError::UnboundVariable {
                        name: Arc::from(name),
                    })
            }
            ExprNode::Not(inner) => Ok(!inner?),
            ExprNode::Binary(op, left, right) => Ok(op.apply(left?, right?)),
        })
    }
}
