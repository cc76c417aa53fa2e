//! Expression tree and tree traversal operations
//!
//! This module contains the tree type produced by the parser and the fold
//! operation every other pass (variable collection, evaluation, display) is
//! written in terms of.

use std::collections::BTreeSet;
use std::sync::Arc;

/// Binary connectives accepted in a formula
///
/// Each operator maps 1:1 to a single input symbol:
///
/// | Operator | Symbol | Meaning        |
/// |----------|--------|----------------|
/// | `Or`     | `+`    | `a ∨ b`        |
/// | `And`    | `&`    | `a ∧ b`        |
/// | `Xor`    | `@`    | `a ≠ b`        |
/// | `Eq`     | `~`    | `a = b`        |
/// | `Impl`   | `>`    | `¬a ∨ b`       |
/// | `Nand`   | `\|`   | `¬(a ∧ b)`     |
/// | `Nor`    | `!`    | `¬(a ∨ b)`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Disjunction
    Or,
    /// Conjunction
    And,
    /// Exclusive or
    Xor,
    /// Equivalence
    Eq,
    /// Implication
    Impl,
    /// Sheffer stroke
    Nand,
    /// Peirce arrow
    Nor,
}

/// Node type for expression tree folding
///
/// Mirrors the shape of [`Expr`] but carries the already-folded results of
/// the children instead of the children themselves. Used with [`Expr::fold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Negation with the result from the inner subtree
    Not(T),
    /// Binary connective with results from left and right subtrees
    Binary(BinaryOp, T, T),
}

/// Parsed boolean formula as an owned tree
///
/// `Variable` is a leaf, `Not` has exactly one child and `Binary` exactly two.
/// Trees are immutable once built; all transformations produce new trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A named variable such as `x_1`
    Variable(Arc<str>),
    /// Logical negation
    Not(Box<Expr>),
    /// A binary connective applied to two subtrees
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Create a variable leaf
    ///
    /// No name validation happens here; the lexer is the only place that
    /// enforces the `letter '_' digits` identifier rule.
    pub fn variable(name: &str) -> Self {
        Expr::Variable(Arc::from(name))
    }

    /// Negate an expression
    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    /// Apply a binary connective
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(op, Box::new(left), Box::new(right))
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The closure receives each node with its children already replaced by
    /// their folded results.
    ///
    /// # Examples
    ///
    /// Count the connectives in a formula:
    ///
    /// ```
    /// use truth_forms::{Expr, ExprNode, Formula};
    ///
    /// let formula = Formula::parse("-(x_1 & y_1) + z_1").unwrap();
    /// let ops = formula.expr().fold(|node| match node {
    ///     ExprNode::Variable(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::Binary(_, l, r) => l + r + 1,
    /// });
    /// assert_eq!(ops, 3);
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<'_, T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<'_, T>) -> T,
    {
        match self {
            Expr::Variable(name) => f(ExprNode::Variable(name)),
            Expr::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            Expr::Binary(op, left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Binary(*op, left_result, right_result))
            }
        }
    }

    /// Collect all variable names in the expression
    ///
    /// The returned set is sorted lexicographically and free of duplicates,
    /// which is exactly the column order of every truth table.
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_variables_into(&mut vars);
        vars
    }

    fn collect_variables_into(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self {
            Expr::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            Expr::Not(inner) => inner.collect_variables_into(vars),
            Expr::Binary(_, left, right) => {
                left.collect_variables_into(vars);
                right.collect_variables_into(vars);
            }
        }
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.fold(|node| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Binary(_, l, r) => l + r + 1,
        })
    }

    /// Longest root-to-leaf path, counting the root as depth 1
    pub fn depth(&self) -> usize {
        self.fold(|node: ExprNode<'_, usize>| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Binary(_, l, r) => l.max(r) + 1,
        })
    }
}
