//! The fluent surface.
//!
//! Two expression types make alternation a compile-time property:
//! [`ConstraintExpression`] is waiting for an operand, [`Expression`] has
//! just received one. Prefix operators and leaves live on the former,
//! binary operators on the latter, so `Is::not().and()` does not type
//! check. [`EqualExpression`] is an `Expression` whose tail is an equality
//! leaf that still accepts a tolerance.

use std::sync::Arc;

use matchforge_core::{MatchError, Number, Result, StaticKind, Value, ValueKind};

use super::builder::{ExpressionBuilder, Token};
use super::operator::Operator;
use super::ResolveConstraint;
use crate::constraint::{Constraint, SharedConstraint};
use crate::leaf::{
    AnythingConstraint, ComparisonConstraint, EmptyConstraint, EqualConstraint,
    FalseConstraint, KindConstraint, NullConstraint, PredicateConstraint, TrueConstraint,
};

/// An expression that expects an operand next.
#[derive(Debug, Clone, Default)]
pub struct ConstraintExpression {
    builder: ExpressionBuilder,
}

impl ConstraintExpression {
    pub fn new() -> Self {
        Self::default()
    }

    fn prefix(mut self, op: Operator) -> Self {
        self.builder.push(Token::Operator(op));
        self
    }

    fn operand(mut self, constraint: SharedConstraint) -> Expression {
        self.builder.push(Token::Operand(constraint));
        Expression {
            builder: self.builder,
        }
    }

    pub fn not(self) -> Self {
        self.prefix(Operator::Not)
    }

    pub fn all(self) -> Self {
        self.prefix(Operator::All)
    }

    pub fn some(self) -> Self {
        self.prefix(Operator::Some)
    }

    pub fn none(self) -> Self {
        self.prefix(Operator::None)
    }

    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] when `count` is zero.
    pub fn exactly(self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(MatchError::construction(
                "Exactly requires a count of at least one",
            ));
        }
        Ok(self.prefix(Operator::Exactly(count)))
    }

    pub fn with(self) -> Self {
        self.prefix(Operator::With)
    }

    /// Completes a bare quantifier: `Has::exactly(3)?.items()`.
    pub fn items(self) -> Expression {
        self.operand(Arc::new(AnythingConstraint))
    }

    pub fn equal_to(mut self, expected: impl Into<Value>) -> EqualExpression {
        let equal = EqualConstraint::new(expected);
        self.builder.push(Token::Operand(Arc::new(equal.clone())));
        EqualExpression {
            builder: self.builder,
            equal,
        }
    }

    pub fn less_than(self, expected: impl Into<Value>) -> Expression {
        self.operand(Arc::new(ComparisonConstraint::less_than(expected)))
    }

    pub fn less_than_or_equal_to(self, expected: impl Into<Value>) -> Expression {
        self.operand(Arc::new(ComparisonConstraint::less_than_or_equal(expected)))
    }

    pub fn at_most(self, expected: impl Into<Value>) -> Expression {
        self.less_than_or_equal_to(expected)
    }

    pub fn greater_than(self, expected: impl Into<Value>) -> Expression {
        self.operand(Arc::new(ComparisonConstraint::greater_than(expected)))
    }

    pub fn greater_than_or_equal_to(self, expected: impl Into<Value>) -> Expression {
        self.operand(Arc::new(ComparisonConstraint::greater_than_or_equal(expected)))
    }

    pub fn at_least(self, expected: impl Into<Value>) -> Expression {
        self.greater_than_or_equal_to(expected)
    }

    pub fn null(self) -> Expression {
        self.operand(Arc::new(NullConstraint))
    }

    pub fn true_value(self) -> Expression {
        self.operand(Arc::new(TrueConstraint))
    }

    pub fn false_value(self) -> Expression {
        self.operand(Arc::new(FalseConstraint))
    }

    pub fn empty(self) -> Expression {
        self.operand(Arc::new(EmptyConstraint))
    }

    pub fn kind_of(self, kind: ValueKind) -> Expression {
        self.operand(Arc::new(KindConstraint::new(kind)))
    }

    pub fn type_of<T: StaticKind>(self) -> Expression {
        self.operand(Arc::new(KindConstraint::of::<T>()))
    }

    /// A closure leaf.
    pub fn satisfying<F>(self, description: impl Into<String>, predicate: F) -> Expression
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.operand(Arc::new(PredicateConstraint::new(description, predicate)))
    }

    /// Any user-defined leaf.
    pub fn constraint<C: Constraint + 'static>(self, constraint: C) -> Expression {
        self.operand(Arc::new(constraint))
    }

    /// Embeds another expression or constraint as one operand.
    ///
    /// # Errors
    ///
    /// Propagates the resolution error of `constraint`.
    pub fn matches(self, constraint: &impl ResolveConstraint) -> Result<Expression> {
        Ok(self.operand(constraint.resolve()?))
    }
}

/// An expression that ends with an operand and can be resolved.
#[derive(Debug, Clone)]
pub struct Expression {
    builder: ExpressionBuilder,
}

impl Expression {
    fn binary(mut self, op: Operator) -> ConstraintExpression {
        self.builder.push(Token::Operator(op));
        ConstraintExpression {
            builder: self.builder,
        }
    }

    pub fn and(self) -> ConstraintExpression {
        self.binary(Operator::And)
    }

    pub fn or(self) -> ConstraintExpression {
        self.binary(Operator::Or)
    }

    /// Reads as `and` after an operand.
    pub fn with(self) -> ConstraintExpression {
        self.binary(Operator::And)
    }

    pub fn builder(&self) -> &ExpressionBuilder {
        &self.builder
    }
}

impl ResolveConstraint for Expression {
    fn resolve(&self) -> Result<SharedConstraint> {
        self.builder.resolve()
    }
}

/// An expression ending in an equality leaf.
///
/// `within`, `percent` and `ulps` refine the tail leaf in place; nothing
/// earlier in the expression changes.
///
/// # Example
///
/// ```
/// use matchforge_constraints::{Is, ResolveConstraint};
/// use matchforge_core::Value;
///
/// let expr = Is::not().equal_to(100).within(5).unwrap().percent().unwrap();
/// let root = expr.resolve().unwrap();
/// assert_eq!(root.description(), "not 100 +/- 5 Percent");
/// assert!(root.apply(&Value::from(110)).unwrap().is_success());
/// assert!(!root.apply(&Value::from(104)).unwrap().is_success());
/// ```
#[derive(Debug, Clone)]
pub struct EqualExpression {
    builder: ExpressionBuilder,
    equal: EqualConstraint,
}

impl EqualExpression {
    fn refine(mut self, equal: EqualConstraint) -> Self {
        self.builder.set_tail(Arc::new(equal.clone()));
        self.equal = equal;
        self
    }

    /// # Errors
    ///
    /// Fails for a negative or NaN amount, or a second tolerance.
    pub fn within(self, amount: impl Into<Number>) -> Result<Self> {
        let equal = self.equal.clone().within(amount)?;
        Ok(self.refine(equal))
    }

    /// # Errors
    ///
    /// Fails when the tolerance already has another mode.
    pub fn percent(self) -> Result<Self> {
        let equal = self.equal.clone().percent()?;
        Ok(self.refine(equal))
    }

    /// # Errors
    ///
    /// Fails when the tolerance already has another mode or a fractional
    /// amount.
    pub fn ulps(self) -> Result<Self> {
        let equal = self.equal.clone().ulps()?;
        Ok(self.refine(equal))
    }

    pub fn and(self) -> ConstraintExpression {
        Expression::from(self).and()
    }

    pub fn or(self) -> ConstraintExpression {
        Expression::from(self).or()
    }
}

impl From<EqualExpression> for Expression {
    fn from(expr: EqualExpression) -> Self {
        Expression {
            builder: expr.builder,
        }
    }
}

impl ResolveConstraint for EqualExpression {
    fn resolve(&self) -> Result<SharedConstraint> {
        self.builder.resolve()
    }
}

/// Entry point for value constraints: `Is::equal_to(5)`, `Is::not().null()`.
pub struct Is;

impl Is {
    pub fn not() -> ConstraintExpression {
        ConstraintExpression::new().not()
    }

    pub fn all() -> ConstraintExpression {
        ConstraintExpression::new().all()
    }

    pub fn equal_to(expected: impl Into<Value>) -> EqualExpression {
        ConstraintExpression::new().equal_to(expected)
    }

    pub fn less_than(expected: impl Into<Value>) -> Expression {
        ConstraintExpression::new().less_than(expected)
    }

    pub fn less_than_or_equal_to(expected: impl Into<Value>) -> Expression {
        ConstraintExpression::new().less_than_or_equal_to(expected)
    }

    pub fn at_most(expected: impl Into<Value>) -> Expression {
        ConstraintExpression::new().at_most(expected)
    }

    pub fn greater_than(expected: impl Into<Value>) -> Expression {
        ConstraintExpression::new().greater_than(expected)
    }

    pub fn greater_than_or_equal_to(expected: impl Into<Value>) -> Expression {
        ConstraintExpression::new().greater_than_or_equal_to(expected)
    }

    pub fn at_least(expected: impl Into<Value>) -> Expression {
        ConstraintExpression::new().at_least(expected)
    }

    pub fn null() -> Expression {
        ConstraintExpression::new().null()
    }

    pub fn true_value() -> Expression {
        ConstraintExpression::new().true_value()
    }

    pub fn false_value() -> Expression {
        ConstraintExpression::new().false_value()
    }

    pub fn empty() -> Expression {
        ConstraintExpression::new().empty()
    }

    pub fn kind_of(kind: ValueKind) -> Expression {
        ConstraintExpression::new().kind_of(kind)
    }

    pub fn type_of<T: StaticKind>() -> Expression {
        ConstraintExpression::new().type_of::<T>()
    }

    pub fn satisfying<F>(description: impl Into<String>, predicate: F) -> Expression
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        ConstraintExpression::new().satisfying(description, predicate)
    }
}

/// Entry point for collection constraints: `Has::some().equal_to(3)`.
pub struct Has;

impl Has {
    pub fn all() -> ConstraintExpression {
        ConstraintExpression::new().all()
    }

    pub fn some() -> ConstraintExpression {
        ConstraintExpression::new().some()
    }

    pub fn none() -> ConstraintExpression {
        ConstraintExpression::new().none()
    }

    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] when `count` is zero.
    pub fn exactly(count: usize) -> Result<ConstraintExpression> {
        ConstraintExpression::new().exactly(count)
    }
}
