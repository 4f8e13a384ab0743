//! Deferred construction of constraint trees.
//!
//! [`ExpressionBuilder`] keeps an explicit token list and resolves it in
//! one step; the fluent types in this module only ever append to it or
//! refine its tail.

mod builder;
mod fluent;
mod operator;

#[cfg(test)]
mod tests;

pub use builder::{BuilderState, ExpressionBuilder, Token};
pub use fluent::{ConstraintExpression, EqualExpression, Expression, Has, Is};
pub use operator::Operator;

use matchforge_core::Result;

use crate::constraint::SharedConstraint;

/// Anything that can produce a constraint tree.
pub trait ResolveConstraint {
    fn resolve(&self) -> Result<SharedConstraint>;
}

impl ResolveConstraint for SharedConstraint {
    fn resolve(&self) -> Result<SharedConstraint> {
        Ok(self.clone())
    }
}

impl ResolveConstraint for ExpressionBuilder {
    fn resolve(&self) -> Result<SharedConstraint> {
        ExpressionBuilder::resolve(self)
    }
}
