//! MatchForge Constraints - Composition and evaluation of constraints
//!
//! This crate provides:
//! - The [`Constraint`] contract and its [`ConstraintResult`]
//! - Combinators: `Not`, `And`, `Or` and item quantifiers
//! - A small set of leaf constraints
//! - [`ExpressionBuilder`] and the fluent surface (`Is`, `Has`)
//! - [`ReusableConstraint`] handles and the [`MessageWriter`] renderer
//!
//! # Example
//!
//! ```
//! use matchforge_constraints::{Has, ResolveConstraint};
//! use matchforge_core::Value;
//!
//! let root = Has::exactly(2).unwrap().greater_than(3).resolve().unwrap();
//! assert_eq!(root.description(), "exactly 2 items greater than 3");
//! assert!(root.apply(&Value::from(vec![1, 4, 5])).unwrap().is_success());
//! ```

pub mod combinators;
pub mod constraint;
pub mod expression;
pub mod leaf;
pub mod result;
pub mod reusable;
pub mod writer;

#[cfg(test)]
mod test_utils;


pub use constraint::{Constraint, SharedConstraint};
pub use expression::{
    BuilderState, ConstraintExpression, EqualExpression, Expression, ExpressionBuilder, Has, Is,
    Operator, ResolveConstraint, Token,
};
pub use result::{CapturedItems, ConstraintResult, ConstraintStatus, ResultContext};
pub use reusable::ReusableConstraint;
pub use writer::{MessageWriter, WriterSettings};
