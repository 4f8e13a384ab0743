//! Leaf constraints.
//!
//! The small set of leaves the fluent surface builds on. Each is a thin
//! adapter from the comparison core to the [`Constraint`](crate::Constraint)
//! contract; richer catalogs plug in through the same trait.

mod comparison;
mod equal;
mod kind;
mod predicate;
mod simple;

#[cfg(test)]
mod tests;

pub use comparison::{ComparisonConstraint, ComparisonOp};
pub use equal::EqualConstraint;
pub use kind::KindConstraint;
pub use predicate::PredicateConstraint;
pub use simple::{
    AnythingConstraint, EmptyConstraint, FalseConstraint, NullConstraint, TrueConstraint,
};
