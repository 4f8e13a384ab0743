//! Combinators: constraints built from other constraints.
//!
//! Every combinator holds its children as [`SharedConstraint`] handles, so a
//! subtree may be shared between several parents without copying.

mod and;
mod items;
mod not;
mod or;

#[cfg(test)]
mod tests;

pub use and::AndConstraint;
pub use items::{ItemsConstraint, Quantifier};
pub use not::NotConstraint;
pub use or::OrConstraint;

use std::sync::Arc;

use matchforge_core::Result;

use crate::constraint::SharedConstraint;

/// Negates `inner`.
pub fn not(inner: SharedConstraint) -> SharedConstraint {
    Arc::new(NotConstraint::new(inner))
}

/// Succeeds when both `left` and `right` succeed.
pub fn and(left: SharedConstraint, right: SharedConstraint) -> SharedConstraint {
    Arc::new(AndConstraint::new(left, right))
}

/// Succeeds when either `left` or `right` succeeds.
pub fn or(left: SharedConstraint, right: SharedConstraint) -> SharedConstraint {
    Arc::new(OrConstraint::new(left, right))
}

/// Succeeds when every item satisfies `inner`.
pub fn all_items(inner: SharedConstraint) -> SharedConstraint {
    Arc::new(ItemsConstraint::new(Quantifier::All, inner))
}

/// Succeeds when at least one item satisfies `inner`.
pub fn some_item(inner: SharedConstraint) -> SharedConstraint {
    Arc::new(ItemsConstraint::new(Quantifier::Some, inner))
}

/// Succeeds when no item satisfies `inner`.
pub fn no_item(inner: SharedConstraint) -> SharedConstraint {
    Arc::new(ItemsConstraint::new(Quantifier::None, inner))
}

/// Succeeds when exactly `count` items satisfy `inner`.
///
/// # Errors
///
/// Returns a construction error when `count` is zero.
pub fn exactly_items(count: usize, inner: SharedConstraint) -> Result<SharedConstraint> {
    Ok(Arc::new(ItemsConstraint::exactly(count, inner)?))
}
