//! Shared test fixtures for MatchForge crates.
//!
//! - [`constraints`] - Sample leaf constraints, including ones that count or
//!   refuse applications
//! - [`objects`] - User-defined object values with and without comparisons
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! matchforge-test = { workspace = true }
//! ```

pub mod constraints;
pub mod objects;

pub use constraints::{CountingConstraint, Explodes, IsEven};
pub use objects::{Celsius, Opaque, Version};

use matchforge_core::Value;

/// `[2, 4, 6, 7]`: three even items followed by an odd one.
pub fn evens_and_seven() -> Value {
    Value::from(vec![2, 4, 6, 7])
}
