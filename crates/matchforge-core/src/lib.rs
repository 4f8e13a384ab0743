//! MatchForge Core - Value model and comparison core
//!
//! This crate provides the foundation the constraint engine evaluates over:
//! - Dynamic values (`Value`) with kinds, sequences and user objects
//! - Ordering and equality across numeric kinds (`compare`, `are_equal`)
//! - Tolerances for approximate equality (linear, percent, ULPs)
//! - The error taxonomy shared by every MatchForge crate

pub mod compare;
pub mod error;
pub mod value;

pub use compare::{are_equal, compare, compare_with_tolerance, Tolerance, ToleranceMode};
pub use error::{MatchError, Result};
pub use value::{Number, ObjectValue, Ordered, Sequence, StaticKind, Value, ValueKind};
