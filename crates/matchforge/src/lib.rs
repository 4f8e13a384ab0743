//! MatchForge - Fluent constraint composition and evaluation in Rust
//!
//! Build a constraint tree with the fluent surface, apply it to a value, and
//! get either a verdict or a rendered failure message.
//!
//! # Example
//!
//! ```rust
//! use matchforge::prelude::*;
//!
//! assert!(assert_that(4, &Is::greater_than(3).and().less_than(5)).is_ok());
//!
//! let err = assert_that(vec![2, 4, 6, 7], &Has::all().satisfying("even", |v: &Value| {
//!     v.as_number().and_then(|n| n.as_i128()).is_some_and(|n| n % 2 == 0)
//! }))
//! .unwrap_err();
//! assert!(err.to_string().contains("First non-matching item at index [3]:  7"));
//! ```

// Value model and comparison core
pub use matchforge_core::{
    are_equal, compare, compare_with_tolerance, MatchError, Number, ObjectValue, Ordered,
    Sequence, StaticKind, Tolerance, ToleranceMode, Value, ValueKind,
};

// Constraints, combinators and expressions
pub use matchforge_constraints::{
    combinators, leaf, BuilderState, Constraint, ConstraintExpression, ConstraintResult,
    ConstraintStatus, EqualExpression, Expression, ExpressionBuilder, Has, Is, MessageWriter,
    Operator, ResolveConstraint, ResultContext, ReusableConstraint, SharedConstraint, Token,
    WriterSettings,
};

// Configuration
pub use matchforge_config::{ConfigError, MatchConfig};

mod assert;
pub mod console;

pub use assert::{assert_that, assert_that_async, Assert, AssertionError};

pub mod prelude {
    pub use super::{assert_that, assert_that_async, Assert, AssertionError};
    pub use super::{Constraint, Has, Is, ResolveConstraint, ReusableConstraint};
    pub use super::{MatchConfig, MatchError, Tolerance, Value};
}
