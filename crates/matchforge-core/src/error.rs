//! Error types for MatchForge

use thiserror::Error;

use crate::compare::ToleranceMode;

/// Main error type for constraint construction and evaluation.
///
/// A constraint that is applied and simply does not hold is *not* an error;
/// it produces a failed `ConstraintResult`. These variants signal that the
/// engine could not reach a verdict at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// Invalid parameters to a constraint, combinator, or expression.
    #[error("Construction error: {0}")]
    Construction(String),

    /// The actual value has a shape the constraint cannot work with.
    #[error("Type mismatch: expected {expected}, but was {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// No ordering exists between the two operands.
    #[error("Cannot compare {left} with {right}")]
    NotComparable { left: String, right: String },

    /// A tolerance already carries a different mode.
    #[error("Tried to use multiple tolerance modes at the same time: {current:?} and {requested:?}")]
    AmbiguousTolerance {
        current: ToleranceMode,
        requested: ToleranceMode,
    },
}

impl MatchError {
    /// Creates a construction error.
    pub fn construction(message: impl Into<String>) -> Self {
        MatchError::Construction(message.into())
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        MatchError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a not-comparable error.
    pub fn not_comparable(left: impl Into<String>, right: impl Into<String>) -> Self {
        MatchError::NotComparable {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Result type alias for MatchForge operations
pub type Result<T> = std::result::Result<T, MatchError>;
