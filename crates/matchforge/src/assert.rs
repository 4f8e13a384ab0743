//! Assertion entry points.

use std::future::Future;

use matchforge_config::MatchConfig;
use matchforge_constraints::{MessageWriter, ResolveConstraint};
use matchforge_core::{MatchError, Value};
use thiserror::Error;
use tracing::debug;

/// Outcome of a failed assertion.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// The constraint was evaluated and does not hold.
    #[error("{message}")]
    Failed { message: String },

    /// No verdict could be reached.
    #[error(transparent)]
    Engine(#[from] MatchError),
}

impl AssertionError {
    /// The rendered failure message, if the constraint was evaluated.
    pub fn message(&self) -> Option<&str> {
        match self {
            AssertionError::Failed { message } => Some(message),
            AssertionError::Engine(_) => None,
        }
    }
}

/// Evaluates constraints and renders failures with a fixed configuration.
///
/// # Example
///
/// ```
/// use matchforge::{Assert, Is, MatchConfig};
///
/// let assert = Assert::new(&MatchConfig::new().with_max_items(2));
/// let err = assert.that(vec![1, 2, 3], &Is::empty()).unwrap_err();
/// assert_eq!(
///     err.message(),
///     Some("  Expected: <empty>\n  But was:  < 1, 2, ... >")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assert {
    writer: MessageWriter,
}

impl Assert {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            writer: MessageWriter::new(config.writer_settings()),
        }
    }

    /// Resolves `expr` and applies it to `actual`.
    ///
    /// # Errors
    ///
    /// [`AssertionError::Failed`] with the rendered message when the
    /// constraint does not hold; [`AssertionError::Engine`] when it cannot
    /// be built or evaluated.
    pub fn that(
        &self,
        actual: impl Into<Value>,
        expr: &impl ResolveConstraint,
    ) -> Result<(), AssertionError> {
        let root = expr.resolve()?;
        let actual = actual.into();
        let result = root.apply(&actual)?;
        if result.is_success() {
            return Ok(());
        }
        debug!(constraint = %root.representation(), "assertion failed");
        Err(AssertionError::Failed {
            message: self.writer.write(&result),
        })
    }

    /// Awaits `actual`, then evaluates synchronously.
    ///
    /// The expression is resolved before the future is polled, so a
    /// malformed expression fails without awaiting anything.
    pub async fn that_async<F>(
        &self,
        actual: F,
        expr: &impl ResolveConstraint,
    ) -> Result<(), AssertionError>
    where
        F: Future,
        F::Output: Into<Value>,
    {
        let root = expr.resolve()?;
        let actual = actual.await;
        self.that(actual, &root)
    }
}

/// Applies `expr` to `actual` with the default configuration.
pub fn assert_that(
    actual: impl Into<Value>,
    expr: &impl ResolveConstraint,
) -> Result<(), AssertionError> {
    Assert::default().that(actual, expr)
}

/// Awaits `actual`, then applies `expr` with the default configuration.
pub async fn assert_that_async<F>(
    actual: F,
    expr: &impl ResolveConstraint,
) -> Result<(), AssertionError>
where
    F: Future,
    F::Output: Into<Value>,
{
    Assert::default().that_async(actual, expr).await
}
