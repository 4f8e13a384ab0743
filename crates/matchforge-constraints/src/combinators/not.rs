use matchforge_core::{Result, Value};
use tracing::trace;

use crate::constraint::{Constraint, SharedConstraint};
use crate::result::ConstraintResult;

/// Succeeds exactly when the inner constraint fails.
pub struct NotConstraint {
    inner: SharedConstraint,
}

impl NotConstraint {
    pub fn new(inner: SharedConstraint) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &SharedConstraint {
        &self.inner
    }
}

impl Constraint for NotConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let inner = self.inner.apply(actual)?;
        trace!(inner = ?inner.status(), "negating");
        Ok(ConstraintResult::new(self, actual.clone(), !inner.is_success()))
    }

    fn description(&self) -> String {
        format!("not {}", self.inner.description())
    }

    fn display_name(&self) -> &str {
        "Not"
    }

    fn representation(&self) -> String {
        format!("<not {}>", self.inner.representation())
    }
}
