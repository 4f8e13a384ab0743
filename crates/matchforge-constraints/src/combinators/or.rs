use matchforge_core::{Result, Value};
use tracing::trace;

use crate::constraint::{Constraint, SharedConstraint};
use crate::result::{ConstraintResult, ResultContext};

/// Succeeds when either operand succeeds.
///
/// The right operand is only applied when the left one fails.
pub struct OrConstraint {
    left: SharedConstraint,
    right: SharedConstraint,
}

impl OrConstraint {
    pub fn new(left: SharedConstraint, right: SharedConstraint) -> Self {
        Self { left, right }
    }
}

impl Constraint for OrConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        if self.left.apply(actual)?.is_success() {
            trace!("left operand succeeded, right operand skipped");
            return Ok(ConstraintResult::new(self, actual.clone(), true));
        }
        let right = self.right.apply(actual)?;
        if right.is_success() {
            return Ok(ConstraintResult::new(self, actual.clone(), true));
        }
        Ok(ConstraintResult::new(self, actual.clone(), false)
            .with_context(ResultContext::Nested(Box::new(right))))
    }

    fn description(&self) -> String {
        format!("{} or {}", self.left.description(), self.right.description())
    }

    fn display_name(&self) -> &str {
        "Or"
    }

    fn representation(&self) -> String {
        format!(
            "<or {} {}>",
            self.left.representation(),
            self.right.representation()
        )
    }
}
