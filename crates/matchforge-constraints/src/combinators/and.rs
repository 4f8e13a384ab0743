use matchforge_core::{Result, Value};
use tracing::trace;

use crate::constraint::{Constraint, SharedConstraint};
use crate::result::{ConstraintResult, ResultContext};

/// Succeeds when both operands succeed.
///
/// The right operand is not applied once the left one has failed. A failed
/// result carries the failing operand's result as nested context.
pub struct AndConstraint {
    left: SharedConstraint,
    right: SharedConstraint,
}

impl AndConstraint {
    pub fn new(left: SharedConstraint, right: SharedConstraint) -> Self {
        Self { left, right }
    }
}

impl Constraint for AndConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let left = self.left.apply(actual)?;
        if !left.is_success() {
            trace!("left operand failed, right operand skipped");
            return Ok(ConstraintResult::new(self, actual.clone(), false)
                .with_context(ResultContext::Nested(Box::new(left))));
        }
        let right = self.right.apply(actual)?;
        if !right.is_success() {
            return Ok(ConstraintResult::new(self, actual.clone(), false)
                .with_context(ResultContext::Nested(Box::new(right))));
        }
        Ok(ConstraintResult::new(self, actual.clone(), true))
    }

    fn description(&self) -> String {
        format!("{} and {}", self.left.description(), self.right.description())
    }

    fn display_name(&self) -> &str {
        "And"
    }

    fn representation(&self) -> String {
        format!(
            "<and {} {}>",
            self.left.representation(),
            self.right.representation()
        )
    }
}
