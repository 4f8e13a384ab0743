use matchforge_core::{Result, StaticKind, Value, ValueKind};

use crate::constraint::Constraint;
use crate::result::ConstraintResult;

/// Succeeds when the actual value's runtime kind is exactly the expected one.
///
/// Nullable kinds are distinct: a present `Option<i32>` item is of kind
/// `Option<i32>`, not `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindConstraint {
    expected: ValueKind,
}

impl KindConstraint {
    pub fn new(expected: ValueKind) -> Self {
        Self { expected }
    }

    /// Expects the kind of `T`.
    pub fn of<T: StaticKind>() -> Self {
        Self::new(T::static_kind())
    }

    pub fn expected(&self) -> &ValueKind {
        &self.expected
    }
}

impl Constraint for KindConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        Ok(ConstraintResult::new(
            self,
            actual.clone(),
            actual.kind() == self.expected,
        ))
    }

    fn description(&self) -> String {
        format!("type {}", self.expected)
    }

    fn display_name(&self) -> &str {
        "TypeOf"
    }

    fn arguments(&self) -> Vec<Value> {
        vec![Value::from(self.expected.to_string())]
    }
}
