use matchforge_core::{MatchError, Result, Value};

use crate::constraint::Constraint;
use crate::result::ConstraintResult;

/// Succeeds for null.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConstraint;

impl Constraint for NullConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        Ok(ConstraintResult::new(self, actual.clone(), actual.is_null()))
    }

    fn description(&self) -> String {
        "null".to_string()
    }

    fn display_name(&self) -> &str {
        "Null"
    }
}

/// Succeeds for `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueConstraint;

impl Constraint for TrueConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        Ok(ConstraintResult::new(
            self,
            actual.clone(),
            actual.as_bool() == Some(true),
        ))
    }

    fn description(&self) -> String {
        "True".to_string()
    }

    fn display_name(&self) -> &str {
        "True"
    }
}

/// Succeeds for `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FalseConstraint;

impl Constraint for FalseConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        Ok(ConstraintResult::new(
            self,
            actual.clone(),
            actual.as_bool() == Some(false),
        ))
    }

    fn description(&self) -> String {
        "False".to_string()
    }

    fn display_name(&self) -> &str {
        "False"
    }
}

/// Succeeds for an empty string or sequence.
///
/// Any other kind, null included, is a type mismatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyConstraint;

impl Constraint for EmptyConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let empty = match actual.unwrapped() {
            Value::String(s) => s.is_empty(),
            Value::List(seq) => seq.is_empty(),
            other => {
                return Err(MatchError::type_mismatch(
                    "a string or sequence",
                    other.kind().to_string(),
                ))
            }
        };
        Ok(ConstraintResult::new(self, actual.clone(), empty))
    }

    fn description(&self) -> String {
        "<empty>".to_string()
    }

    fn display_name(&self) -> &str {
        "Empty"
    }
}

/// Succeeds for every value.
///
/// Stands in as the operand of a bare quantifier such as
/// `Has::exactly(3)?.items()`; its empty description keeps the quantifier's
/// text clean.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnythingConstraint;

impl Constraint for AnythingConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        Ok(ConstraintResult::new(self, actual.clone(), true))
    }

    fn description(&self) -> String {
        String::new()
    }

    fn display_name(&self) -> &str {
        "Anything"
    }
}
