use std::fmt;

use matchforge_core::{Result, Value};

use crate::constraint::Constraint;
use crate::result::ConstraintResult;

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A leaf backed by a closure.
///
/// # Example
///
/// ```
/// use matchforge_constraints::leaf::PredicateConstraint;
/// use matchforge_constraints::Constraint;
/// use matchforge_core::Value;
///
/// let short = PredicateConstraint::new("shorter than 4", |v: &Value| {
///     v.as_str().is_some_and(|s| s.len() < 4)
/// });
/// assert!(short.apply(&Value::from("abc")).unwrap().is_success());
/// assert!(!short.apply(&Value::from("abcd")).unwrap().is_success());
/// ```
pub struct PredicateConstraint {
    description: String,
    predicate: Box<Predicate>,
}

impl PredicateConstraint {
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl Constraint for PredicateConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        Ok(ConstraintResult::new(
            self,
            actual.clone(),
            (self.predicate)(actual),
        ))
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn display_name(&self) -> &str {
        "Predicate"
    }
}

impl fmt::Debug for PredicateConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
