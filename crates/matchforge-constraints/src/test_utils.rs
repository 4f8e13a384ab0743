//! Test fixtures shared by this crate's test modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use matchforge_core::{Result, Value};

use crate::constraint::{Constraint, SharedConstraint};
use crate::result::ConstraintResult;

/// Matches even integers. Anything else, null included, fails.
pub struct IsEven;

impl Constraint for IsEven {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let even = actual
            .as_number()
            .and_then(|n| n.as_i128())
            .is_some_and(|n| n % 2 == 0);
        Ok(ConstraintResult::new(self, actual.clone(), even))
    }

    fn description(&self) -> String {
        "even".to_string()
    }

    fn display_name(&self) -> &str {
        "Even"
    }
}

/// Panics when applied. Used to prove an operand is never evaluated.
pub struct Explodes;

impl Constraint for Explodes {
    fn apply(&self, _actual: &Value) -> Result<ConstraintResult<'_>> {
        panic!("constraint must not be applied");
    }

    fn description(&self) -> String {
        "explodes".to_string()
    }

    fn display_name(&self) -> &str {
        "Explodes"
    }
}

/// Delegates to an inner constraint and counts applications.
pub struct Counting {
    inner: SharedConstraint,
    calls: AtomicUsize,
}

impl Counting {
    pub fn new(inner: SharedConstraint) -> Arc<Self> {
        Arc::new(Self {
            inner,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Constraint for Counting {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.apply(actual)?;
        Ok(ConstraintResult::new(self, actual.clone(), inner.is_success()))
    }

    fn description(&self) -> String {
        self.inner.description()
    }

    fn display_name(&self) -> &str {
        "Counting"
    }
}

pub fn even() -> SharedConstraint {
    Arc::new(IsEven)
}

pub fn explodes() -> SharedConstraint {
    Arc::new(Explodes)
}

/// `[2, 4, 6, 7]`
pub fn evens_and_seven() -> Value {
    Value::from(vec![2, 4, 6, 7])
}
