//! Sample leaf constraints.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use matchforge_constraints::{Constraint, ConstraintResult, SharedConstraint};
use matchforge_core::{Result, Value};

/// Matches even integers. Non-integers and null fail.
#[derive(Debug, Clone, Copy, Default)]
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

/// Panics if applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Explodes;

impl Constraint for Explodes {
    fn apply(&self, _actual: &Value) -> Result<ConstraintResult<'_>> {
        panic!("Explodes must never be applied");
    }

    fn description(&self) -> String {
        "never evaluated".to_string()
    }

    fn display_name(&self) -> &str {
        "Explodes"
    }
}

/// Wraps a constraint and counts how often it is applied.
pub struct CountingConstraint {
    inner: SharedConstraint,
    calls: AtomicUsize,
}

impl CountingConstraint {
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

impl Constraint for CountingConstraint {
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
