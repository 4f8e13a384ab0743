use std::cmp::Ordering;

use matchforge_core::{compare, Result, Value};

use crate::constraint::Constraint;
use crate::result::ConstraintResult;

/// Relation tested by a [`ComparisonConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl ComparisonOp {
    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOp::LessThan => ordering == Ordering::Less,
            ComparisonOp::LessThanOrEqual => ordering != Ordering::Greater,
            ComparisonOp::GreaterThan => ordering == Ordering::Greater,
            ComparisonOp::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            ComparisonOp::LessThan => "less than",
            ComparisonOp::LessThanOrEqual => "less than or equal to",
            ComparisonOp::GreaterThan => "greater than",
            ComparisonOp::GreaterThanOrEqual => "greater than or equal to",
        }
    }

    fn name(self) -> &'static str {
        match self {
            ComparisonOp::LessThan => "LessThan",
            ComparisonOp::LessThanOrEqual => "LessThanOrEqual",
            ComparisonOp::GreaterThan => "GreaterThan",
            ComparisonOp::GreaterThanOrEqual => "GreaterThanOrEqual",
        }
    }
}

/// Orders the actual value against an expected bound.
///
/// Ordering goes through [`compare`], so mixed numeric kinds and user
/// objects behave the same here as everywhere else. Operands without an
/// ordering are an error, not a failure.
#[derive(Debug, Clone)]
pub struct ComparisonConstraint {
    op: ComparisonOp,
    expected: Value,
}

impl ComparisonConstraint {
    pub fn new(op: ComparisonOp, expected: impl Into<Value>) -> Self {
        Self {
            op,
            expected: expected.into(),
        }
    }

    pub fn less_than(expected: impl Into<Value>) -> Self {
        Self::new(ComparisonOp::LessThan, expected)
    }

    pub fn less_than_or_equal(expected: impl Into<Value>) -> Self {
        Self::new(ComparisonOp::LessThanOrEqual, expected)
    }

    pub fn greater_than(expected: impl Into<Value>) -> Self {
        Self::new(ComparisonOp::GreaterThan, expected)
    }

    pub fn greater_than_or_equal(expected: impl Into<Value>) -> Self {
        Self::new(ComparisonOp::GreaterThanOrEqual, expected)
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }
}

impl Constraint for ComparisonConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let ordering = compare(actual, &self.expected)?;
        Ok(ConstraintResult::new(
            self,
            actual.clone(),
            self.op.accepts(ordering),
        ))
    }

    fn description(&self) -> String {
        format!("{} {}", self.op.phrase(), self.expected)
    }

    fn display_name(&self) -> &str {
        self.op.name()
    }

    fn arguments(&self) -> Vec<Value> {
        vec![self.expected.clone()]
    }
}
