//! Outcome of applying a constraint.

use std::fmt;

use matchforge_core::Value;
use smallvec::SmallVec;

use crate::constraint::Constraint;

/// Verdict of a single application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintStatus {
    Success,
    Failure,
}

impl ConstraintStatus {
    pub fn from_bool(success: bool) -> Self {
        if success {
            ConstraintStatus::Success
        } else {
            ConstraintStatus::Failure
        }
    }

    pub fn negate(self) -> Self {
        match self {
            ConstraintStatus::Success => ConstraintStatus::Failure,
            ConstraintStatus::Failure => ConstraintStatus::Success,
        }
    }
}

/// Items captured by a count-based quantifier. Small counts stay inline.
pub type CapturedItems = SmallVec<[Value; 4]>;

/// Extra diagnostic state attached to a result.
#[derive(Debug)]
pub enum ResultContext<'a> {
    /// Nothing beyond the verdict and the actual value.
    None,
    /// The first item that decided a per-item quantifier.
    FailingItem { index: usize, item: Value },
    /// Outcome of a counted quantifier. `items` holds at most
    /// `expected + 1` entries: enough to show the overflow without
    /// buffering the whole collection.
    MatchSummary {
        expected: usize,
        count: usize,
        items: CapturedItems,
    },
    /// The child result that decided a combinator.
    Nested(Box<ConstraintResult<'a>>),
}

/// The result of applying a constraint to a value.
///
/// Status is fixed at construction. The result borrows the constraint that
/// produced it so a renderer can ask for its description.
pub struct ConstraintResult<'a> {
    constraint: &'a dyn Constraint,
    actual: Value,
    status: ConstraintStatus,
    context: ResultContext<'a>,
}

impl<'a> ConstraintResult<'a> {
    /// Creates a result with no extra context.
    pub fn new(constraint: &'a dyn Constraint, actual: Value, success: bool) -> Self {
        Self {
            constraint,
            actual,
            status: ConstraintStatus::from_bool(success),
            context: ResultContext::None,
        }
    }

    /// Attaches diagnostic context.
    pub fn with_context(mut self, context: ResultContext<'a>) -> Self {
        self.context = context;
        self
    }

    pub fn status(&self) -> ConstraintStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == ConstraintStatus::Success
    }

    /// The value the constraint was applied to.
    pub fn actual(&self) -> &Value {
        &self.actual
    }

    pub fn constraint(&self) -> &'a dyn Constraint {
        self.constraint
    }

    /// Description of the producing constraint.
    pub fn description(&self) -> String {
        self.constraint.description()
    }

    pub fn name(&self) -> &'a str {
        self.constraint.display_name()
    }

    pub fn context(&self) -> &ResultContext<'a> {
        &self.context
    }

    /// The index and item a per-item quantifier stopped at, if any.
    pub fn failing_item(&self) -> Option<(usize, &Value)> {
        match &self.context {
            ResultContext::FailingItem { index, item } => Some((*index, item)),
            _ => None,
        }
    }

    /// The deciding child result of a combinator, if any.
    pub fn nested(&self) -> Option<&ConstraintResult<'a>> {
        match &self.context {
            ResultContext::Nested(child) => Some(child),
            _ => None,
        }
    }
}

impl fmt::Debug for ConstraintResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintResult")
            .field("constraint", &self.constraint.representation())
            .field("actual", &self.actual)
            .field("status", &self.status)
            .field("context", &self.context)
            .finish()
    }
}
