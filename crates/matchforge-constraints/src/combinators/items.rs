use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroUsize;

use matchforge_core::{MatchError, Result, Value, ValueKind};
use tracing::trace;

use crate::constraint::{Constraint, SharedConstraint};
use crate::result::{CapturedItems, ConstraintResult, ResultContext};

/// Matching policy of an [`ItemsConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Every item must match. Stops at the first non-matching item.
    All,
    /// At least one item must match. Stops at the first match.
    Some,
    /// No item may match. Stops at the first match.
    None,
    /// Exactly this many items must match. Always visits every item.
    Exactly(NonZeroUsize),
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::All => write!(f, "all items"),
            Quantifier::Some => write!(f, "some item"),
            Quantifier::None => write!(f, "no item"),
            Quantifier::Exactly(n) if n.get() == 1 => write!(f, "exactly one item"),
            Quantifier::Exactly(n) => write!(f, "exactly {} items", n),
        }
    }
}

/// Lifts a single-item constraint to a sequence.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use matchforge_constraints::combinators::{ItemsConstraint, Quantifier};
/// use matchforge_constraints::leaf::EqualConstraint;
/// use matchforge_constraints::Constraint;
/// use matchforge_core::Value;
///
/// let all_ones = ItemsConstraint::new(Quantifier::All, Arc::new(EqualConstraint::new(1)));
/// assert!(all_ones.apply(&Value::from(vec![1, 1])).unwrap().is_success());
///
/// let result = all_ones.apply(&Value::from(vec![1, 2, 1])).unwrap();
/// assert_eq!(result.failing_item(), Some((1, &Value::from(2))));
/// ```
pub struct ItemsConstraint {
    quantifier: Quantifier,
    inner: SharedConstraint,
}

impl ItemsConstraint {
    /// Creates a quantified constraint.
    pub fn new(quantifier: Quantifier, inner: SharedConstraint) -> Self {
        Self { quantifier, inner }
    }

    /// Creates an `Exactly(count)` constraint.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] when `count` is zero.
    pub fn exactly(count: usize, inner: SharedConstraint) -> Result<Self> {
        let count = NonZeroUsize::new(count).ok_or_else(|| {
            MatchError::construction("Exactly requires a count of at least one")
        })?;
        Ok(Self::new(Quantifier::Exactly(count), inner))
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    fn all(&self, actual: &Value, items: Vec<Cow<'_, Value>>) -> Result<ConstraintResult<'_>> {
        for (index, item) in items.into_iter().enumerate() {
            if !self.inner.apply(&item)?.is_success() {
                trace!(index, "first non-matching item");
                return Ok(ConstraintResult::new(self, actual.clone(), false).with_context(
                    ResultContext::FailingItem {
                        index,
                        item: item.into_owned(),
                    },
                ));
            }
        }
        Ok(ConstraintResult::new(self, actual.clone(), true))
    }

    fn none(&self, actual: &Value, items: Vec<Cow<'_, Value>>) -> Result<ConstraintResult<'_>> {
        for (index, item) in items.into_iter().enumerate() {
            if self.inner.apply(&item)?.is_success() {
                trace!(index, "first matching item");
                return Ok(ConstraintResult::new(self, actual.clone(), false).with_context(
                    ResultContext::FailingItem {
                        index,
                        item: item.into_owned(),
                    },
                ));
            }
        }
        Ok(ConstraintResult::new(self, actual.clone(), true))
    }

    fn some(&self, actual: &Value, items: Vec<Cow<'_, Value>>) -> Result<ConstraintResult<'_>> {
        for (index, item) in items.iter().enumerate() {
            if self.inner.apply(item)?.is_success() {
                trace!(index, "first matching item");
                return Ok(ConstraintResult::new(self, actual.clone(), true));
            }
        }
        Ok(ConstraintResult::new(self, actual.clone(), false))
    }

    fn exactly_count(
        &self,
        expected: usize,
        actual: &Value,
        items: Vec<Cow<'_, Value>>,
    ) -> Result<ConstraintResult<'_>> {
        let mut count = 0;
        let mut captured = CapturedItems::new();
        for item in items {
            if self.inner.apply(&item)?.is_success() {
                count += 1;
                if captured.len() <= expected {
                    captured.push(item.into_owned());
                }
            }
        }
        trace!(expected, count, "counted matching items");
        if count == expected {
            return Ok(ConstraintResult::new(self, actual.clone(), true));
        }
        Ok(
            ConstraintResult::new(self, actual.clone(), false).with_context(
                ResultContext::MatchSummary {
                    expected,
                    count,
                    items: captured,
                },
            ),
        )
    }
}

impl Constraint for ItemsConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let sequence = actual
            .as_sequence()
            .ok_or_else(|| MatchError::type_mismatch("a sequence", actual.kind().to_string()))?;
        let items: Vec<Cow<'_, Value>> = sequence
            .iter()
            .map(|item| reconcile(sequence.element_kind(), item))
            .collect();

        match self.quantifier {
            Quantifier::All => self.all(actual, items),
            Quantifier::Some => self.some(actual, items),
            Quantifier::None => self.none(actual, items),
            Quantifier::Exactly(expected) => self.exactly_count(expected.get(), actual, items),
        }
    }

    fn description(&self) -> String {
        let inner = self.inner.description();
        if inner.is_empty() {
            self.quantifier.to_string()
        } else {
            format!("{} {}", self.quantifier, inner)
        }
    }

    fn display_name(&self) -> &str {
        match self.quantifier {
            Quantifier::All => "All",
            Quantifier::Some => "Some",
            Quantifier::None => "None",
            Quantifier::Exactly(_) => "Exactly",
        }
    }

    fn representation(&self) -> String {
        match self.quantifier {
            Quantifier::Exactly(n) => format!("<exactly {} {}>", n, self.inner.representation()),
            _ => format!(
                "<{} {}>",
                self.display_name().to_lowercase(),
                self.inner.representation()
            ),
        }
    }
}

// A sequence declared to hold `Option<T>` may still yield raw `T` items.
// Those are wrapped so the inner constraint sees the declared kind.
fn reconcile<'v>(declared: Option<&ValueKind>, item: &'v Value) -> Cow<'v, Value> {
    match (declared, item) {
        (_, Value::Null | Value::Optional(_)) => Cow::Borrowed(item),
        (Some(ValueKind::Nullable(underlying)), _) if item.kind() == **underlying => {
            Cow::Owned(Value::some(item.clone()))
        }
        _ => Cow::Borrowed(item),
    }
}
