use matchforge_core::{are_equal, MatchError, Number, Result, Tolerance, Value};
use tracing::debug;

use crate::constraint::Constraint;
use crate::result::ConstraintResult;

/// Equality against an expected value, optionally within a tolerance.
///
/// # Example
///
/// ```
/// use matchforge_constraints::leaf::EqualConstraint;
/// use matchforge_constraints::Constraint;
/// use matchforge_core::Value;
///
/// let near_ten = EqualConstraint::new(10.0).within(0.05).unwrap();
/// assert!(near_ten.apply(&Value::from(10.04)).unwrap().is_success());
/// assert_eq!(near_ten.description(), "10.0d +/- 0.05d");
/// ```
#[derive(Debug, Clone)]
pub struct EqualConstraint {
    expected: Value,
    tolerance: Tolerance,
    tolerance_given: bool,
}

impl EqualConstraint {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            tolerance: Tolerance::default(),
            tolerance_given: false,
        }
    }

    pub fn expected(&self) -> &Value {
        &self.expected
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Replaces the tolerance wholesale.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self.tolerance_given = true;
        self
    }

    /// Sets the tolerance amount, initially with no mode.
    ///
    /// # Errors
    ///
    /// Fails for negative or NaN amounts, or when a tolerance was already
    /// given.
    pub fn within(self, amount: impl Into<Number>) -> Result<Self> {
        if self.tolerance_given {
            debug!(current = %self.tolerance, "tolerance already specified");
            return Err(MatchError::construction(
                "Within may only be specified once",
            ));
        }
        let tolerance = Tolerance::new(amount)?;
        Ok(self.with_tolerance(tolerance))
    }

    /// Interprets the tolerance amount as a percentage of the expected value.
    pub fn percent(mut self) -> Result<Self> {
        self.tolerance = self.tolerance.percent()?;
        Ok(self)
    }

    /// Interprets the tolerance amount as a count of representable steps.
    pub fn ulps(mut self) -> Result<Self> {
        self.tolerance = self.tolerance.ulps()?;
        Ok(self)
    }
}

impl Constraint for EqualConstraint {
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        let equal = are_equal(&self.expected, actual, &self.tolerance)?;
        Ok(ConstraintResult::new(self, actual.clone(), equal))
    }

    fn description(&self) -> String {
        let tolerance = self.tolerance.to_string();
        if tolerance.is_empty() {
            self.expected.to_string()
        } else {
            format!("{} {}", self.expected, tolerance)
        }
    }

    fn display_name(&self) -> &str {
        "Equal"
    }

    fn arguments(&self) -> Vec<Value> {
        vec![self.expected.clone()]
    }
}
