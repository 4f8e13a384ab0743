//! Tolerance for approximate numeric equality.

use std::fmt;

use tracing::debug;

use crate::error::{MatchError, Result};
use crate::value::Number;

/// How a tolerance amount is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ToleranceMode {
    /// No mode chosen yet. A non-zero amount is read as `Linear`.
    #[default]
    Unset,
    /// Absolute difference: `|x - y| <= amount`.
    Linear,
    /// Relative difference: `|x - y| <= amount% of |x|`.
    Percent,
    /// Distance in representable floating-point steps.
    Ulps,
}

/// A numeric slack plus the mode that interprets it.
///
/// The mode can be fixed once. Asking for the same mode again is a no-op;
/// asking for a different one is [`MatchError::AmbiguousTolerance`].
///
/// # Examples
///
/// ```
/// use matchforge_core::{Tolerance, ToleranceMode};
///
/// let t = Tolerance::new(5).unwrap().percent().unwrap();
/// assert_eq!(t.mode(), ToleranceMode::Percent);
/// assert!(t.ulps().is_err());
///
/// let pending = Tolerance::new(0.05).unwrap();
/// assert_eq!(pending.mode(), ToleranceMode::Unset);
/// assert_eq!(pending.effective_mode(), ToleranceMode::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    amount: Number,
    mode: ToleranceMode,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            amount: Number::I32(0),
            mode: ToleranceMode::Unset,
        }
    }
}

impl Tolerance {
    /// A zero linear tolerance: exact equality, mode already fixed.
    pub fn exact() -> Self {
        Self {
            amount: Number::I32(0),
            mode: ToleranceMode::Linear,
        }
    }

    /// Creates a tolerance with an amount and no mode yet.
    ///
    /// # Errors
    ///
    /// Returns a construction error for negative or NaN amounts.
    pub fn new(amount: impl Into<Number>) -> Result<Self> {
        let amount = amount.into();
        if amount.is_nan() || amount.is_negative() {
            return Err(MatchError::construction(format!(
                "Tolerance amount must be a non-negative number, but was {}",
                amount
            )));
        }
        Ok(Self {
            amount,
            mode: ToleranceMode::Unset,
        })
    }

    /// Returns the amount.
    pub fn amount(&self) -> Number {
        self.amount
    }

    /// Returns the mode as assigned.
    pub fn mode(&self) -> ToleranceMode {
        self.mode
    }

    /// Returns true when no mode has been assigned.
    pub fn is_unset_or_default(&self) -> bool {
        self.mode == ToleranceMode::Unset
    }

    /// The mode applied at the point of use.
    ///
    /// An unset tolerance with a non-zero amount is linear; with a zero
    /// amount it stays unset, meaning exact equality.
    pub fn effective_mode(&self) -> ToleranceMode {
        match self.mode {
            ToleranceMode::Unset if !self.amount.is_zero() => ToleranceMode::Linear,
            mode => mode,
        }
    }

    /// Fixes the mode to `Linear`.
    pub fn linear(self) -> Result<Self> {
        self.with_mode(ToleranceMode::Linear)
    }

    /// Fixes the mode to `Percent`.
    pub fn percent(self) -> Result<Self> {
        self.with_mode(ToleranceMode::Percent)
    }

    /// Fixes the mode to `Ulps`. The amount must be a whole number.
    pub fn ulps(self) -> Result<Self> {
        self.with_mode(ToleranceMode::Ulps)
    }

    /// Assigns a mode, at most once.
    ///
    /// # Errors
    ///
    /// - [`MatchError::AmbiguousTolerance`] if a different mode is already set.
    /// - [`MatchError::Construction`] when resetting to `Unset`, or for an
    ///   `Ulps` mode with a fractional amount.
    pub fn with_mode(self, mode: ToleranceMode) -> Result<Self> {
        if mode == ToleranceMode::Unset {
            return Err(MatchError::construction(
                "Tolerance mode cannot be reset to unset",
            ));
        }
        if self.mode != ToleranceMode::Unset && self.mode != mode {
            debug!(current = ?self.mode, requested = ?mode, "rejected tolerance mode change");
            return Err(MatchError::AmbiguousTolerance {
                current: self.mode,
                requested: mode,
            });
        }
        if mode == ToleranceMode::Ulps && self.ulps_amount().is_none() {
            return Err(MatchError::construction(format!(
                "Ulps tolerance must be a whole number, but was {}",
                self.amount
            )));
        }
        Ok(Self {
            amount: self.amount,
            mode,
        })
    }

    /// The amount as an `f64`.
    pub(crate) fn amount_f64(&self) -> f64 {
        self.amount.to_f64()
    }

    /// The amount as a step count for ULP comparisons.
    pub(crate) fn ulps_amount(&self) -> Option<u64> {
        match self.amount.as_i128() {
            Some(v) => u64::try_from(v).ok(),
            None => {
                let f = self.amount.to_f64();
                (f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64).then_some(f as u64)
            }
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effective_mode() {
            ToleranceMode::Unset => Ok(()),
            ToleranceMode::Linear => write!(f, "+/- {}", self.amount),
            ToleranceMode::Percent => write!(f, "+/- {} Percent", self.amount),
            ToleranceMode::Ulps => write!(f, "+/- {} Ulps", self.amount),
        }
    }
}
