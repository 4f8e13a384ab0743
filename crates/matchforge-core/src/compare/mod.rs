//! Ordering and equality for constraint operands.
//!
//! Every ordering- and equality-based constraint goes through this module,
//! so `<`, `<=`, `>`, `>=` and tolerance-qualified equality share one
//! semantics.
//!
//! ## Ordering chain
//!
//! 1. Nullable wrappers are stripped. Null orders below everything and
//!    equal to null.
//! 2. Numbers of any kind compare by mathematical value.
//! 3. Booleans, characters and strings compare within their own kind.
//! 4. Objects: the left operand's typed comparison, then the right operand's
//!    typed comparison (reversed), then either operand's untyped comparison.
//! 5. Anything else is [`MatchError::NotComparable`].

mod numerics;
mod tolerance;
mod ulps;


use std::cmp::Ordering;
use std::sync::Arc;

use tracing::trace;

pub use numerics::{compare_numbers, numbers_equal};
pub use tolerance::{Tolerance, ToleranceMode};
pub use ulps::{f32_within_ulps, f64_within_ulps};

use crate::error::{MatchError, Result};
use crate::value::Value;

/// Orders two values.
///
/// # Errors
///
/// Returns [`MatchError::NotComparable`] when the chain finds no ordering.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use matchforge_core::{compare, Value};
///
/// // Mixed kinds compare by mathematical value.
/// assert_eq!(compare(&Value::from(3i32), &Value::from(2.5f64)).unwrap(), Ordering::Greater);
/// assert_eq!(compare(&Value::from(u64::MAX), &Value::from(-1i64)).unwrap(), Ordering::Greater);
///
/// // Null orders first.
/// assert_eq!(compare(&Value::Null, &Value::from(0i32)).unwrap(), Ordering::Less);
///
/// // Unrelated kinds have no ordering.
/// assert!(compare(&Value::from("a"), &Value::from(1i32)).is_err());
/// ```
pub fn compare(x: &Value, y: &Value) -> Result<Ordering> {
    let (x, y) = (x.unwrapped(), y.unwrapped());
    match (x, y) {
        (Value::Null, Value::Null) => Ok(Ordering::Equal),
        (Value::Null, _) => Ok(Ordering::Less),
        (_, Value::Null) => Ok(Ordering::Greater),
        (Value::Number(a), Value::Number(b)) => Ok(compare_numbers(a, b)),
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::Char(a), Value::Char(b)) => Ok(a.cmp(b)),
        (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
        _ => compare_objects(x, y),
    }
}

fn compare_objects(x: &Value, y: &Value) -> Result<Ordering> {
    if let (Value::Object(left), Value::Object(right)) = (x, y) {
        if let Some(ordering) = left.compare_typed(right.as_ref()) {
            return Ok(ordering);
        }
        if let Some(ordering) = right.compare_typed(left.as_ref()) {
            trace!("ordering found through the right operand's typed comparison");
            return Ok(ordering.reverse());
        }
    }
    if let Value::Object(left) = x {
        if let Some(ordering) = left.compare_untyped(y) {
            return Ok(ordering);
        }
    }
    if let Value::Object(right) = y {
        if let Some(ordering) = right.compare_untyped(x) {
            return Ok(ordering.reverse());
        }
    }
    Err(MatchError::not_comparable(
        x.kind().to_string(),
        y.kind().to_string(),
    ))
}

/// Tests two values for equality, applying `tolerance` to numeric operands.
///
/// Sequences are equal when they have the same length and pairwise equal
/// items. Objects are equal when they are the same instance, when their
/// `equals` hook says so, or when they compare as equal. Values of
/// unrelated kinds are unequal, never an error.
///
/// # Errors
///
/// Propagates [`MatchError::TypeMismatch`] from an `Ulps` tolerance applied
/// to operands that are not same-width floats.
pub fn are_equal(expected: &Value, actual: &Value, tolerance: &Tolerance) -> Result<bool> {
    let (expected, actual) = (expected.unwrapped(), actual.unwrapped());
    match (expected, actual) {
        (Value::Null, Value::Null) => Ok(true),
        (Value::Null, _) | (_, Value::Null) => Ok(false),
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b, tolerance),
        (Value::List(a), Value::List(b)) => {
            if a.len() != b.len() {
                return Ok(false);
            }
            for (left, right) in a.iter().zip(b.iter()) {
                if !are_equal(left, right, tolerance)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        (Value::Object(a), Value::Object(b)) => {
            if Arc::ptr_eq(a, b) {
                return Ok(true);
            }
            if let Some(equal) = a.equals(b.as_ref()) {
                return Ok(equal);
            }
            Ok(compare_objects(expected, actual).is_ok_and(|o| o == Ordering::Equal))
        }
        (Value::Object(_), _) | (_, Value::Object(_)) => {
            Ok(compare_objects(expected, actual).is_ok_and(|o| o == Ordering::Equal))
        }
        _ => Ok(expected == actual),
    }
}

/// Numeric equality under a tolerance.
///
/// # Errors
///
/// Returns [`MatchError::TypeMismatch`] if either operand is not numeric.
///
/// # Examples
///
/// ```
/// use matchforge_core::{compare_with_tolerance, Tolerance, Value};
///
/// let linear = Tolerance::new(0.05).unwrap().linear().unwrap();
/// assert!(compare_with_tolerance(&Value::from(10.0), &Value::from(10.04), &linear).unwrap());
/// assert!(!compare_with_tolerance(&Value::from(10.0), &Value::from(10.06), &linear).unwrap());
///
/// let percent = Tolerance::new(5).unwrap().percent().unwrap();
/// assert!(compare_with_tolerance(&Value::from(100), &Value::from(105), &percent).unwrap());
/// ```
pub fn compare_with_tolerance(x: &Value, y: &Value, tolerance: &Tolerance) -> Result<bool> {
    match (x.as_number(), y.as_number()) {
        (Some(a), Some(b)) => numbers_equal(a, b, tolerance),
        _ => Err(MatchError::type_mismatch(
            "numeric operands",
            format!("{} and {}", x.kind(), y.kind()),
        )),
    }
}
