//! Numeric ordering and tolerance equality across primitive kinds.
//!
//! Operands are promoted to a common representation before comparing:
//! integers of any width and signedness widen to `i128`, so `u64::MAX` and
//! `-1i64` order correctly; floats meeting integers compare exactly without
//! rounding the integer through `f64`.

use std::cmp::Ordering;

#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

use super::tolerance::{Tolerance, ToleranceMode};
use super::ulps::{f32_within_ulps, f64_within_ulps};
use crate::error::{MatchError, Result};
use crate::value::Number;

/// Common representation of two operands.
enum Promoted {
    Int(i128, i128),
    Float(f64, f64),
    #[cfg(feature = "decimal")]
    Decimal(Decimal, Decimal),
}

fn promote(a: &Number, b: &Number) -> Promoted {
    #[cfg(feature = "decimal")]
    if a.is_decimal() || b.is_decimal() {
        if let (Some(x), Some(y)) = (a.to_decimal(), b.to_decimal()) {
            return Promoted::Decimal(x, y);
        }
    }
    match (a.as_i128(), b.as_i128()) {
        (Some(x), Some(y)) => Promoted::Int(x, y),
        _ => Promoted::Float(a.to_f64(), b.to_f64()),
    }
}

/// Orders two numbers by mathematical value.
///
/// NaN orders below every other number and equal to itself, so the result
/// is a total order.
pub fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    match (a, b) {
        (Number::F32(x), Number::F32(y)) => total_cmp_f64(*x as f64, *y as f64),
        _ if a.is_floating() && b.is_integral() => {
            cmp_float_int(a.to_f64(), b.as_i128().unwrap_or_default())
        }
        _ if a.is_integral() && b.is_floating() => {
            cmp_float_int(b.to_f64(), a.as_i128().unwrap_or_default()).reverse()
        }
        _ => match promote(a, b) {
            Promoted::Int(x, y) => x.cmp(&y),
            Promoted::Float(x, y) => total_cmp_f64(x, y),
            #[cfg(feature = "decimal")]
            Promoted::Decimal(x, y) => x.cmp(&y),
        },
    }
}

/// Tests two numbers for equality under a tolerance.
///
/// # Errors
///
/// Returns [`MatchError::TypeMismatch`] for an `Ulps` tolerance unless both
/// operands are floats of the same width.
pub fn numbers_equal(expected: &Number, actual: &Number, tolerance: &Tolerance) -> Result<bool> {
    if expected.is_nan() && actual.is_nan() {
        return Ok(true);
    }

    let mode = tolerance.effective_mode();
    if mode == ToleranceMode::Ulps {
        return ulps_equal(expected, actual, tolerance);
    }

    if expected.is_floating() || actual.is_floating() {
        let (x, y) = (expected.to_f64(), actual.to_f64());
        if x.is_infinite() || x.is_nan() || y.is_nan() {
            return Ok(x == y);
        }
    }

    if mode == ToleranceMode::Unset {
        return Ok(compare_numbers(expected, actual) == Ordering::Equal);
    }

    let amount = tolerance.amount();
    let equal = match promote(expected, actual) {
        Promoted::Int(x, y) => match mode {
            ToleranceMode::Linear => match (amount.as_i128(), x.checked_sub(y)) {
                (Some(slack), Some(diff)) => diff.unsigned_abs() <= slack.unsigned_abs(),
                _ => (x as f64 - y as f64).abs() <= amount.to_f64(),
            },
            _ => percent_equal(x as f64, y as f64, tolerance.amount_f64()),
        },
        Promoted::Float(x, y) => match mode {
            ToleranceMode::Linear => (x - y).abs() <= tolerance.amount_f64(),
            _ => percent_equal(x, y, tolerance.amount_f64()),
        },
        #[cfg(feature = "decimal")]
        Promoted::Decimal(x, y) => match (mode, amount.to_decimal()) {
            (ToleranceMode::Linear, Some(slack)) => (x - y).abs() <= slack,
            _ => {
                use num_traits::ToPrimitive;
                percent_equal(
                    x.to_f64().unwrap_or(f64::NAN),
                    y.to_f64().unwrap_or(f64::NAN),
                    tolerance.amount_f64(),
                )
            }
        },
    };
    Ok(equal)
}

// Relative to the expected value. A zero expected value leaves no scale to
// take a percentage of, so only an exact match passes.
fn percent_equal(expected: f64, actual: f64, percent: f64) -> bool {
    if expected == 0.0 {
        return expected == actual;
    }
    (expected - actual).abs() <= expected.abs() * percent / 100.0
}

fn ulps_equal(expected: &Number, actual: &Number, tolerance: &Tolerance) -> Result<bool> {
    let max_ulps = tolerance.ulps_amount().unwrap_or_default();
    match (expected, actual) {
        (Number::F64(x), Number::F64(y)) => Ok(float_exact_or(*x, *y, || {
            f64_within_ulps(*x, *y, max_ulps)
        })),
        (Number::F32(x), Number::F32(y)) => Ok(float_exact_or(*x as f64, *y as f64, || {
            f32_within_ulps(*x, *y, max_ulps)
        })),
        _ => Err(MatchError::type_mismatch(
            "floating point operands of the same width for an Ulps tolerance",
            format!("{} and {}", expected.kind(), actual.kind()),
        )),
    }
}

fn float_exact_or(x: f64, y: f64, within: impl FnOnce() -> bool) -> bool {
    if x.is_infinite() || y.is_infinite() || x.is_nan() || y.is_nan() {
        return x == y;
    }
    within()
}

fn total_cmp_f64(x: f64, y: f64) -> Ordering {
    match x.partial_cmp(&y) {
        Some(ordering) => ordering,
        None => match (x.is_nan(), y.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            _ => Ordering::Greater,
        },
    }
}

// Exact float-versus-integer ordering. The integer never passes through
// `f64`, so 2^53 + 1 still orders above 2^53 as a float.
fn cmp_float_int(f: f64, i: i128) -> Ordering {
    const TWO_POW_127: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

    if f.is_nan() {
        return Ordering::Less;
    }
    let truncated = f.trunc();
    if truncated < -TWO_POW_127 {
        return Ordering::Less;
    }
    if truncated >= TWO_POW_127 {
        return Ordering::Greater;
    }
    match (truncated as i128).cmp(&i) {
        Ordering::Equal => f.fract().partial_cmp(&0.0).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}
