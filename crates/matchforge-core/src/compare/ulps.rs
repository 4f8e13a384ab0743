//! Distance between floats measured in representable steps.
//!
//! The bit pattern of an IEEE float is sign-magnitude. Mapping negative
//! patterns onto `0x8000... - bits` turns it into a monotonic integer line
//! where adjacent floats differ by one, so the step count is a subtraction.

/// Returns true if `left` and `right` are at most `max_ulps` `f64` steps apart.
///
/// NaN and infinities never reach this function; the caller compares them
/// exactly.
pub fn f64_within_ulps(left: f64, right: f64, max_ulps: u64) -> bool {
    if left == right {
        return true;
    }
    let distance = (ordered_bits_f64(left) as i128 - ordered_bits_f64(right) as i128).unsigned_abs();
    distance <= max_ulps as u128
}

/// Returns true if `left` and `right` are at most `max_ulps` `f32` steps apart.
pub fn f32_within_ulps(left: f32, right: f32, max_ulps: u64) -> bool {
    if left == right {
        return true;
    }
    let distance = (ordered_bits_f32(left) as i64 - ordered_bits_f32(right) as i64).unsigned_abs();
    distance <= max_ulps
}

fn ordered_bits_f64(value: f64) -> i64 {
    let bits = value.to_bits();
    if bits >> 63 == 1 {
        0x8000_0000_0000_0000u64.wrapping_sub(bits) as i64
    } else {
        bits as i64
    }
}

fn ordered_bits_f32(value: f32) -> i32 {
    let bits = value.to_bits();
    if bits >> 31 == 1 {
        0x8000_0000u32.wrapping_sub(bits) as i32
    } else {
        bits as i32
    }
}
