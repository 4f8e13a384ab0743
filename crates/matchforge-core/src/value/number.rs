//! Numeric values of every primitive width.

use std::fmt;

use num_traits::{ToPrimitive, Zero};
#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

use super::ValueKind;

/// A number carrying its original primitive kind.
///
/// Keeping the kind lets the comparison core pick an exact path when
/// operands of different widths or signedness meet, instead of funnelling
/// everything through `f64`.
///
/// # Examples
///
/// ```
/// use matchforge_core::Number;
///
/// let n = Number::from(42u64);
/// assert!(n.is_integral());
/// assert_eq!(n.as_i128(), Some(42));
/// assert!(Number::from(0.5f32).is_floating());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    #[cfg(feature = "decimal")]
    Decimal(Decimal),
}

/// Generates `From<$ty> for Number` for each primitive.
macro_rules! impl_number_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Number {
                #[inline]
                fn from(value: $ty) -> Self {
                    Number::$variant(value)
                }
            }
        )+
    };
}

impl_number_from!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

#[cfg(feature = "decimal")]
impl_number_from!(Decimal => Decimal);

impl From<isize> for Number {
    fn from(value: isize) -> Self {
        Number::I64(value as i64)
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Number::U64(value as u64)
    }
}

impl Number {
    /// Returns the runtime kind of this number.
    pub fn kind(&self) -> ValueKind {
        match self {
            Number::I8(_) => ValueKind::I8,
            Number::I16(_) => ValueKind::I16,
            Number::I32(_) => ValueKind::I32,
            Number::I64(_) => ValueKind::I64,
            Number::I128(_) => ValueKind::I128,
            Number::U8(_) => ValueKind::U8,
            Number::U16(_) => ValueKind::U16,
            Number::U32(_) => ValueKind::U32,
            Number::U64(_) => ValueKind::U64,
            Number::F32(_) => ValueKind::F32,
            Number::F64(_) => ValueKind::F64,
            #[cfg(feature = "decimal")]
            Number::Decimal(_) => ValueKind::Decimal,
        }
    }

    /// Returns true for `f32` and `f64`.
    pub fn is_floating(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Returns true for every integer width.
    pub fn is_integral(&self) -> bool {
        self.as_i128().is_some()
    }

    /// Returns true for decimal numbers.
    pub fn is_decimal(&self) -> bool {
        #[cfg(feature = "decimal")]
        {
            matches!(self, Number::Decimal(_))
        }
        #[cfg(not(feature = "decimal"))]
        {
            false
        }
    }

    /// Widens an integer of any width to `i128`. `None` for non-integers.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::I8(v) => Some(v as i128),
            Number::I16(v) => Some(v as i128),
            Number::I32(v) => Some(v as i128),
            Number::I64(v) => Some(v as i128),
            Number::I128(v) => Some(v),
            Number::U8(v) => Some(v as i128),
            Number::U16(v) => Some(v as i128),
            Number::U32(v) => Some(v as i128),
            Number::U64(v) => Some(v as i128),
            _ => None,
        }
    }

    /// Lossy conversion to `f64`, used where an approximate magnitude suffices.
    pub fn to_f64(&self) -> f64 {
        let converted = match *self {
            Number::I8(v) => v.to_f64(),
            Number::I16(v) => v.to_f64(),
            Number::I32(v) => v.to_f64(),
            Number::I64(v) => v.to_f64(),
            Number::I128(v) => v.to_f64(),
            Number::U8(v) => v.to_f64(),
            Number::U16(v) => v.to_f64(),
            Number::U32(v) => v.to_f64(),
            Number::U64(v) => v.to_f64(),
            Number::F32(v) => v.to_f64(),
            Number::F64(v) => Some(v),
            #[cfg(feature = "decimal")]
            Number::Decimal(v) => v.to_f64(),
        };
        converted.unwrap_or(f64::NAN)
    }

    /// Converts to a decimal when the value is representable.
    #[cfg(feature = "decimal")]
    pub fn to_decimal(&self) -> Option<Decimal> {
        use num_traits::FromPrimitive;

        match *self {
            Number::Decimal(v) => Some(v),
            Number::F32(v) => Decimal::from_f32(v),
            Number::F64(v) => Decimal::from_f64(v),
            _ => self.as_i128().and_then(Decimal::from_i128),
        }
    }

    /// Returns true if the number is zero of any kind.
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::F32(v) => v.is_zero(),
            Number::F64(v) => v.is_zero(),
            #[cfg(feature = "decimal")]
            Number::Decimal(v) => v.is_zero(),
            _ => self.as_i128() == Some(0),
        }
    }

    /// Returns true if the number is strictly below zero.
    pub fn is_negative(&self) -> bool {
        match *self {
            Number::F32(v) => v < 0.0,
            Number::F64(v) => v < 0.0,
            #[cfg(feature = "decimal")]
            Number::Decimal(v) => v.is_sign_negative() && !v.is_zero(),
            _ => self.as_i128().is_some_and(|v| v < 0),
        }
    }

    /// Returns true if the number is a floating-point NaN.
    pub fn is_nan(&self) -> bool {
        match *self {
            Number::F32(v) => v.is_nan(),
            Number::F64(v) => v.is_nan(),
            _ => false,
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(v) => write!(f, "{}", v),
            Number::I16(v) => write!(f, "{}", v),
            Number::I32(v) => write!(f, "{}", v),
            Number::I64(v) => write!(f, "{}", v),
            Number::I128(v) => write!(f, "{}", v),
            Number::U8(v) => write!(f, "{}", v),
            Number::U16(v) => write!(f, "{}", v),
            Number::U32(v) => write!(f, "{}", v),
            Number::U64(v) => write!(f, "{}", v),
            Number::F32(v) if v.is_finite() => write!(f, "{:?}f", v),
            Number::F64(v) if v.is_finite() => write!(f, "{:?}d", v),
            Number::F32(v) => write!(f, "{}", v),
            Number::F64(v) => write!(f, "{}", v),
            #[cfg(feature = "decimal")]
            Number::Decimal(v) => write!(f, "{}m", v),
        }
    }
}
