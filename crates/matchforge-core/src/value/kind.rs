//! Runtime kinds of values.

use std::fmt;

/// The runtime kind of a [`Value`](super::Value).
///
/// `Nullable` is the kind of a present value inside an optional slot; it is
/// what a typed sequence of `Option<T>` declares for its elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Decimal,
    String,
    List,
    Nullable(Box<ValueKind>),
    Object(&'static str),
}

impl ValueKind {
    /// Wraps this kind as its nullable equivalent.
    pub fn nullable(self) -> Self {
        match self {
            ValueKind::Nullable(_) | ValueKind::Null => self,
            other => ValueKind::Nullable(Box::new(other)),
        }
    }

    /// Returns the underlying kind of a nullable, or the kind itself.
    pub fn underlying(&self) -> &ValueKind {
        match self {
            ValueKind::Nullable(inner) => inner,
            other => other,
        }
    }

    /// Returns true for numeric kinds.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueKind::I8
                | ValueKind::I16
                | ValueKind::I32
                | ValueKind::I64
                | ValueKind::I128
                | ValueKind::U8
                | ValueKind::U16
                | ValueKind::U32
                | ValueKind::U64
                | ValueKind::F32
                | ValueKind::F64
                | ValueKind::Decimal
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Char => write!(f, "char"),
            ValueKind::I8 => write!(f, "i8"),
            ValueKind::I16 => write!(f, "i16"),
            ValueKind::I32 => write!(f, "i32"),
            ValueKind::I64 => write!(f, "i64"),
            ValueKind::I128 => write!(f, "i128"),
            ValueKind::U8 => write!(f, "u8"),
            ValueKind::U16 => write!(f, "u16"),
            ValueKind::U32 => write!(f, "u32"),
            ValueKind::U64 => write!(f, "u64"),
            ValueKind::F32 => write!(f, "f32"),
            ValueKind::F64 => write!(f, "f64"),
            ValueKind::Decimal => write!(f, "decimal"),
            ValueKind::String => write!(f, "string"),
            ValueKind::List => write!(f, "list"),
            ValueKind::Nullable(inner) => write!(f, "Option<{}>", inner),
            ValueKind::Object(name) => write!(f, "{}", name),
        }
    }
}

/// Types whose value kind is known without looking at an instance.
///
/// Used to give sequences built from `Vec<T>` a declared element kind.
pub trait StaticKind {
    fn static_kind() -> ValueKind;
}

macro_rules! impl_static_kind {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl StaticKind for $ty {
                #[inline]
                fn static_kind() -> ValueKind {
                    ValueKind::$kind
                }
            }
        )+
    };
}

impl_static_kind!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    &str => String,
);

#[cfg(feature = "decimal")]
impl_static_kind!(rust_decimal::Decimal => Decimal);

impl<T: StaticKind> StaticKind for Option<T> {
    fn static_kind() -> ValueKind {
        T::static_kind().nullable()
    }
}

impl<T> StaticKind for Vec<T> {
    fn static_kind() -> ValueKind {
        ValueKind::List
    }
}
