//! Dynamic values that constraints are applied to.
//!
//! A [`Value`] is the "actual" handed to a constraint. Scalars keep their
//! primitive kind, sequences may declare an element kind, and arbitrary user
//! types enter through [`ObjectValue`].

mod kind;
mod number;


use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub use kind::{StaticKind, ValueKind};
pub use number::Number;

/// A value that can be tested by a constraint.
#[derive(Clone)]
pub enum Value {
    /// Null or absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Character value.
    Char(char),
    /// Number of any primitive width.
    Number(Number),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    List(Sequence),
    /// A present value in a nullable slot.
    Optional(Box<Value>),
    /// User-defined value.
    Object(Arc<dyn ObjectValue>),
}

impl Value {
    /// Creates an untyped sequence value.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(Sequence::new(items.into_iter().map(Into::into).collect()))
    }

    /// Creates a sequence value with a declared element kind.
    pub fn typed_list<I, T>(element_kind: ValueKind, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(Sequence::typed(
            element_kind,
            items.into_iter().map(Into::into).collect(),
        ))
    }

    /// Wraps a present value as its nullable equivalent.
    pub fn some(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::Null => Value::Null,
            wrapped @ Value::Optional(_) => wrapped,
            other => Value::Optional(Box::new(other)),
        }
    }

    /// Wraps a user-defined value.
    pub fn object<T: ObjectValue>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    /// Returns the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::Number(n) => n.kind(),
            Value::String(_) => ValueKind::String,
            Value::List(_) => ValueKind::List,
            Value::Optional(inner) => inner.kind().nullable(),
            Value::Object(obj) => ValueKind::Object(obj.type_name()),
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Strips any nullable wrapping.
    pub fn unwrapped(&self) -> &Value {
        match self {
            Value::Optional(inner) => inner.unwrapped(),
            other => other,
        }
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self.unwrapped() {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number if this is a Number value.
    pub fn as_number(&self) -> Option<&Number> {
        match self.unwrapped() {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self.unwrapped() {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as sequence if this is a List value.
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self.unwrapped() {
            Value::List(seq) => Some(seq),
            _ => None,
        }
    }

    /// Get as user-defined object if this is an Object value.
    pub fn as_object(&self) -> Option<&dyn ObjectValue> {
        match self.unwrapped() {
            Value::Object(obj) => Some(obj.as_ref()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality. Numbers of different kinds are never equal here;
    /// use the comparison core for value semantics.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Optional(a), Value::Optional(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                Arc::ptr_eq(a, b) || a.equals(b.as_ref()).unwrap_or(false)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) if s.is_empty() => write!(f, "<string.Empty>"),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::List(seq) => write!(f, "{}", seq),
            Value::Optional(inner) => write!(f, "{}", inner),
            Value::Object(obj) => write!(f, "<{:?}>", obj),
        }
    }
}

/// An ordered sequence of values with an optional declared element kind.
///
/// The declared kind mirrors a statically typed collection: a sequence built
/// from `Vec<Option<i32>>` declares `Option<i32>` even though its present
/// items are plain integers at runtime.
#[derive(Clone, PartialEq, Default)]
pub struct Sequence {
    items: Vec<Value>,
    element_kind: Option<ValueKind>,
}

impl Sequence {
    /// Creates a sequence without a declared element kind.
    pub fn new(items: Vec<Value>) -> Self {
        Self {
            items,
            element_kind: None,
        }
    }

    /// Creates a sequence with a declared element kind.
    pub fn typed(element_kind: ValueKind, items: Vec<Value>) -> Self {
        Self {
            items,
            element_kind: Some(element_kind),
        }
    }

    /// Returns the declared element kind, if any.
    pub fn element_kind(&self) -> Option<&ValueKind> {
        self.element_kind.as_ref()
    }

    /// Returns the items in order.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the sequence holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Formats at most `max_items` items, appending `...` when truncated.
    pub fn format_limited(&self, max_items: usize) -> String {
        if self.items.is_empty() {
            return "<empty>".to_string();
        }
        let mut parts: Vec<String> = self
            .items
            .iter()
            .take(max_items)
            .map(|item| item.to_string())
            .collect();
        if self.items.len() > max_items {
            parts.push("...".to_string());
        }
        format!("< {} >", parts.join(", "))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_limited(usize::MAX))
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A user-defined value with optional comparison capabilities.
///
/// The comparison core consults these hooks in order: the left operand's
/// typed comparison, the right operand's typed comparison (result negated),
/// then either operand's untyped comparison. A type exposing none of them is
/// not comparable.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use std::cmp::Ordering;
/// use matchforge_core::{ObjectValue, Value};
///
/// #[derive(Debug)]
/// struct Version(u32, u32);
///
/// impl ObjectValue for Version {
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
///
///     fn compare_typed(&self, other: &dyn ObjectValue) -> Option<Ordering> {
///         let other = other.as_any().downcast_ref::<Version>()?;
///         Some((self.0, self.1).cmp(&(other.0, other.1)))
///     }
/// }
///
/// let v = Value::object(Version(1, 2));
/// assert!(v.as_object().is_some());
/// ```
pub trait ObjectValue: Any + Send + Sync + fmt::Debug {
    /// Upcast used by implementations to downcast the other operand.
    fn as_any(&self) -> &dyn Any;

    /// Name shown in diagnostics and used as the object's kind.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Ordering against an object whose runtime type this type understands.
    fn compare_typed(&self, other: &dyn ObjectValue) -> Option<Ordering> {
        let _ = other;
        None
    }

    /// Ordering against any value.
    fn compare_untyped(&self, other: &Value) -> Option<Ordering> {
        let _ = other;
        None
    }

    /// Equality against another object. `None` defers to comparison.
    fn equals(&self, other: &dyn ObjectValue) -> Option<bool> {
        let _ = other;
        None
    }
}

/// Adapts any totally ordered type into an [`ObjectValue`].
///
/// ```
/// use matchforge_core::{compare, Ordered, Value};
/// use std::cmp::Ordering;
///
/// let a = Value::object(Ordered("apple"));
/// let b = Value::object(Ordered("banana"));
/// assert_eq!(compare(&a, &b).unwrap(), Ordering::Less);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ordered<T>(pub T);

impl<T> ObjectValue for Ordered<T>
where
    T: Ord + fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn compare_typed(&self, other: &dyn ObjectValue) -> Option<Ordering> {
        let other = other.as_any().downcast_ref::<Ordered<T>>()?;
        Some(self.0.cmp(&other.0))
    }

    fn equals(&self, other: &dyn ObjectValue) -> Option<bool> {
        let other = other.as_any().downcast_ref::<Ordered<T>>()?;
        Some(self.0 == other.0)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::List(value)
    }
}

macro_rules! impl_value_from_number {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )+
    };
}

impl_value_from_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(feature = "decimal")]
impl_value_from_number!(rust_decimal::Decimal);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::some(v),
            None => Value::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value> + StaticKind,
{
    fn from(items: Vec<T>) -> Self {
        Value::typed_list(T::static_kind(), items)
    }
}
