//! User-defined object values.

use std::any::Any;
use std::cmp::Ordering;

use matchforge_core::{ObjectValue, Value};

/// A semantic version ordered against other versions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn value(major: u32, minor: u32, patch: u32) -> Value {
        Value::object(Self::new(major, minor, patch))
    }
}

impl ObjectValue for Version {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn compare_typed(&self, other: &dyn ObjectValue) -> Option<Ordering> {
        let other = other.as_any().downcast_ref::<Version>()?;
        Some(self.cmp(other))
    }
}

/// A temperature that orders itself against plain numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Celsius(pub f64);

impl Celsius {
    pub fn value(degrees: f64) -> Value {
        Value::object(Celsius(degrees))
    }
}

impl ObjectValue for Celsius {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn compare_untyped(&self, other: &Value) -> Option<Ordering> {
        self.0.partial_cmp(&other.as_number()?.to_f64())
    }
}

/// An object with no comparison capability at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opaque;

impl Opaque {
    pub fn value() -> Value {
        Value::object(Opaque)
    }
}

impl ObjectValue for Opaque {
    fn as_any(&self) -> &dyn Any {
        self
    }
}
