//! Resolved constraint trees kept for repeated use.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use matchforge_core::{Result, Value};

use crate::combinators;
use crate::constraint::SharedConstraint;
use crate::expression::ResolveConstraint;
use crate::result::ConstraintResult;

/// A resolved tree stored under a name.
///
/// Resolving it hands out the stored tree; the fluent chain that built it
/// never runs again. Handles combine with `&`, `|` and `!`.
///
/// # Example
///
/// ```
/// use matchforge_constraints::{Is, ReusableConstraint};
/// use matchforge_core::Value;
///
/// let positive = ReusableConstraint::named("positive", &Is::greater_than(0)).unwrap();
/// let small = ReusableConstraint::named("small", &Is::less_than(10)).unwrap();
///
/// let digit = positive & small;
/// assert_eq!(digit.name(), "positive & small");
/// assert!(digit.apply(&Value::from(7)).unwrap().is_success());
/// assert!(!digit.apply(&Value::from(12)).unwrap().is_success());
/// assert!((!digit).apply(&Value::from(12)).unwrap().is_success());
/// ```
#[derive(Clone)]
pub struct ReusableConstraint {
    name: String,
    root: SharedConstraint,
}

impl ReusableConstraint {
    /// Resolves `expr`, naming it after its representation.
    pub fn new(expr: &impl ResolveConstraint) -> Result<Self> {
        let root = expr.resolve()?;
        Ok(Self {
            name: root.representation(),
            root,
        })
    }

    pub fn named(name: impl Into<String>, expr: &impl ResolveConstraint) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            root: expr.resolve()?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &SharedConstraint {
        &self.root
    }

    /// Applies the stored tree.
    pub fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
        self.root.apply(actual)
    }
}

impl ResolveConstraint for ReusableConstraint {
    fn resolve(&self) -> Result<SharedConstraint> {
        Ok(self.root.clone())
    }
}

impl From<SharedConstraint> for ReusableConstraint {
    fn from(root: SharedConstraint) -> Self {
        Self {
            name: root.representation(),
            root,
        }
    }
}

impl fmt::Debug for ReusableConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableConstraint")
            .field("name", &self.name)
            .field("root", &self.root)
            .finish()
    }
}

impl BitAnd for ReusableConstraint {
    type Output = ReusableConstraint;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            name: format!("{} & {}", self.name, rhs.name),
            root: combinators::and(self.root, rhs.root),
        }
    }
}

impl BitOr for ReusableConstraint {
    type Output = ReusableConstraint;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            name: format!("{} | {}", self.name, rhs.name),
            root: combinators::or(self.root, rhs.root),
        }
    }
}

impl Not for ReusableConstraint {
    type Output = ReusableConstraint;

    fn not(self) -> Self::Output {
        Self {
            name: format!("!{}", self.name),
            root: combinators::not(self.root),
        }
    }
}
