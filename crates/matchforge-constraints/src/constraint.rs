//! The constraint abstraction.
//!
//! A constraint is an immutable predicate over a [`Value`]. Applying it
//! yields a [`ConstraintResult`] that records the verdict together with
//! enough state to render a failure message. Constraints are shared as
//! `Arc<dyn Constraint>`, so one resolved tree can be applied any number of
//! times from any number of threads.

use std::fmt;
use std::sync::Arc;

use matchforge_core::{Result, Value};

use crate::result::ConstraintResult;

/// Shared handle to a constraint tree node.
pub type SharedConstraint = Arc<dyn Constraint>;

/// A predicate over a value that explains itself.
///
/// `apply` returns `Ok` with a failed result when the constraint simply does
/// not hold. `Err` is reserved for cases where no verdict can be reached,
/// such as ordering a string against a number.
///
/// # Example
///
/// ```
/// use matchforge_constraints::{Constraint, ConstraintResult};
/// use matchforge_core::{Result, Value};
///
/// struct IsPositive;
///
/// impl Constraint for IsPositive {
///     fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>> {
///         let positive = actual.as_number().is_some_and(|n| !n.is_negative() && !n.is_zero());
///         Ok(ConstraintResult::new(self, actual.clone(), positive))
///     }
///
///     fn description(&self) -> String {
///         "positive".to_string()
///     }
///
///     fn display_name(&self) -> &str {
///         "Positive"
///     }
/// }
///
/// let result = IsPositive.apply(&Value::from(3)).unwrap();
/// assert!(result.is_success());
/// assert_eq!(IsPositive.representation(), "<positive>");
/// ```
pub trait Constraint: Send + Sync {
    /// Evaluates the constraint against `actual`.
    fn apply(&self, actual: &Value) -> Result<ConstraintResult<'_>>;

    /// Human-readable description used in failure messages.
    fn description(&self) -> String;

    /// Short name of the constraint kind, e.g. `"Equal"`.
    fn display_name(&self) -> &str;

    /// Arguments shown in the representation.
    fn arguments(&self) -> Vec<Value> {
        Vec::new()
    }

    /// Canonical string form, `<displayname arg1 arg2>`.
    ///
    /// The display name is lower-cased in the leading position so
    /// representations nest readably: `<not <equal 5>>`.
    fn representation(&self) -> String {
        let name = self.display_name().to_lowercase();
        let arguments = self.arguments();
        if arguments.is_empty() {
            format!("<{}>", name)
        } else {
            let rendered: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
            format!("<{} {}>", name, rendered.join(" "))
        }
    }
}

impl fmt::Debug for dyn Constraint + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.representation())
    }
}
