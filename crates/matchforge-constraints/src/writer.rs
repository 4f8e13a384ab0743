//! Failure message rendering.
//!
//! Rendering is a pure function of a [`ConstraintResult`]: nothing is
//! re-applied, so a message can be produced long after evaluation.

use matchforge_core::Value;

use crate::result::{ConstraintResult, ResultContext};

const EXPECTED: &str = "  Expected: ";
const BUT_WAS: &str = "  But was:  ";
const ELLIPSIS: &str = "...";

/// Limits applied while rendering values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterSettings {
    /// Rendered values longer than this are clipped with `...`.
    pub max_line_length: usize,
    /// Sequences show at most this many items.
    pub max_items: usize,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            max_line_length: 100,
            max_items: 10,
        }
    }
}

/// Renders failed results as multi-line messages.
///
/// # Example
///
/// ```
/// use matchforge_constraints::{Has, MessageWriter, ResolveConstraint};
/// use matchforge_core::Value;
///
/// let root = Has::all().less_than(5).resolve().unwrap();
/// let result = root.apply(&Value::from(vec![1, 7, 3])).unwrap();
///
/// let message = MessageWriter::default().write(&result);
/// assert_eq!(
///     message,
///     "  Expected: all items less than 5\n  But was:  < 1, 7, 3 >\n  First non-matching item at index [1]:  7"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageWriter {
    settings: WriterSettings,
}

impl MessageWriter {
    pub fn new(settings: WriterSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    /// Renders `result`, one line per fact, joined with newlines.
    pub fn write(&self, result: &ConstraintResult<'_>) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{}{}", EXPECTED, result.description()));
        lines.push(format!("{}{}", BUT_WAS, self.format_value(result.actual())));
        self.write_context(result.context(), &mut lines);
        lines.join("\n")
    }

    fn write_context(&self, context: &ResultContext<'_>, lines: &mut Vec<String>) {
        match context {
            ResultContext::None => {}
            ResultContext::FailingItem { index, item } => {
                lines.push(format!(
                    "  First non-matching item at index [{}]:  {}",
                    index,
                    self.format_value(item)
                ));
            }
            ResultContext::MatchSummary { count, items, .. } => {
                lines.push(format!("  Match count: {}", count));
                if !items.is_empty() {
                    lines.push(format!(
                        "  Matching items: {}",
                        self.format_captured(items, *count)
                    ));
                }
            }
            ResultContext::Nested(child) => {
                lines.push(format!("  Failed on: {}", child.description()));
                self.write_context(child.context(), lines);
            }
        }
    }

    /// Formats a value under the configured limits.
    pub fn format_value(&self, value: &Value) -> String {
        let rendered = match value.unwrapped() {
            Value::List(sequence) => sequence.format_limited(self.settings.max_items),
            other => other.to_string(),
        };
        self.clip(rendered)
    }

    fn format_captured(&self, items: &[Value], count: usize) -> String {
        let mut parts: Vec<String> = items
            .iter()
            .take(self.settings.max_items)
            .map(|item| self.format_value(item))
            .collect();
        if count > parts.len() {
            parts.push(ELLIPSIS.to_string());
        }
        format!("< {} >", parts.join(", "))
    }

    fn clip(&self, rendered: String) -> String {
        let max = self.settings.max_line_length;
        if rendered.chars().count() <= max {
            return rendered;
        }
        let keep = max.saturating_sub(ELLIPSIS.len());
        let mut clipped: String = rendered.chars().take(keep).collect();
        clipped.push_str(ELLIPSIS);
        clipped
    }
}
