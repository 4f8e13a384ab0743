//! Expression operators and their precedences.
//!
//! Each operator carries a left and a right precedence; lower binds
//! tighter. While resolving, an operator on the stack is reduced as long as
//! its right precedence is lower than the incoming operator's left
//! precedence. Equal precedences do not reduce, so `X.Or.Y.Or.Z` groups as
//! `X or (Y or Z)`.
//!
//! | Operator | Left | Right |
//! |---|---|---|
//! | `Not` | 1 | 1 |
//! | `All`, `Some`, `None`, `Exactly(n)` | 1 | 10 |
//! | `With` | 1 | 4 |
//! | `And` | 2 | 2 |
//! | `Or` | 3 | 3 |
//!
//! A quantifier's high right precedence makes it scope over the rest of the
//! expression: `All.X.Or.Y` is `All(X or Y)`. A binary operator whose right
//! operand starts with a quantifier gets 10 added to both precedences, so
//! `X.And.All.Y` is `X and All(Y)`.

use std::fmt;
use std::sync::Arc;

use matchforge_core::{MatchError, Result};

use crate::combinators::{AndConstraint, ItemsConstraint, NotConstraint, OrConstraint, Quantifier};
use crate::constraint::SharedConstraint;

use super::builder::Token;

/// An operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not,
    All,
    Some,
    None,
    Exactly(usize),
    /// Identity prefix; reads well before a nested constraint.
    With,
    And,
    Or,
}

impl Operator {
    /// Prefix operators take one operand to their right.
    pub fn is_prefix(self) -> bool {
        !self.is_binary()
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }

    pub fn is_quantifier(self) -> bool {
        matches!(
            self,
            Operator::All | Operator::Some | Operator::None | Operator::Exactly(_)
        )
    }

    fn base_precedence(self) -> (u8, u8) {
        match self {
            Operator::Not => (1, 1),
            Operator::All | Operator::Some | Operator::None | Operator::Exactly(_) => (1, 10),
            Operator::With => (1, 4),
            Operator::And => (2, 2),
            Operator::Or => (3, 3),
        }
    }

    /// Left and right precedence given the token that follows this operator.
    pub(crate) fn precedence(self, next: Option<&Token>) -> (u8, u8) {
        let (left, right) = self.base_precedence();
        match next {
            Some(Token::Operator(op)) if self.is_binary() && op.is_quantifier() => {
                (left + 10, right + 10)
            }
            _ => (left, right),
        }
    }

    /// Pops this operator's operands from `stack` and pushes the combined
    /// constraint.
    pub(crate) fn reduce(self, stack: &mut Vec<SharedConstraint>) -> Result<()> {
        let operand = stack
            .pop()
            .ok_or_else(|| missing_operand(self))?;
        let reduced: SharedConstraint = match self {
            Operator::Not => Arc::new(NotConstraint::new(operand)),
            Operator::All => Arc::new(ItemsConstraint::new(Quantifier::All, operand)),
            Operator::Some => Arc::new(ItemsConstraint::new(Quantifier::Some, operand)),
            Operator::None => Arc::new(ItemsConstraint::new(Quantifier::None, operand)),
            Operator::Exactly(count) => Arc::new(ItemsConstraint::exactly(count, operand)?),
            Operator::With => operand,
            Operator::And | Operator::Or => {
                let left = stack.pop().ok_or_else(|| missing_operand(self))?;
                if self == Operator::And {
                    Arc::new(AndConstraint::new(left, operand))
                } else {
                    Arc::new(OrConstraint::new(left, operand))
                }
            }
        };
        stack.push(reduced);
        Ok(())
    }
}

fn missing_operand(op: Operator) -> MatchError {
    MatchError::construction(format!("{} is missing an operand", op))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Not => write!(f, "Not"),
            Operator::All => write!(f, "All"),
            Operator::Some => write!(f, "Some"),
            Operator::None => write!(f, "None"),
            Operator::Exactly(n) => write!(f, "Exactly({})", n),
            Operator::With => write!(f, "With"),
            Operator::And => write!(f, "And"),
            Operator::Or => write!(f, "Or"),
        }
    }
}
