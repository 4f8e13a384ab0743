//! Token accumulation and resolution.

use std::fmt;
use std::sync::OnceLock;

use matchforge_core::{MatchError, Result};
use tracing::debug;

use super::operator::Operator;
use crate::constraint::SharedConstraint;

/// One element of an expression.
#[derive(Clone)]
pub enum Token {
    Operator(Operator),
    Operand(SharedConstraint),
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operator(op) => write!(f, "{}", op),
            Token::Operand(c) => f.write_str(&c.representation()),
        }
    }
}

/// Lifecycle of an [`ExpressionBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Accumulating,
    Resolved,
}

/// An ordered token list that resolves to a single constraint tree.
///
/// Operators and operands must alternate: a prefix operator or an operand
/// is accepted where an operand is expected, a binary operator only after
/// an operand. Resolution caches the root, so resolving again returns the
/// same tree; once resolved, the token list is frozen.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use matchforge_constraints::expression::{ExpressionBuilder, Operator};
/// use matchforge_constraints::leaf::EqualConstraint;
///
/// let mut builder = ExpressionBuilder::new();
/// builder.append_operator(Operator::Not).unwrap();
/// builder.append_operand(Arc::new(EqualConstraint::new(5))).unwrap();
/// builder.append_operator(Operator::Or).unwrap();
/// builder.append_operand(Arc::new(EqualConstraint::new(6))).unwrap();
///
/// let root = builder.resolve().unwrap();
/// assert_eq!(root.description(), "not 5 or 6");
/// assert_eq!(root.representation(), "<or <not <equal 5>> <equal 6>>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpressionBuilder {
    tokens: Vec<Token>,
    resolved: OnceLock<SharedConstraint>,
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BuilderState {
        if self.resolved.get().is_some() {
            BuilderState::Resolved
        } else if self.tokens.is_empty() {
            BuilderState::Empty
        } else {
            BuilderState::Accumulating
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns true when the next token must be an operand or a prefix
    /// operator.
    pub fn expects_operand(&self) -> bool {
        !matches!(self.tokens.last(), Some(Token::Operand(_)))
    }

    /// Appends an operator.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] when the builder is resolved,
    /// when the operator is out of sequence, or for `Exactly(0)`.
    pub fn append_operator(&mut self, op: Operator) -> Result<()> {
        self.ensure_open()?;
        if op == Operator::Exactly(0) {
            return Err(MatchError::construction(
                "Exactly requires a count of at least one",
            ));
        }
        if op.is_prefix() != self.expects_operand() {
            return Err(MatchError::construction(format!(
                "{} cannot follow {}",
                op,
                self.tail_description()
            )));
        }
        self.tokens.push(Token::Operator(op));
        Ok(())
    }

    /// Appends an operand.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] when the builder is resolved or
    /// the tail is already an operand.
    pub fn append_operand(&mut self, constraint: SharedConstraint) -> Result<()> {
        self.ensure_open()?;
        if !self.expects_operand() {
            return Err(MatchError::construction(format!(
                "{} cannot follow {}",
                constraint.representation(),
                self.tail_description()
            )));
        }
        self.tokens.push(Token::Operand(constraint));
        Ok(())
    }

    /// Swaps the most recent operand for `constraint`, returning the old one.
    ///
    /// Only the tail slot is touched; earlier tokens are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] when the builder is resolved or
    /// the tail is not an operand.
    pub fn replace_tail(&mut self, constraint: SharedConstraint) -> Result<SharedConstraint> {
        self.ensure_open()?;
        match self.tokens.last_mut() {
            Some(Token::Operand(tail)) => Ok(std::mem::replace(tail, constraint)),
            _ => Err(MatchError::construction(
                "there is no operand to replace at the end of the expression",
            )),
        }
    }

    /// The most recent operand, if the tail is one.
    pub fn tail(&self) -> Option<&SharedConstraint> {
        match self.tokens.last() {
            Some(Token::Operand(tail)) => Some(tail),
            _ => None,
        }
    }

    /// Resolves the token list into one constraint tree.
    ///
    /// The first call builds and caches the tree; later calls return it.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Construction`] for an empty expression or one
    /// that ends in an operator.
    pub fn resolve(&self) -> Result<SharedConstraint> {
        if let Some(root) = self.resolved.get() {
            return Ok(root.clone());
        }
        let root = self.reduce_tokens()?;
        debug!(
            tokens = self.tokens.len(),
            root = root.display_name(),
            "resolved expression"
        );
        Ok(self.resolved.get_or_init(|| root).clone())
    }

    /// Appends without sequence checks. The fluent types guarantee
    /// alternation statically; a previously cached root is discarded.
    pub(crate) fn push(&mut self, token: Token) {
        debug_assert_eq!(
            match &token {
                Token::Operand(_) => true,
                Token::Operator(op) => op.is_prefix(),
            },
            self.expects_operand()
        );
        self.resolved = OnceLock::new();
        self.tokens.push(token);
    }

    /// Fluent counterpart of [`replace_tail`](Self::replace_tail).
    pub(crate) fn set_tail(&mut self, constraint: SharedConstraint) {
        self.resolved = OnceLock::new();
        if let Some(Token::Operand(tail)) = self.tokens.last_mut() {
            *tail = constraint;
        }
    }

    fn reduce_tokens(&self) -> Result<SharedConstraint> {
        if self.tokens.is_empty() {
            return Err(MatchError::construction("an empty expression cannot be resolved"));
        }
        if self.expects_operand() {
            return Err(MatchError::construction(format!(
                "the expression ends with {} and needs an operand",
                self.tail_description()
            )));
        }

        let mut operators: Vec<(Operator, u8)> = Vec::new();
        let mut operands: Vec<SharedConstraint> = Vec::new();

        for (index, token) in self.tokens.iter().enumerate() {
            match token {
                Token::Operand(constraint) => operands.push(constraint.clone()),
                Token::Operator(op) => {
                    let (left, right) = op.precedence(self.tokens.get(index + 1));
                    while let Some(&(top, top_right)) = operators.last() {
                        if top_right >= left {
                            break;
                        }
                        operators.pop();
                        top.reduce(&mut operands)?;
                    }
                    operators.push((*op, right));
                }
            }
        }
        while let Some((op, _)) = operators.pop() {
            op.reduce(&mut operands)?;
        }

        match (operands.pop(), operands.is_empty()) {
            (Some(root), true) => Ok(root),
            _ => Err(MatchError::construction(
                "the expression did not reduce to a single constraint",
            )),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.resolved.get().is_some() {
            return Err(MatchError::construction(
                "the expression is already resolved",
            ));
        }
        Ok(())
    }

    fn tail_description(&self) -> String {
        match self.tokens.last() {
            None => "the start of the expression".to_string(),
            Some(Token::Operator(op)) => op.to_string(),
            Some(Token::Operand(c)) => c.representation(),
        }
    }
}
