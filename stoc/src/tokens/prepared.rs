//! Compiled, reusable postfix token sequences
//!
//! A `PreparedTokens` is the output of the compile phase: an opaque postfix
//! sequence that can be evaluated against arbitrarily many targets without
//! re-lexing the condition. It is also the cacheable form; JSON round-trips
//! re-validate the operator/operand arity so a tampered or truncated cache
//! can never reach the evaluator.
use serde::{Deserialize, Serialize};

use super::token::{Token, TokenKind};

/// Errors raised when reconstructing a prepared sequence from a cache.
#[derive(Debug, thiserror::Error)]
pub enum PreparedTokensError {
    #[error("malformed postfix sequence: {reason} at token index {index}")]
    MalformedPostfix { reason: &'static str, index: usize },

    #[error("prepared tokens cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An immutable postfix token sequence produced by the compile phase.
///
/// Reading left to right, every operator has exactly two operands already
/// produced before it; the evaluator relies on that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedTokens(Vec<Token>);

impl PreparedTokens {
    /// Wrap a converter-produced postfix sequence.
    ///
    /// Crate-internal: the only public ways to obtain a `PreparedTokens` are
    /// the compile entry points and `from_json`, both of which uphold the
    /// arity invariant.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// The postfix sequence, in evaluation order.
    pub(crate) fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Number of tokens in the sequence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the sequence holds no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to JSON for caching.
    pub fn to_json(&self) -> Result<String, PreparedTokensError> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Reconstruct from a JSON cache, re-validating the postfix arity.
    pub fn from_json(json: &str) -> Result<Self, PreparedTokensError> {
        let tokens: Vec<Token> = serde_json::from_str(json)?;
        validate_postfix(&tokens)?;
        Ok(Self(tokens))
    }
}

impl IntoIterator for PreparedTokens {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Check that a token sequence is a well-formed postfix form: operands and
/// binary operators only, every operator finding two operands on the stack,
/// and exactly one value left at the end.
pub(crate) fn validate_postfix(tokens: &[Token]) -> Result<(), PreparedTokensError> {
    let mut depth: usize = 0;
    for (index, token) in tokens.iter().enumerate() {
        if token.kind.is_operand() {
            depth += 1;
        } else if token.kind.is_op() {
            if depth < 2 {
                return Err(PreparedTokensError::MalformedPostfix {
                    reason: "operator is missing an operand",
                    index,
                });
            }
            depth -= 1;
        } else {
            return Err(PreparedTokensError::MalformedPostfix {
                reason: "kind is not valid in postfix form",
                index,
            });
        }
    }
    if depth != 1 {
        return Err(PreparedTokensError::MalformedPostfix {
            reason: "sequence does not reduce to a single value",
            index: tokens.len(),
        });
    }
    Ok(())
}
