//! Lexical analysis errors

use crate::logging::{codes, Code};

/// Errors raised while lexing a condition.
///
/// Lexing stops at the first invalid code point; positions are 0-based
/// code-point offsets into the condition string. The expected/found names
/// come from the active definition table's descriptions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("empty search condition")]
    EmptyCondition,

    #[error("{expected} expected, instead found {found} at offset {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },
}

impl LexError {
    /// Offset of the failure in the condition string
    pub fn position(&self) -> usize {
        match self {
            LexError::EmptyCondition => 0,
            LexError::UnexpectedToken { position, .. } => *position,
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            LexError::EmptyCondition => codes::lexical::EMPTY_CONDITION,
            LexError::UnexpectedToken { .. } => codes::lexical::UNEXPECTED_TOKEN,
        }
    }
}
