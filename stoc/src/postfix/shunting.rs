//! Infix-to-postfix conversion
//!
//! A shunting-yard pass specialised to this grammar: operands flow straight
//! to the output, operators wait on a stack, brackets fence operator groups.
//! All binary operators share one precedence level and associate left, so an
//! incoming operator first flushes every stacked operator before pushing.
//!
//! Bracket errors carry the code-point offset of the offending bracket in
//! the source condition, taken from the lexer's spans.
use crate::logging::codes;
use crate::tokens::{validate_postfix, PreparedTokens, SpannedToken, Token, TokenKind};
use crate::utils::last_index_of;
use crate::{log_debug, log_error};

/// Bracket-balance errors raised during conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShuntingError {
    /// A right bracket closed a group that was never opened.
    #[error("missing right bracket at offset {position}")]
    MissingRightBracket { position: usize },

    /// A bracket was left unmatched when the condition ended.
    #[error("mismatched brackets at offset {position}")]
    MismatchedBrackets { position: usize },
}

impl ShuntingError {
    /// Code-point offset of the offending bracket
    pub fn position(&self) -> usize {
        match self {
            Self::MissingRightBracket { position } => *position,
            Self::MismatchedBrackets { position } => *position,
        }
    }

    pub(crate) fn error_code(&self) -> codes::Code {
        match self {
            Self::MissingRightBracket { .. } => codes::shunting::MISSING_RIGHT_BRACKET,
            Self::MismatchedBrackets { .. } => codes::shunting::MISMATCHED_BRACKETS,
        }
    }
}

/// Convert a lexed infix sequence into its postfix form.
pub fn to_postfix(tokens: &[SpannedToken]) -> Result<PreparedTokens, ShuntingError> {
    log_debug!("Starting postfix conversion", "token_count" => tokens.len());

    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<&SpannedToken> = Vec::new();

    for spanned in tokens {
        let kind = spanned.value.kind;
        if kind.is_operand() {
            output.push(spanned.value.clone());
        } else if kind.is_op() {
            while let Some(top) = operators.last() {
                if !(top.value.kind.is_left_associative() || top.value.kind.is_complex_op()) {
                    break;
                }
                output.push(top.value.clone());
                operators.pop();
            }
            operators.push(spanned);
        } else if kind == TokenKind::LeftBracket {
            operators.push(spanned);
        } else if kind == TokenKind::RightBracket {
            while let Some(top) = operators.last() {
                if top.value.kind == TokenKind::LeftBracket {
                    break;
                }
                output.push(top.value.clone());
                operators.pop();
            }

            // stack ran out before a left bracket turned up
            if operators.pop().is_none() {
                let error = ShuntingError::MissingRightBracket {
                    position: spanned.span.start,
                };
                log_error!(error.error_code(), "Postfix conversion failed",
                    "position" => error.position(),
                    "error" => error
                );
                return Err(error);
            }
        }
    }

    if operators
        .iter()
        .any(|top| top.value.kind == TokenKind::LeftBracket)
    {
        // report against the last bracket of the source sequence
        let last = last_index_of(tokens, |t| t.value.kind.is_bracket());
        let position = last.map(|i| tokens[i].span.start).unwrap_or(0);
        let error = ShuntingError::MismatchedBrackets { position };
        log_error!(error.error_code(), "Postfix conversion failed",
            "position" => error.position(),
            "error" => error
        );
        return Err(error);
    }

    while let Some(top) = operators.pop() {
        output.push(top.value.clone());
    }

    debug_assert!(validate_postfix(&output).is_ok());
    log_debug!("Postfix conversion complete", "output_count" => output.len());
    Ok(PreparedTokens::new(output))
}
