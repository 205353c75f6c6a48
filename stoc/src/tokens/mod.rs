//! Token model for the stoc compiler
//!
//! Tokens are the currency between the compiler stages: the lexer emits an
//! infix sequence, the shunting-yard converter reorders it into postfix, and
//! the evaluator consumes the postfix form.

pub mod prepared;
pub mod token;

pub use prepared::{PreparedTokens, PreparedTokensError};
pub(crate) use prepared::validate_postfix;
pub use token::{Token, TokenKind};

use crate::utils::Spanned;

/// A token paired with its source span in the condition string.
pub type SpannedToken = Spanned<Token>;
