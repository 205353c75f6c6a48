//! stoc: a boolean search-condition compiler
//!
//! Compiles conditions like `(fox | dog) &! fence` into a reusable postfix
//! form and evaluates them against target strings by case-sensitive
//! substring containment. The pipeline is lexer, shunting-yard converter,
//! stack evaluator; each stage is public for callers that want to cache the
//! compiled form or plug in their own syntax.
//!
//! # Default syntax
//!
//! | keyword | meaning |
//! |---------|---------|
//! | `&`     | and |
//! | `\|`    | or |
//! | `!`     | not |
//! | `&!`, `\|!` | and not, or not |
//! | `(` `)` | grouping |
//! | `'` `"` | quoted expressions |
//!
//! Unquoted expressions run until an operator keyword or bracket, with
//! trailing whitespace trimmed; quoted expressions may contain keywords.
//!
//! # Precedence
//!
//! All binary operators share a single precedence level and associate left:
//! `a | b & c` means `(a | b) & c`, not `a | (b & c)`. Use brackets for any
//! other grouping.
//!
//! # One-shot and compiled use
//!
//! ```
//! let target = "The lazy fox jumped over the fence";
//! assert!(stoc::search("fox & fence", target).unwrap());
//!
//! // compile once, evaluate per target
//! let defs = stoc::TokensDefinition::default();
//! let prepared = stoc::compile(&defs, "fox &! wall").unwrap();
//! assert!(stoc::evaluate(&prepared, target));
//! assert!(!stoc::evaluate(&prepared, "a wall"));
//! ```
//!
//! # Custom syntax
//!
//! A [`TokensDefinition`] rebinds the keywords; the grammar itself is fixed.
//! ANDNOT and ORNOT are always recognised compositionally from the AND/OR
//! and NOT keywords, so a custom table never defines them directly.
//!
//! ```
//! use stoc::{TokenKind, TokensDefinition};
//!
//! let defs = TokensDefinition::builder()
//!     .define(TokenKind::And, "AND", "and")
//!     .define(TokenKind::Or, "OR", "or")
//!     .define(TokenKind::Not, "NOT", "not")
//!     .define(TokenKind::LeftBracket, "(", "left bracket")
//!     .define(TokenKind::RightBracket, ")", "right bracket")
//!     .define(TokenKind::SingleQuote, "'", "single inverted comma")
//!     .define(TokenKind::DoubleQuote, "\"", "double inverted comma")
//!     .finalise();
//! assert!(stoc::search_custom(&defs, "lazy AND NOT wall", "a lazy fox").unwrap());
//! ```

#[macro_use]
pub mod logging;

pub mod config;
pub mod grammar;
pub mod lexical;
pub mod pipeline;
pub mod postfix;
pub mod tokens;
pub mod utils;

pub use config::{SyntaxConfig, SyntaxConfigError};
pub use grammar::{SyntaxDefinitions, TokensDefinition, TokensDefinitionBuilder};
pub use lexical::LexError;
pub use pipeline::{compile, evaluate, search, search_custom, SearchError};
pub use postfix::ShuntingError;
pub use tokens::{PreparedTokens, PreparedTokensError, Token, TokenKind};
