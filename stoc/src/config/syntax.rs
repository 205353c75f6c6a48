//! TOML-backed syntax table definitions
//!
//! Only grammar-relevant kinds are configurable: AND, OR, NOT, the brackets,
//! and the two quotes. Kinds absent from the file keep their default keyword
//! and description. Composite operators are derived from AND/OR and NOT, so
//! they take no configuration at all.
//!
//! ```toml
//! [keywords]
//! and = { keyword = "AND" }
//! or = { keyword = "OR", description = "either" }
//! not = { keyword = "NOT" }
//! ```
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grammar::TokensDefinition;
use crate::tokens::TokenKind;

/// Errors raised while loading a syntax configuration.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxConfigError {
    #[error("could not read syntax configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse syntax configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Grammar keywords must be non-empty; an empty keyword would match at
    /// every position and break lexing.
    #[error("keyword for {kind} must not be empty")]
    EmptyKeyword { kind: TokenKind },
}

/// One kind's entry in the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordSpec {
    pub keyword: String,

    /// Description used in diagnostics; defaults per kind when omitted
    pub description: Option<String>,
}

/// Keyword overrides, one optional entry per configurable kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordOverrides {
    pub and: Option<KeywordSpec>,
    pub or: Option<KeywordSpec>,
    pub not: Option<KeywordSpec>,
    pub left_bracket: Option<KeywordSpec>,
    pub right_bracket: Option<KeywordSpec>,
    pub single_quote: Option<KeywordSpec>,
    pub double_quote: Option<KeywordSpec>,
}

/// A syntax table declared in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    pub keywords: KeywordOverrides,
}

impl SyntaxConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, SyntaxConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SyntaxConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Build the definition table: defaults overlaid with the file's entries.
    pub fn to_definitions(&self) -> TokensDefinition {
        let mut builder = TokensDefinition::builder()
            .define(TokenKind::And, "&", "and")
            .define(TokenKind::Or, "|", "or")
            .define(TokenKind::Not, "!", "not")
            .define(TokenKind::AndNot, "&!", "and not")
            .define(TokenKind::OrNot, "|!", "or not")
            .define(TokenKind::True, "True", "true")
            .define(TokenKind::LeftBracket, "(", "left bracket")
            .define(TokenKind::RightBracket, ")", "right bracket")
            .define(TokenKind::EndOfLine, "\n", "end of line")
            .define(TokenKind::Expression, "", "expression")
            .define(TokenKind::DoubleQuote, "\"", "double inverted comma")
            .define(TokenKind::SingleQuote, "'", "single inverted comma")
            .define(TokenKind::Unknown, "", "unknown");

        for (kind, spec, fallback) in self.entries() {
            if let Some(spec) = spec {
                let description = spec.description.as_deref().unwrap_or(fallback);
                builder = builder.define(kind, &spec.keyword, description);
            }
        }

        builder.finalise()
    }

    fn validate(&self) -> Result<(), SyntaxConfigError> {
        for (kind, spec, _) in self.entries() {
            if let Some(spec) = spec {
                if spec.keyword.is_empty() {
                    return Err(SyntaxConfigError::EmptyKeyword { kind });
                }
            }
        }
        Ok(())
    }

    fn entries(&self) -> [(TokenKind, Option<&KeywordSpec>, &'static str); 7] {
        let k = &self.keywords;
        [
            (TokenKind::And, k.and.as_ref(), "and"),
            (TokenKind::Or, k.or.as_ref(), "or"),
            (TokenKind::Not, k.not.as_ref(), "not"),
            (TokenKind::LeftBracket, k.left_bracket.as_ref(), "left bracket"),
            (TokenKind::RightBracket, k.right_bracket.as_ref(), "right bracket"),
            (TokenKind::SingleQuote, k.single_quote.as_ref(), "single inverted comma"),
            (TokenKind::DoubleQuote, k.double_quote.as_ref(), "double inverted comma"),
        ]
    }
}
