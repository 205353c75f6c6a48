//! Token kinds and tokens for the condition grammar
//!
//! The kinds are a closed set of non-binding descriptors for condition
//! syntax; the keyword each kind matches lives in the definition table, not
//! here. A token pairs a kind with the exact phrase that matched it.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of token kinds in the condition grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// End-of-input sentinel, only ever named in diagnostics
    EndOfLine,
    /// Unrecognized input, only ever named in diagnostics
    Unknown,
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Conjunction that also inverts its right operand
    AndNot,
    /// Disjunction that also inverts its right operand
    OrNot,
    /// Inversion; never survives lexing (rewritten to `True` + `AndNot`)
    Not,
    /// A literal substring to search for
    Expression,
    LeftBracket,
    RightBracket,
    /// Synthetic operand injected when `Not` appears in operand position
    True,
    DoubleQuote,
    SingleQuote,
}

impl TokenKind {
    /// Canonical kind name, as used in serialized caches and diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EndOfLine => "END_OF_LINE",
            Self::Unknown => "UNKNOWN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::AndNot => "ANDNOT",
            Self::OrNot => "ORNOT",
            Self::Not => "NOT",
            Self::Expression => "EXPRESSION",
            Self::LeftBracket => "LEFT_BRACKET",
            Self::RightBracket => "RIGHT_BRACKET",
            Self::True => "TRUE",
            Self::DoubleQuote => "DOUBLE_INVERTED_COMMA",
            Self::SingleQuote => "SINGLE_INVERTED_COMMA",
        }
    }

    /// True for the two plain binary operators, which share one precedence
    /// level and associate left to right.
    pub fn is_left_associative(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// True for any binary operator, plain or complex.
    pub fn is_op(&self) -> bool {
        self.is_left_associative() || self.is_complex_op()
    }

    /// True for a complex operator: a conjunction or disjunction that also
    /// applies an inversion to its right operand.
    pub fn is_complex_op(&self) -> bool {
        matches!(self, Self::AndNot | Self::OrNot)
    }

    /// True for any operator a following inversion could upgrade into a
    /// complex operator.
    pub fn could_be_complex_op(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }

    /// True for the kinds the converter treats as operands.
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Expression | Self::True)
    }

    /// True for either bracket kind.
    pub fn is_bracket(&self) -> bool {
        matches!(self, Self::LeftBracket | Self::RightBracket)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexed token: a kind plus the phrase that matched it.
///
/// For `Expression` tokens the text is the unquoted literal; for everything
/// else it is the exact source slice (a complex operator spans from the
/// operator keyword through the inversion keyword, whitespace included).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Create a token from a kind and its matched text
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The synthetic operand injected ahead of an operand-position inversion
    pub fn synthetic_true() -> Self {
        Self::new(TokenKind::True, "true")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_predicates_cover_the_four_operators() {
        for kind in [
            TokenKind::And,
            TokenKind::Or,
            TokenKind::AndNot,
            TokenKind::OrNot,
        ] {
            assert!(kind.is_op(), "{kind} should be an operator");
        }
        assert!(!TokenKind::Not.is_op());
        assert!(!TokenKind::Expression.is_op());
        assert!(!TokenKind::LeftBracket.is_op());
    }

    #[test]
    fn only_plain_operators_are_left_associative() {
        assert!(TokenKind::And.is_left_associative());
        assert!(TokenKind::Or.is_left_associative());
        assert!(!TokenKind::AndNot.is_left_associative());
        assert!(!TokenKind::OrNot.is_left_associative());
    }

    #[test]
    fn complex_upgrade_applies_to_plain_operators_only() {
        assert!(TokenKind::And.could_be_complex_op());
        assert!(TokenKind::Or.could_be_complex_op());
        assert!(!TokenKind::AndNot.could_be_complex_op());
        assert!(!TokenKind::Not.could_be_complex_op());
    }

    #[test]
    fn operands_are_expressions_and_true() {
        assert!(TokenKind::Expression.is_operand());
        assert!(TokenKind::True.is_operand());
        assert!(!TokenKind::And.is_operand());
    }

    #[test]
    fn synthetic_true_carries_fixed_text() {
        let token = Token::synthetic_true();
        assert_eq!(token.kind, TokenKind::True);
        assert_eq!(token.text, "true");
    }

    #[test]
    fn kind_names_match_the_grammar_vocabulary() {
        assert_eq!(TokenKind::AndNot.as_str(), "ANDNOT");
        assert_eq!(TokenKind::EndOfLine.as_str(), "END_OF_LINE");
        assert_eq!(TokenKind::SingleQuote.as_str(), "SINGLE_INVERTED_COMMA");
    }
}
