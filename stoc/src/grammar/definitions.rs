//! Token definition tables: the pluggable syntax layer of the compiler
//!
//! A definition table binds each token kind to a concrete keyword and a
//! human description. The lexer only ever sees the `SyntaxDefinitions`
//! trait, so a custom syntax is just another concrete table.
//!
//! Composite operators (ANDNOT/ORNOT) are always derived compositionally
//! from the AND/OR and NOT keywords of the active table; their own keyword
//! entries are descriptive only and never looked up during lexing. A custom
//! syntax therefore only needs to choose keywords for AND, OR, NOT, the
//! brackets, and the two quotes.
use crate::tokens::TokenKind;
use crate::utils::{is_whitespace_at, starts_with_at};

/// A single kind's configuration: its keyword and description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenInfo {
    keyword: Vec<char>,
    description: String,
}

impl TokenInfo {
    fn new(keyword: &str, description: &str) -> Self {
        Self {
            keyword: keyword.chars().collect(),
            description: description.to_string(),
        }
    }

    /// Keyword length in code points
    pub fn len(&self) -> usize {
        self.keyword.len()
    }

    /// True if this kind has no keyword
    pub fn is_empty(&self) -> bool {
        self.keyword.is_empty()
    }
}

/// Capability bundle the lexer consumes: keyword predicates plus lookups.
///
/// Every predicate asks whether `input[index..]` starts with the keyword of
/// a given kind; keyword lengths let callers advance past a match.
pub trait SyntaxDefinitions {
    fn is_and(&self, input: &[char], index: usize) -> bool;
    fn and_len(&self) -> usize;

    fn is_or(&self, input: &[char], index: usize) -> bool;
    fn or_len(&self) -> usize;

    fn is_not(&self, input: &[char], index: usize) -> bool;
    fn not_len(&self) -> usize;

    fn is_left_bracket(&self, input: &[char], index: usize) -> bool;
    fn left_bracket_len(&self) -> usize;

    fn is_right_bracket(&self, input: &[char], index: usize) -> bool;
    fn right_bracket_len(&self) -> usize;

    fn is_single_quote(&self, input: &[char], index: usize) -> bool;
    fn single_quote_len(&self) -> usize;

    fn is_double_quote(&self, input: &[char], index: usize) -> bool;
    fn double_quote_len(&self) -> usize;

    /// Human description of a kind, used in diagnostics
    fn describe(&self, kind: TokenKind) -> &str;

    /// Either quote kind matches at `index`
    fn is_quote(&self, input: &[char], index: usize) -> bool {
        self.is_single_quote(input, index) || self.is_double_quote(input, index)
    }

    /// Either plain binary operator matches at `index`
    fn is_associative_op(&self, input: &[char], index: usize) -> bool {
        self.is_or(input, index) || self.is_and(input, index)
    }

    /// Any grammar keyword matches at `index` (quotes are not keywords)
    fn is_keyword(&self, input: &[char], index: usize) -> bool {
        self.is_or(input, index)
            || self.is_and(input, index)
            || self.is_left_bracket(input, index)
            || self.is_right_bracket(input, index)
            || self.is_not(input, index)
    }

    /// True unless whitespace or a grammar keyword matches at `index`
    fn is_expression_char(&self, input: &[char], index: usize) -> bool {
        !(is_whitespace_at(input, index) || self.is_keyword(input, index))
    }
}

/// A frozen definition table: one `TokenInfo` per kind.
///
/// Field-per-kind rather than a map keyed by `TokenKind`, so a table cannot
/// be constructed with a kind missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokensDefinition {
    and: TokenInfo,
    or: TokenInfo,
    not: TokenInfo,
    and_not: TokenInfo,
    or_not: TokenInfo,
    truth: TokenInfo,
    left_bracket: TokenInfo,
    right_bracket: TokenInfo,
    end_of_line: TokenInfo,
    expression: TokenInfo,
    double_quote: TokenInfo,
    single_quote: TokenInfo,
    unknown: TokenInfo,
}

impl TokensDefinition {
    /// Start building a custom table. All keywords and descriptions begin
    /// empty; define every grammar-relevant kind before `finalise`.
    pub fn builder() -> TokensDefinitionBuilder {
        TokensDefinitionBuilder::default()
    }

    fn info(&self, kind: TokenKind) -> &TokenInfo {
        match kind {
            TokenKind::And => &self.and,
            TokenKind::Or => &self.or,
            TokenKind::Not => &self.not,
            TokenKind::AndNot => &self.and_not,
            TokenKind::OrNot => &self.or_not,
            TokenKind::True => &self.truth,
            TokenKind::LeftBracket => &self.left_bracket,
            TokenKind::RightBracket => &self.right_bracket,
            TokenKind::EndOfLine => &self.end_of_line,
            TokenKind::Expression => &self.expression,
            TokenKind::DoubleQuote => &self.double_quote,
            TokenKind::SingleQuote => &self.single_quote,
            TokenKind::Unknown => &self.unknown,
        }
    }
}

impl Default for TokensDefinition {
    /// The default syntax: `&`, `|`, `!`, `(`, `)`, `"`, `'`.
    ///
    /// This chain is also the reference for defining custom tables.
    fn default() -> Self {
        TokensDefinitionBuilder::default()
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
            .define(TokenKind::Unknown, "", "unknown")
            .finalise()
    }
}

impl SyntaxDefinitions for TokensDefinition {
    fn is_and(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.and.keyword)
    }

    fn and_len(&self) -> usize {
        self.and.len()
    }

    fn is_or(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.or.keyword)
    }

    fn or_len(&self) -> usize {
        self.or.len()
    }

    fn is_not(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.not.keyword)
    }

    fn not_len(&self) -> usize {
        self.not.len()
    }

    fn is_left_bracket(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.left_bracket.keyword)
    }

    fn left_bracket_len(&self) -> usize {
        self.left_bracket.len()
    }

    fn is_right_bracket(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.right_bracket.keyword)
    }

    fn right_bracket_len(&self) -> usize {
        self.right_bracket.len()
    }

    fn is_single_quote(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.single_quote.keyword)
    }

    fn single_quote_len(&self) -> usize {
        self.single_quote.len()
    }

    fn is_double_quote(&self, input: &[char], index: usize) -> bool {
        starts_with_at(input, index, &self.double_quote.keyword)
    }

    fn double_quote_len(&self) -> usize {
        self.double_quote.len()
    }

    fn describe(&self, kind: TokenKind) -> &str {
        &self.info(kind).description
    }
}

/// Builder for custom definition tables.
///
/// `define` calls chain; `finalise` freezes the result. Kinds left undefined
/// keep an empty keyword and can never match, so every grammar-relevant kind
/// (AND, OR, NOT, both brackets, both quotes) needs a non-empty keyword for
/// the table to be usable. The ANDNOT/ORNOT entries are descriptive only.
#[derive(Debug, Clone, Default)]
pub struct TokensDefinitionBuilder {
    table: Option<TokensDefinition>,
}

impl TokensDefinitionBuilder {
    fn table_mut(&mut self) -> &mut TokensDefinition {
        self.table.get_or_insert_with(TokensDefinition::empty)
    }

    /// Set one kind's keyword and description.
    pub fn define(mut self, kind: TokenKind, keyword: &str, description: &str) -> Self {
        let info = TokenInfo::new(keyword, description);
        let table = self.table_mut();
        match kind {
            TokenKind::And => table.and = info,
            TokenKind::Or => table.or = info,
            TokenKind::Not => table.not = info,
            TokenKind::AndNot => table.and_not = info,
            TokenKind::OrNot => table.or_not = info,
            TokenKind::True => table.truth = info,
            TokenKind::LeftBracket => table.left_bracket = info,
            TokenKind::RightBracket => table.right_bracket = info,
            TokenKind::EndOfLine => table.end_of_line = info,
            TokenKind::Expression => table.expression = info,
            TokenKind::DoubleQuote => table.double_quote = info,
            TokenKind::SingleQuote => table.single_quote = info,
            TokenKind::Unknown => table.unknown = info,
        }
        self
    }

    /// Freeze the table.
    pub fn finalise(self) -> TokensDefinition {
        self.table.unwrap_or_else(TokensDefinition::empty)
    }
}

impl TokensDefinition {
    fn empty() -> Self {
        Self {
            and: TokenInfo::default(),
            or: TokenInfo::default(),
            not: TokenInfo::default(),
            and_not: TokenInfo::default(),
            or_not: TokenInfo::default(),
            truth: TokenInfo::default(),
            left_bracket: TokenInfo::default(),
            right_bracket: TokenInfo::default(),
            end_of_line: TokenInfo::default(),
            expression: TokenInfo::default(),
            double_quote: TokenInfo::default(),
            single_quote: TokenInfo::default(),
            unknown: TokenInfo::default(),
        }
    }
}
