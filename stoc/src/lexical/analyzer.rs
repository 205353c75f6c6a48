//! The condition lexer: a state machine over code points
//!
//! Grammar: `term := NOT term | '(' term ')' | expr (op term)?` with
//! `op := AND | OR | AND NOT | OR NOT`. Each state lexes one token and names
//! the states allowed to follow it; anything else aborts the scan with a
//! positioned error and the collected tokens are discarded.
//!
//! Inversion never reaches later stages as a unary operator. In operand
//! position `!X` is rewritten to `true ANDNOT X` (a synthetic `True` operand
//! followed by a synthetic `AndNot`); after AND/OR, a following NOT keyword
//! upgrades the operator to ANDNOT/ORNOT. The converter and evaluator
//! therefore only ever see binary operators.

use crate::grammar::SyntaxDefinitions;
use crate::lexical::error::LexError;
use crate::tokens::{SpannedToken, Token, TokenKind};
use crate::utils::{is_whitespace_at, skip_whitespace, Span, Spanned};
use crate::{log_debug, log_error};

/// Lexer states. Each maps to one handler of `(definitions, input, index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// Entry dispatch: expression, left bracket, or operand-position NOT
    Start,
    Expression,
    LeftBracket,
    RightBracket,
    Operator,
    /// Emit the synthetic `True` operand ahead of an operand-position NOT
    TrueBeforeNot,
    /// Emit the synthetic `AndNot` for an operand-position NOT
    NotOperator,
}

/// One state transition: the lexed token, where scanning resumes, and the
/// follow state (`None` terminates the scan).
struct Step {
    next_index: usize,
    token: SpannedToken,
    next_state: Option<LexState>,
}

enum QuoteKind {
    Single,
    Double,
}

/// Lexes conditions against one definition table.
pub struct LexicalAnalyzer<'a, D: SyntaxDefinitions + ?Sized> {
    defs: &'a D,
}

impl<'a, D: SyntaxDefinitions + ?Sized> LexicalAnalyzer<'a, D> {
    pub fn new(defs: &'a D) -> Self {
        Self { defs }
    }

    /// Lex `condition` into its infix token sequence.
    ///
    /// Fails on empty input and at the first grammar violation; leading
    /// whitespace is skipped before the start state runs.
    pub fn tokenize(&self, condition: &str) -> Result<Vec<SpannedToken>, LexError> {
        let raw: Vec<char> = condition.chars().collect();
        log_debug!("Starting lexical analysis", "char_count" => raw.len());

        if raw.is_empty() {
            let error = LexError::EmptyCondition;
            log_error!(error.error_code(), "Lexical analysis failed", "error" => error);
            return Err(error);
        }

        let mut tokens = Vec::new();
        let mut index = skip_whitespace(&raw, 0);
        let mut state = Some(LexState::Start);

        while let Some(current) = state {
            let step = self.step(current, &raw, index).map_err(|error| {
                log_error!(error.error_code(), "Lexical analysis failed",
                    "position" => error.position(),
                    "error" => error
                );
                error
            })?;
            index = step.next_index;
            tokens.push(step.token);
            state = step.next_state;
        }

        log_debug!("Lexical analysis complete", "token_count" => tokens.len());
        Ok(tokens)
    }

    fn step(&self, state: LexState, raw: &[char], index: usize) -> Result<Step, LexError> {
        match state {
            LexState::Start => self.lex_start(raw, index),
            LexState::Expression => self.lex_expression(raw, index),
            LexState::LeftBracket => self.lex_left_bracket(raw, index),
            LexState::RightBracket => self.lex_right_bracket(raw, index),
            LexState::Operator => self.lex_operator(raw, index),
            LexState::TrueBeforeNot => Ok(Self::true_step(index)),
            LexState::NotOperator => self.lex_not_operator(raw, index),
        }
    }

    /// Entry dispatch. Valid starts: left bracket, expression, or NOT.
    fn lex_start(&self, raw: &[char], index: usize) -> Result<Step, LexError> {
        if self.defs.is_left_bracket(raw, index) {
            self.lex_left_bracket(raw, index)
        } else if self.defs.is_expression_char(raw, index) {
            self.lex_expression(raw, index)
        } else if self.defs.is_not(raw, index) {
            Ok(Self::true_step(index))
        } else {
            Err(self.unexpected(
                raw,
                index,
                &[TokenKind::LeftBracket, TokenKind::Expression],
            ))
        }
    }

    /// A left bracket may be followed by an expression, another left
    /// bracket, or NOT.
    fn lex_left_bracket(&self, raw: &[char], index: usize) -> Result<Step, LexError> {
        let end = index + self.defs.left_bracket_len();
        let token = Self::spanned(TokenKind::LeftBracket, raw, index, end);
        let next = skip_whitespace(raw, end);

        if next < raw.len() {
            if self.defs.is_expression_char(raw, next) {
                return Ok(Self::transition(next, token, LexState::Expression));
            } else if self.defs.is_left_bracket(raw, next) {
                return Ok(Self::transition(next, token, LexState::LeftBracket));
            } else if self.defs.is_not(raw, next) {
                return Ok(Self::transition(next, token, LexState::TrueBeforeNot));
            }
        }

        Err(self.unexpected(raw, next, &[TokenKind::Expression]))
    }

    /// A right bracket may be followed by an operator, another right
    /// bracket, or the end of input.
    fn lex_right_bracket(&self, raw: &[char], index: usize) -> Result<Step, LexError> {
        let end = index + self.defs.right_bracket_len();
        let token = Self::spanned(TokenKind::RightBracket, raw, index, end);
        let next = skip_whitespace(raw, end);

        if next < raw.len() {
            if self.defs.is_associative_op(raw, next) {
                return Ok(Self::transition(next, token, LexState::Operator));
            } else if self.defs.is_right_bracket(raw, next) {
                return Ok(Self::transition(next, token, LexState::RightBracket));
            }
            return Err(self.unexpected(raw, next, &[TokenKind::RightBracket]));
        }

        Ok(Self::terminal(next, token))
    }

    /// Lex an expression, quoted or unquoted. Expressions are followed by an
    /// operator, a right bracket, or the end of input.
    fn lex_expression(&self, raw: &[char], index: usize) -> Result<Step, LexError> {
        let (content_start, next_index, content_end) = if self.defs.is_single_quote(raw, index) {
            let start = index + self.defs.single_quote_len();
            let (next, end) = self.lex_quoted(raw, start, QuoteKind::Single)?;
            (start, next, end)
        } else if self.defs.is_double_quote(raw, index) {
            let start = index + self.defs.double_quote_len();
            let (next, end) = self.lex_quoted(raw, start, QuoteKind::Double)?;
            (start, next, end)
        } else {
            let (next, end) = self.lex_unquoted(raw, index)?;
            (index, next, end)
        };

        let token = Self::spanned(TokenKind::Expression, raw, content_start, content_end);
        let next = skip_whitespace(raw, next_index);

        if next < raw.len() {
            if self.defs.is_associative_op(raw, next) {
                return Ok(Self::transition(next, token, LexState::Operator));
            } else if self.defs.is_right_bracket(raw, next) {
                return Ok(Self::transition(next, token, LexState::RightBracket));
            }
        }

        Ok(Self::terminal(next, token))
    }

    /// Scan a quoted expression body: everything up to the closing quote of
    /// the same kind. Returns (resume index, content end).
    fn lex_quoted(
        &self,
        raw: &[char],
        start: usize,
        quote: QuoteKind,
    ) -> Result<(usize, usize), LexError> {
        let (is_close, close_len): (fn(&D, &[char], usize) -> bool, usize) = match quote {
            QuoteKind::Single => (D::is_single_quote, self.defs.single_quote_len()),
            QuoteKind::Double => (D::is_double_quote, self.defs.double_quote_len()),
        };

        let mut i = start;
        while i < raw.len() && !is_close(self.defs, raw, i) {
            i += 1;
        }

        if i >= raw.len() {
            // unterminated: the expression ran into the end of input
            return Err(self.unexpected(raw, i, &[TokenKind::Expression]));
        }

        let next = skip_whitespace(raw, i + close_len);
        if next == raw.len()
            || self.defs.is_right_bracket(raw, next)
            || self.defs.is_associative_op(raw, next)
        {
            Ok((next, i))
        } else {
            Err(self.unexpected(raw, i, &[TokenKind::Expression]))
        }
    }

    /// Scan an unquoted expression body. Stops at an RBR/AND/OR keyword that
    /// is not the first scanned code point; trailing whitespace is trimmed
    /// from the captured text. Returns (resume index, content end).
    fn lex_unquoted(&self, raw: &[char], index: usize) -> Result<(usize, usize), LexError> {
        let mut i = index;
        let mut trailing = 0;

        while i < raw.len() {
            if i != index
                && (self.defs.is_right_bracket(raw, i) || self.defs.is_associative_op(raw, i))
            {
                break;
            }
            if self.defs.is_expression_char(raw, i) {
                trailing = 0;
            } else if is_whitespace_at(raw, i) {
                trailing += 1;
            } else {
                // NOT or a left bracket inside an unquoted expression
                return Err(self.unexpected(raw, i, &[TokenKind::Expression]));
            }
            i += 1;
        }

        Ok((i, i - trailing))
    }

    /// Lex AND/OR, upgrading to ANDNOT/ORNOT when NOT follows.
    fn lex_operator(&self, raw: &[char], index: usize) -> Result<Step, LexError> {
        let (kind, size) = self.operator_kind(raw, index);
        debug_assert!(kind.is_op(), "operator state entered off an operator");

        let end = index + size;
        let token = Self::spanned(kind, raw, index, end);
        let next = skip_whitespace(raw, end);
        self.after_operator(raw, next, token)
    }

    /// Emit the synthetic `True` operand; the NOT keyword itself is lexed by
    /// the follow state.
    fn true_step(index: usize) -> Step {
        Step {
            next_index: index,
            token: Spanned::new(Token::synthetic_true(), Span::at(index)),
            next_state: Some(LexState::NotOperator),
        }
    }

    /// Lex an operand-position NOT as a synthetic `AndNot` carrying just the
    /// NOT keyword; together with the preceding synthetic `True` this
    /// rewrites `!X` to `true ANDNOT X`.
    fn lex_not_operator(&self, raw: &[char], index: usize) -> Result<Step, LexError> {
        let end = index + self.defs.not_len();
        let token = Self::spanned(TokenKind::AndNot, raw, index, end);
        let next = skip_whitespace(raw, end);
        self.after_operator(raw, next, token)
    }

    /// Operators are followed by an expression or a left bracket.
    fn after_operator(
        &self,
        raw: &[char],
        index: usize,
        token: SpannedToken,
    ) -> Result<Step, LexError> {
        if index < raw.len() {
            if self.defs.is_expression_char(raw, index) {
                return Ok(Self::transition(index, token, LexState::Expression));
            } else if self.defs.is_left_bracket(raw, index) {
                return Ok(Self::transition(index, token, LexState::LeftBracket));
            }
        }

        Err(self.unexpected(
            raw,
            index,
            &[TokenKind::Expression, TokenKind::LeftBracket],
        ))
    }

    /// Classify AND/OR at `index`, upgrading to a complex operator when the
    /// NOT keyword follows (whitespace allowed between). The returned size
    /// spans from the operator start through the NOT keyword inclusive.
    fn operator_kind(&self, raw: &[char], index: usize) -> (TokenKind, usize) {
        let (kind, size) = if self.defs.is_and(raw, index) {
            (TokenKind::And, self.defs.and_len())
        } else if self.defs.is_or(raw, index) {
            (TokenKind::Or, self.defs.or_len())
        } else {
            return (TokenKind::Unknown, 0);
        };

        let after = skip_whitespace(raw, index + size);
        if self.defs.is_not(raw, after) {
            let upgraded = match kind {
                TokenKind::And => TokenKind::AndNot,
                _ => TokenKind::OrNot,
            };
            return (upgraded, (after - index) + self.defs.not_len());
        }

        (kind, size)
    }

    /// Name the kind found at `index`, for diagnostics.
    fn found_kind(&self, raw: &[char], index: usize) -> TokenKind {
        let (op, _) = self.operator_kind(raw, index);
        if op != TokenKind::Unknown {
            op
        } else if self.defs.is_right_bracket(raw, index) {
            TokenKind::RightBracket
        } else if self.defs.is_left_bracket(raw, index) {
            TokenKind::LeftBracket
        } else if self.defs.is_not(raw, index) {
            TokenKind::Not
        } else if self.defs.is_single_quote(raw, index) {
            TokenKind::SingleQuote
        } else if self.defs.is_double_quote(raw, index) {
            TokenKind::DoubleQuote
        } else {
            TokenKind::Unknown
        }
    }

    /// Build the positioned error for an invalid continuation at `index`,
    /// listing the kinds that would have been valid there.
    fn unexpected(&self, raw: &[char], index: usize, expected: &[TokenKind]) -> LexError {
        let position = skip_whitespace(raw, index);
        let found = if position < raw.len() {
            self.found_kind(raw, position)
        } else {
            TokenKind::EndOfLine
        };

        LexError::UnexpectedToken {
            expected: self.expected_list(expected),
            found: self.defs.describe(found).to_string(),
            position,
        }
    }

    /// Render expected kinds as a list: "a", "a or b", "a, b or c".
    fn expected_list(&self, expected: &[TokenKind]) -> String {
        let mut out = String::new();
        for (i, kind) in expected.iter().enumerate() {
            if expected.len() > 1 && i == expected.len() - 1 {
                out.push_str(" or ");
            }
            out.push_str(self.defs.describe(*kind));
            if i + 2 < expected.len() {
                out.push_str(", ");
            }
        }
        out
    }

    fn spanned(kind: TokenKind, raw: &[char], start: usize, end: usize) -> SpannedToken {
        let text: String = raw[start..end].iter().collect();
        Spanned::new(Token::new(kind, text), Span::new(start, end))
    }

    fn transition(next_index: usize, token: SpannedToken, next: LexState) -> Step {
        Step {
            next_index,
            token,
            next_state: Some(next),
        }
    }

    fn terminal(next_index: usize, token: SpannedToken) -> Step {
        Step {
            next_index,
            token,
            next_state: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::TokensDefinition;
    use assert_matches::assert_matches;

    fn lex(condition: &str) -> Result<Vec<SpannedToken>, LexError> {
        let defs = TokensDefinition::default();
        LexicalAnalyzer::new(&defs).tokenize(condition)
    }

    fn kinds(tokens: &[SpannedToken]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.value.kind).collect()
    }

    fn texts(tokens: &[SpannedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.value.text.as_str()).collect()
    }

    #[test]
    fn lexes_single_expression() {
        let tokens = lex("fence").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Expression]);
        assert_eq!(texts(&tokens), vec!["fence"]);
        assert_eq!(tokens[0].span, Span::new(0, 5));
    }

    #[test]
    fn lexes_conjunction_and_disjunction() {
        let tokens = lex("lazy & fox").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Expression, TokenKind::And, TokenKind::Expression]
        );
        assert_eq!(texts(&tokens), vec!["lazy", "&", "fox"]);

        let tokens = lex("lazy | fox").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Expression, TokenKind::Or, TokenKind::Expression]
        );
    }

    #[test]
    fn unquoted_expression_keeps_internal_whitespace_and_trims_trailing() {
        let tokens = lex("lazy fox   & fence").unwrap();
        assert_eq!(texts(&tokens), vec!["lazy fox", "&", "fence"]);

        let tokens = lex("lazy fox   ").unwrap();
        assert_eq!(texts(&tokens), vec!["lazy fox"]);
    }

    #[test]
    fn operand_position_not_rewrites_to_true_andnot() {
        let tokens = lex("!fence").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::True, TokenKind::AndNot, TokenKind::Expression]
        );
        assert_eq!(texts(&tokens), vec!["true", "!", "fence"]);
        // the synthetic operand is anchored at the NOT keyword
        assert_eq!(tokens[0].span, Span::at(0));
        assert_eq!(tokens[1].span, Span::new(0, 1));
    }

    #[test]
    fn not_after_left_bracket_rewrites_inside_the_group() {
        let tokens = lex("(!a) & b").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LeftBracket,
                TokenKind::True,
                TokenKind::AndNot,
                TokenKind::Expression,
                TokenKind::RightBracket,
                TokenKind::And,
                TokenKind::Expression,
            ]
        );
    }

    #[test]
    fn upgrades_operators_followed_by_not() {
        let tokens = lex("lazy &! foxy").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Expression,
                TokenKind::AndNot,
                TokenKind::Expression
            ]
        );
        assert_eq!(texts(&tokens)[1], "&!");

        let tokens = lex("lazy |! foxy").unwrap();
        assert_eq!(kinds(&tokens)[1], TokenKind::OrNot);
    }

    #[test]
    fn complex_operator_text_spans_through_the_not_keyword() {
        let tokens = lex("lazy & ! foxy").unwrap();
        assert_eq!(kinds(&tokens)[1], TokenKind::AndNot);
        assert_eq!(texts(&tokens)[1], "& !");
        assert_eq!(tokens[1].span, Span::new(5, 8));
    }

    #[test]
    fn lexes_bracketed_groups() {
        let tokens = lex("(a|b) & c").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LeftBracket,
                TokenKind::Expression,
                TokenKind::Or,
                TokenKind::Expression,
                TokenKind::RightBracket,
                TokenKind::And,
                TokenKind::Expression,
            ]
        );
    }

    #[test]
    fn lexes_quoted_expressions() {
        let tokens = lex("'fence'").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Expression]);
        assert_eq!(texts(&tokens), vec!["fence"]);
        assert_eq!(tokens[0].span, Span::new(1, 6));

        let tokens = lex("\"The\" & \"over\"").unwrap();
        assert_eq!(texts(&tokens), vec!["The", "&", "over"]);
    }

    #[test]
    fn quoted_expressions_may_contain_keywords() {
        let tokens = lex("'a & b' | c").unwrap();
        assert_eq!(texts(&tokens), vec!["a & b", "|", "c"]);
    }

    #[test]
    fn empty_quotes_lex_to_the_empty_expression() {
        let tokens = lex("''").unwrap();
        assert_eq!(texts(&tokens), vec![""]);
    }

    #[test]
    fn quote_characters_are_plain_text_inside_unquoted_expressions() {
        let tokens = lex("don't & can't").unwrap();
        assert_eq!(texts(&tokens), vec!["don't", "&", "can't"]);
    }

    #[test]
    fn empty_condition_is_an_error() {
        assert_matches!(lex(""), Err(LexError::EmptyCondition));
    }

    #[test]
    fn whitespace_only_condition_lexes_to_the_empty_expression() {
        let tokens = lex("   ").unwrap();
        assert_eq!(kinds(&tokens), vec![TokenKind::Expression]);
        assert_eq!(texts(&tokens), vec![""]);
    }

    #[test]
    fn adjacent_not_is_rejected() {
        let error = lex("!!a").unwrap_err();
        assert_matches!(
            error,
            LexError::UnexpectedToken { position: 1, .. }
        );
        assert_eq!(
            error.to_string(),
            "expression or left bracket expected, instead found not at offset 1"
        );
    }

    #[test]
    fn not_inside_an_unquoted_expression_is_rejected() {
        let error = lex("a ! b").unwrap_err();
        assert_eq!(
            error.to_string(),
            "expression expected, instead found not at offset 2"
        );
    }

    #[test]
    fn dangling_operator_reports_end_of_line() {
        let error = lex("a &").unwrap_err();
        assert_matches!(error, LexError::UnexpectedToken { position: 3, .. });
        assert_eq!(
            error.to_string(),
            "expression or left bracket expected, instead found end of line at offset 3"
        );

        let error = lex("a & ").unwrap_err();
        assert_matches!(error, LexError::UnexpectedToken { position: 4, .. });
    }

    #[test]
    fn leading_right_bracket_is_rejected() {
        let error = lex(") a").unwrap_err();
        assert_eq!(
            error.to_string(),
            "left bracket or expression expected, instead found right bracket at offset 0"
        );
    }

    #[test]
    fn empty_group_is_rejected() {
        let error = lex("()").unwrap_err();
        assert_eq!(
            error.to_string(),
            "expression expected, instead found right bracket at offset 1"
        );
    }

    #[test]
    fn operator_after_right_bracket_is_required() {
        let error = lex("(a) b").unwrap_err();
        assert_matches!(error, LexError::UnexpectedToken { position: 4, .. });
    }

    #[test]
    fn unterminated_quote_reports_end_of_line() {
        let error = lex("'abc").unwrap_err();
        assert_matches!(error, LexError::UnexpectedToken { position: 4, .. });
        assert_eq!(
            error.to_string(),
            "expression expected, instead found end of line at offset 4"
        );
    }

    #[test]
    fn mismatched_quote_kinds_never_close() {
        // a double quote cannot close a single-quoted expression
        let error = lex("'a\"").unwrap_err();
        assert_matches!(error, LexError::UnexpectedToken { position: 3, .. });
    }

    #[test]
    fn text_after_a_closed_quote_is_rejected() {
        let error = lex("'a' b").unwrap_err();
        assert_matches!(error, LexError::UnexpectedToken { position: 2, .. });
        assert_eq!(
            error.to_string(),
            "expression expected, instead found single inverted comma at offset 2"
        );
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        let tokens = lex("   fence").unwrap();
        assert_eq!(texts(&tokens), vec!["fence"]);
        assert_eq!(tokens[0].span, Span::new(3, 8));
    }

    #[test]
    fn positions_count_code_points_not_bytes() {
        // '∆' is three UTF-8 bytes but one code point
        let tokens = lex("∆√ & x").unwrap();
        assert_eq!(texts(&tokens), vec!["∆√", "&", "x"]);
        assert_eq!(tokens[1].span, Span::new(3, 4));
    }

    #[test]
    fn word_keyword_definitions_lex_the_same_grammar() {
        let defs = TokensDefinition::builder()
            .define(TokenKind::And, "AND", "and")
            .define(TokenKind::Or, "OR", "or")
            .define(TokenKind::Not, "NOT", "not")
            .define(TokenKind::LeftBracket, "(", "left bracket")
            .define(TokenKind::RightBracket, ")", "right bracket")
            .define(TokenKind::DoubleQuote, "\"", "double inverted comma")
            .define(TokenKind::SingleQuote, "'", "single inverted comma")
            .define(TokenKind::Expression, "", "expression")
            .define(TokenKind::EndOfLine, "\n", "end of line")
            .define(TokenKind::Unknown, "", "unknown")
            .finalise();
        let analyzer = LexicalAnalyzer::new(&defs);

        let tokens = analyzer.tokenize("cat AND NOT dog").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Expression,
                TokenKind::AndNot,
                TokenKind::Expression
            ]
        );
        assert_eq!(texts(&tokens), vec!["cat", "AND NOT", "dog"]);

        let error = analyzer.tokenize("cat AND").unwrap_err();
        assert_eq!(
            error.to_string(),
            "expression or left bracket expected, instead found end of line at offset 7"
        );
    }
}
