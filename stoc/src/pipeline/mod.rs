//! Compile and search entry points
//!
//! The pipeline chains the lexer and the shunting-yard converter into a
//! compile phase, then hands the prepared form to the evaluator. One-shot
//! searches run the whole chain; filtering workloads call [`compile`] once
//! and [`evaluate`] per target.
use crate::grammar::{SyntaxDefinitions, TokensDefinition};
use crate::lexical::{LexError, LexicalAnalyzer};
use crate::log_success;
use crate::logging::codes;
use crate::postfix::{self, ShuntingError};
use crate::tokens::PreparedTokens;

/// Any error the compile phase can raise, with its source position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Shunting(#[from] ShuntingError),
}

impl SearchError {
    /// Code-point offset in the condition the error refers to
    pub fn position(&self) -> usize {
        match self {
            Self::Lex(error) => error.position(),
            Self::Shunting(error) => error.position(),
        }
    }
}

/// Compile a condition against a definition table.
pub fn compile<D: SyntaxDefinitions + ?Sized>(
    defs: &D,
    condition: &str,
) -> Result<PreparedTokens, SearchError> {
    let tokens = LexicalAnalyzer::new(defs).tokenize(condition)?;
    let prepared = postfix::to_postfix(&tokens)?;
    log_success!(codes::success::COMPILE_COMPLETE, "Condition compiled",
        "token_count" => prepared.len()
    );
    Ok(prepared)
}

/// Evaluate a compiled condition against one target.
pub fn evaluate(prepared: &PreparedTokens, target: &str) -> bool {
    postfix::evaluate(prepared, target)
}

/// One-shot search with the default syntax.
pub fn search(condition: &str, target: &str) -> Result<bool, SearchError> {
    search_custom(&TokensDefinition::default(), condition, target)
}

/// One-shot search with a caller-supplied syntax.
pub fn search_custom<D: SyntaxDefinitions + ?Sized>(
    defs: &D,
    condition: &str,
    target: &str,
) -> Result<bool, SearchError> {
    let prepared = compile(defs, condition)?;
    Ok(evaluate(&prepared, target))
}
