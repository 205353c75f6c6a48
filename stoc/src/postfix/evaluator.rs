//! Postfix evaluation against a target string
//!
//! Expressions test case-sensitive substring containment; operators combine
//! booleans on a small stack. The arity invariant upheld by `PreparedTokens`
//! means every pop here must succeed, so running out of stack is a bug in
//! the converter rather than a user error.
use crate::log_debug;
use crate::tokens::{PreparedTokens, TokenKind};

/// Evaluate a compiled condition against `target`.
///
/// The same `PreparedTokens` can be evaluated against any number of targets;
/// compiling once and evaluating many times is the intended pattern for
/// filtering workloads.
pub fn evaluate(prepared: &PreparedTokens, target: &str) -> bool {
    let mut stack: Vec<bool> = Vec::new();

    for token in prepared.tokens() {
        match token.kind {
            TokenKind::True => stack.push(true),
            // the empty expression is contained in every target
            TokenKind::Expression => stack.push(target.contains(token.text.as_str())),
            TokenKind::And => apply(&mut stack, |a, b| a && b),
            TokenKind::Or => apply(&mut stack, |a, b| a || b),
            TokenKind::AndNot => apply(&mut stack, |a, b| a && !b),
            TokenKind::OrNot => apply(&mut stack, |a, b| a || !b),
            other => unreachable!("kind {other} cannot appear in a prepared sequence"),
        }
    }

    debug_assert_eq!(stack.len(), 1);
    let result = stack.pop().unwrap_or(false);
    log_debug!("Evaluation complete", "result" => result);
    result
}

fn apply(stack: &mut Vec<bool>, op: impl Fn(bool, bool) -> bool) {
    // operand order matters for the NOT variants
    let b = stack.pop();
    let a = stack.pop();
    match (a, b) {
        (Some(a), Some(b)) => stack.push(op(a, b)),
        _ => unreachable!("operator without two operands in a prepared sequence"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::TokensDefinition;
    use crate::lexical::LexicalAnalyzer;
    use crate::postfix::to_postfix;

    fn compile(condition: &str) -> PreparedTokens {
        let defs = TokensDefinition::default();
        let tokens = LexicalAnalyzer::new(&defs).tokenize(condition).unwrap();
        to_postfix(&tokens).unwrap()
    }

    const TARGET: &str = "The lazy fox jumped over the fence";

    #[test]
    fn single_expression_tests_containment() {
        assert!(evaluate(&compile("fence"), TARGET));
        assert!(!evaluate(&compile("wall"), TARGET));
    }

    #[test]
    fn containment_is_case_sensitive() {
        assert!(evaluate(&compile("The"), TARGET));
        assert!(!evaluate(&compile("THE"), TARGET));
    }

    #[test]
    fn and_requires_both_operands() {
        assert!(evaluate(&compile("lazy & fox"), TARGET));
        assert!(!evaluate(&compile("lazy & foxy"), TARGET));
    }

    #[test]
    fn or_requires_either_operand() {
        assert!(evaluate(&compile("lazy | abc"), TARGET));
        assert!(evaluate(&compile("abc | lazy"), TARGET));
        assert!(!evaluate(&compile("abc | def"), TARGET));
    }

    #[test]
    fn andnot_negates_its_right_operand() {
        assert!(evaluate(&compile("lazy &! foxy"), TARGET));
        assert!(!evaluate(&compile("lazy &! fox"), TARGET));
    }

    #[test]
    fn ornot_negates_its_right_operand() {
        assert!(evaluate(&compile("abc |! def"), TARGET));
        assert!(!evaluate(&compile("abc |! lazy"), TARGET));
    }

    #[test]
    fn operand_position_not_inverts() {
        assert!(!evaluate(&compile("!fence"), TARGET));
        assert!(evaluate(&compile("!wall"), TARGET));
    }

    #[test]
    fn left_associative_grouping_drives_the_result() {
        // a|b&c evaluates as (a|b)&c
        assert!(evaluate(&compile("lazy | abc & fence"), TARGET));
        assert!(!evaluate(&compile("lazy | abc & wall"), TARGET));
        assert!(evaluate(&compile("lazy | (abc & wall)"), TARGET));
    }

    #[test]
    fn empty_expression_matches_every_target() {
        let prepared = compile("   ");
        assert!(evaluate(&prepared, TARGET));
        assert!(evaluate(&prepared, ""));
    }

    #[test]
    fn one_compilation_serves_many_targets() {
        let prepared = compile("fox & fence");
        assert!(evaluate(&prepared, TARGET));
        assert!(!evaluate(&prepared, "a fox near a wall"));
        assert!(!evaluate(&prepared, ""));
    }

    #[test]
    fn unicode_expressions_match_by_code_points() {
        let prepared = compile("∆√∫ | missing");
        assert!(evaluate(&prepared, "math symbols ∆√∫ inline"));
        assert!(!evaluate(&prepared, "no symbols here"));
    }
}
