//! Code-point scanning helpers shared by the definition table and the lexer
//!
//! The lexer works over a `Vec<char>` of the condition so that positions are
//! 0-based code-point offsets, independent of UTF-8 byte widths.

/// True if `input[index..]` starts with `keyword`.
///
/// An empty keyword never matches; kinds without keywords (the expression
/// kind) are handled by their absence, not by an empty-string match.
pub fn starts_with_at(input: &[char], index: usize, keyword: &[char]) -> bool {
    if keyword.is_empty() || index >= input.len() {
        return false;
    }
    input.len() - index >= keyword.len() && input[index..index + keyword.len()] == *keyword
}

/// True if the code point at `index` is condition whitespace.
///
/// Whitespace is exactly space, tab, and newline; other Unicode whitespace
/// is expression text.
pub fn is_whitespace_at(input: &[char], index: usize) -> bool {
    index < input.len() && matches!(input[index], ' ' | '\t' | '\n')
}

/// Advance `index` past any run of condition whitespace.
pub fn skip_whitespace(input: &[char], index: usize) -> usize {
    let mut i = index;
    while is_whitespace_at(input, i) {
        i += 1;
    }
    i
}

/// Index of the last element matching `predicate`, scanning from the back.
pub fn last_index_of<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().rposition(predicate)
}
