//! Source location tracking for the stoc compiler
//!
//! Conditions are single expressions, so a location is a flat 0-based
//! code-point offset into the condition string. Accurate offsets are
//! essential for helpful error messages.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open range of code-point offsets in a condition string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Span {
    /// Offset of the first code point (0-based)
    pub start: usize,
    /// Offset one past the last code point
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an empty span anchored at a single offset
    pub fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Number of code points covered
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the span covers no code points
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A value paired with the span it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    /// Attach a span to a value
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    /// Map the inner value, keeping the span
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Spanned<U> {
        Spanned {
            value: f(self.value),
            span: self.span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_length_and_display() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert_eq!(span.to_string(), "3..7");
    }

    #[test]
    fn anchored_span_is_empty() {
        let span = Span::at(5);
        assert_eq!(span.start, 5);
        assert_eq!(span.end, 5);
        assert!(span.is_empty());
    }

    #[test]
    fn spanned_map_keeps_span() {
        let spanned = Spanned::new(2, Span::new(0, 1));
        let mapped = spanned.map(|n| n * 10);
        assert_eq!(mapped.value, 20);
        assert_eq!(mapped.span, Span::new(0, 1));
    }
}
