//! Shared utilities for the stoc compiler

pub mod chars;
pub mod span;

pub use chars::{is_whitespace_at, last_index_of, skip_whitespace, starts_with_at};
pub use span::{Span, Spanned};
