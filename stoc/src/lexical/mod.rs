//! Lexical analysis: raw condition text to an infix token sequence
//!
//! The analyzer is a state machine over code points; each state lexes one
//! token and names the only states allowed to follow it, so grammar
//! violations surface at the first invalid offset.

pub mod analyzer;
pub mod error;

pub use analyzer::LexicalAnalyzer;
pub use error::LexError;
