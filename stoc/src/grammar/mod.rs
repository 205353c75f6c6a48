//! Condition grammar configuration
//!
//! The grammar rules of a condition are fixed; the syntax that expresses
//! them is not. This module holds the definition table mapping token kinds
//! to concrete keywords and the trait the lexer consumes it through.

pub mod definitions;

pub use definitions::{SyntaxDefinitions, TokensDefinition, TokensDefinitionBuilder};
