//! Configuration module: file-based syntax tables
//!
//! A syntax table can be declared in TOML and loaded at startup instead of
//! being built in code, so deployments can reskin the condition language
//! without recompiling.

pub mod syntax;

pub use syntax::{SyntaxConfig, SyntaxConfigError};
