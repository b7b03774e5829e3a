//! Lexical analysis for Ael source.
//!
//! Converts source text into a token stream. It handles:
//!
//! - Regex-driven recognition of numbers, identifiers and operators
//! - Keyword-vs-identifier disambiguation on word boundaries
//! - Skipping whitespace and `//` comments
//! - Span tracking for diagnostics

pub mod lexer;
pub mod tokens;
