//! # Tokenizer
//!
//! Splits a JSON Pointer string into its sequence of unescaped reference
//! tokens.
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{ParseError, tokenize};
pub use token::{escape_token, unescape_token};
