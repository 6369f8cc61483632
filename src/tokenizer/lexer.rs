//! # Pointer Lexer
//!
//! Splits a JSON Pointer string on `/` into raw segments and unescapes each
//! segment into a reference token.
use std::borrow::Cow;

use thiserror::Error;

use crate::tokenizer::unescape_token;

/// Represents errors that can occur while splitting a pointer into tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-empty pointer did not begin with `/`.
    #[error("JSON pointer must be empty or start with '/'")]
    MissingLeadingSlash,
    /// A `~` was not followed by `0` or `1`.
    #[error("invalid escape sequence at byte {offset}: '~' must be followed by '0' or '1'")]
    InvalidEscape {
        /// Byte offset of the offending `~` within the pointer.
        offset: usize,
    },
}

/// Tokenize a JSON Pointer into its unescaped reference tokens.
///
/// The empty pointer yields no tokens and refers to the whole document.
/// Empty segments are kept, so `"/a//b"` yields `["a", "", "b"]` where the
/// middle token addresses the key `""`.
///
/// # Errors
///
/// Returns [`ParseError::MissingLeadingSlash`] for a non-empty pointer without
/// a leading `/`, or [`ParseError::InvalidEscape`] for a malformed `~` escape.
///
/// # Examples
///
/// ```
/// use jpointer::tokenizer::{ParseError, tokenize};
///
/// assert!(tokenize("").unwrap().is_empty());
/// assert_eq!(tokenize("/a~1b/m~0n").unwrap(), ["a/b", "m~n"]);
/// assert_eq!(tokenize("a"), Err(ParseError::MissingLeadingSlash));
/// ```
pub fn tokenize(pointer: &str) -> Result<Vec<Cow<'_, str>>, ParseError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(ParseError::MissingLeadingSlash);
    };

    let mut tokens = Vec::with_capacity(rest.matches('/').count() + 1);
    // Byte offset of the current segment within `pointer`
    let mut offset = 1;
    for segment in rest.split('/') {
        tokens.push(unescape_token(segment, offset)?);
        offset += segment.len() + 1;
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let tokens = tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_root_slash() {
        // "/" addresses the key "" of the root object
        assert_eq!(tokenize("/").unwrap(), [""]);
        assert_eq!(tokenize("//").unwrap(), ["", ""]);
    }

    #[test]
    fn test_simple_segments() {
        assert_eq!(tokenize("/a/b").unwrap(), ["a", "b"]);
        assert_eq!(tokenize("/a/b/0").unwrap(), ["a", "b", "0"]);
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(tokenize("/a//b").unwrap(), ["a", "", "b"]);
        assert_eq!(tokenize("/a/").unwrap(), ["a", ""]);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(tokenize("/a~1b").unwrap(), ["a/b"]);
        assert_eq!(tokenize("/m~0n").unwrap(), ["m~n"]);
        assert_eq!(tokenize("/~1~0").unwrap(), ["/~"]);
        assert_eq!(tokenize("/~01").unwrap(), ["~1"]);
    }

    #[test]
    fn test_missing_leading_slash() {
        for pointer in ["a", "a/b", "#/a", " /a", "~0"] {
            assert_eq!(
                tokenize(pointer),
                Err(ParseError::MissingLeadingSlash),
                "pointer {pointer:?}"
            );
        }
    }

    #[test]
    fn test_invalid_escape_offsets() {
        assert_eq!(
            tokenize("/~"),
            Err(ParseError::InvalidEscape { offset: 1 })
        );
        assert_eq!(
            tokenize("/ab/c~2"),
            Err(ParseError::InvalidEscape { offset: 5 })
        );
        assert_eq!(
            tokenize("/ok/~0/x~"),
            Err(ParseError::InvalidEscape { offset: 8 })
        );
    }

    #[test]
    fn test_borrowed_tokens() {
        let tokens = tokenize("/plain/esc~1aped").unwrap();
        assert!(matches!(tokens[0], Cow::Borrowed(_)));
        assert!(matches!(tokens[1], Cow::Owned(_)));
    }
}
