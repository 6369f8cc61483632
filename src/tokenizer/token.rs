//! # Reference Tokens
//!
//! Escaping rules for a single reference token. Per RFC 6901, `~` is encoded
//! as `~0` and `/` is encoded as `~1`.
use std::borrow::Cow;

use crate::tokenizer::ParseError;

/// Unescapes a single raw reference token.
///
/// The token is scanned left to right and each `~0` / `~1` pair is decoded as
/// one unit, so `~01` decodes to `~1` and never to `/`. `offset` is the byte
/// offset of `raw` within the full pointer and is only used to report the
/// position of a malformed escape.
///
/// Tokens without any `~` are returned borrowed.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEscape`] if a `~` is not followed by `0` or
/// `1`, including a trailing `~`.
///
/// # Examples
///
/// ```
/// use jpointer::tokenizer::unescape_token;
///
/// assert_eq!(unescape_token("a~1b", 0).unwrap(), "a/b");
/// assert_eq!(unescape_token("m~0n", 0).unwrap(), "m~n");
/// assert_eq!(unescape_token("~01", 0).unwrap(), "~1");
/// assert!(unescape_token("bad~2", 0).is_err());
/// ```
pub fn unescape_token(raw: &str, offset: usize) -> Result<Cow<'_, str>, ParseError> {
    let Some(first) = raw.find('~') else {
        return Ok(Cow::Borrowed(raw));
    };

    let mut out = String::with_capacity(raw.len());
    out.push_str(&raw[..first]);

    let mut chars = raw[first..].char_indices();
    while let Some((pos, c)) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        // `~` always consumes the following character
        match chars.next() {
            Some((_, '0')) => out.push('~'),
            Some((_, '1')) => out.push('/'),
            _ => {
                return Err(ParseError::InvalidEscape {
                    offset: offset + first + pos,
                });
            }
        }
    }

    Ok(Cow::Owned(out))
}

/// Escapes a reference token so it can be embedded in a pointer string.
///
/// `~` is encoded before `/` so that the `~` introduced by `~1` is never
/// re-encoded.
///
/// # Examples
///
/// ```
/// use jpointer::tokenizer::escape_token;
///
/// assert_eq!(escape_token("a/b"), "a~1b");
/// assert_eq!(escape_token("m~n"), "m~0n");
/// assert_eq!(escape_token("plain"), "plain");
/// ```
#[must_use]
pub fn escape_token(token: &str) -> Cow<'_, str> {
    if !token.contains(['~', '/']) {
        return Cow::Borrowed(token);
    }
    Cow::Owned(token.replace('~', "~0").replace('/', "~1"))
}
