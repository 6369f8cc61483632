/*!
# JSON Pointer

A parsed JSON Pointer that can be resolved repeatedly against different
documents, plus the one-shot [`get`] lookup.

# Examples

A pointer can be parsed from its string form and formatted back into it:

```
use jpointer::pointer::Pointer;

let pointer: Pointer = "/a~1b/m~0n/0".parse().expect("valid pointer");
assert_eq!(pointer.tokens(), ["a/b", "m~n", "0"]);
assert_eq!(pointer.to_string(), "/a~1b/m~0n/0");
```

Or built up one token at a time:

```
use jpointer::pointer::Pointer;

let mut pointer = Pointer::root();
pointer.push("paths").push("/users/{id}").push("get");
assert_eq!(pointer.to_string(), "/paths/~1users~1{id}/get");
```

Resolution borrows from the document:

```
use jpointer::pointer::{Pointer, get};
use serde_json::json;

let doc = json!({"a": {"b": [1, 2, 3]}});
let pointer = Pointer::parse("/a/b/1").expect("valid pointer");
assert_eq!(pointer.resolve(&doc), Ok(&json!(2)));
assert_eq!(get(&doc, "/a/b/2").ok(), Some(&json!(3)));
```
*/
use std::{fmt::Display, str::FromStr};

use thiserror::Error;

use crate::node::JsonNode;
use crate::resolve::{ResolveError, resolve};
use crate::tokenizer::{ParseError, escape_token, tokenize};

/// Errors from parsing a pointer string and resolving it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    /// The pointer string is malformed.
    #[error("invalid JSON pointer: {0}")]
    Parse(#[from] ParseError),
    /// The pointer does not address a value in the document.
    #[error("unresolvable JSON pointer: {0}")]
    Resolve(#[from] ResolveError),
}

/// A parsed JSON Pointer, stored as its sequence of unescaped tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<String>,
}

impl Pointer {
    /// The empty pointer, referring to the whole document.
    #[must_use]
    pub const fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse a pointer string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the pointer is malformed.
    pub fn parse(pointer: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(pointer)?
            .into_iter()
            .map(std::borrow::Cow::into_owned)
            .collect();
        Ok(Self { tokens })
    }

    /// Build a pointer from already unescaped tokens.
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Append an unescaped token.
    pub fn push<T: Into<String>>(&mut self, token: T) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    /// The unescaped reference tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of reference tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether this pointer refers to the whole document.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.is_empty()
    }

    /// The pointer to the containing value, or `None` for the root pointer.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.tokens.split_last()?;
        Some(Self {
            tokens: rest.to_vec(),
        })
    }

    /// Resolve this pointer against `root`.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the pointer does not address a value.
    pub fn resolve<'v, V: JsonNode>(&self, root: &'v V) -> Result<&'v V, ResolveError> {
        resolve(root, &self.tokens)
    }
}

impl FromStr for Pointer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            write!(f, "/{}", escape_token(token))?;
        }
        Ok(())
    }
}

/// Tokenize `pointer` and resolve it against `root` in one call.
///
/// # Errors
///
/// Returns [`PointerError::Parse`] for a malformed pointer and
/// [`PointerError::Resolve`] if the pointer does not address a value.
pub fn get<'v, V: JsonNode>(root: &'v V, pointer: &str) -> Result<&'v V, PointerError> {
    let tokens = tokenize(pointer)?;
    Ok(resolve(root, &tokens)?)
}
