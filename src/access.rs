/*!
# Typed Access

Resolves a pointer string and checks that the value found is of the requested
[`Kind`]. Parse and resolution failures collapse into
[`AccessError::Unresolvable`]; a value of the wrong kind is reported as
[`AccessError::TypeMismatch`]. Values are never converted between kinds, so a
string `"5"` is not a number.

```
use jpointer::access::{self, AccessError};
use jpointer::node::Kind;
use serde_json::json;

let doc = json!({"a": {"b": [1, 2, 3]}});
assert_eq!(access::as_number(&doc, "/a/b/1").unwrap().as_u64(), Some(2));
assert_eq!(
    access::as_string(&doc, "/a/b/1"),
    Err(AccessError::TypeMismatch {
        expected: Kind::String,
        actual: Kind::Number
    })
);
```
*/
use thiserror::Error;

use crate::node::{JsonNode, Kind};
use crate::pointer::{PointerError, get};

/// Errors from typed pointer lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The pointer is malformed or does not address a value.
    #[error("pointer cannot be resolved")]
    Unresolvable(#[source] PointerError),
    /// The addressed value is of a different kind than requested.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// The requested kind.
        expected: Kind,
        /// The kind of the value found.
        actual: Kind,
    },
}

impl AccessError {
    /// Whether the lookup failed before a value was found.
    #[must_use]
    pub const fn is_unresolvable(&self) -> bool {
        matches!(self, Self::Unresolvable(_))
    }
}

/// Resolve `pointer` and require the value to be of `expected` kind.
///
/// # Errors
///
/// Returns [`AccessError::Unresolvable`] if the pointer is malformed or does
/// not address a value, and [`AccessError::TypeMismatch`] if the value is of
/// another kind.
pub fn as_kind<'v, V: JsonNode>(
    root: &'v V,
    pointer: &str,
    expected: Kind,
) -> Result<&'v V, AccessError> {
    let value = get(root, pointer).map_err(AccessError::Unresolvable)?;
    let actual = value.kind();
    if actual == expected {
        Ok(value)
    } else {
        Err(AccessError::TypeMismatch { expected, actual })
    }
}

/// Look up an array.
///
/// # Errors
///
/// See [`as_kind`].
pub fn as_array<'v, V: JsonNode>(root: &'v V, pointer: &str) -> Result<&'v [V], AccessError> {
    typed(root, pointer, Kind::Array, V::as_array)
}

/// Look up a number.
///
/// # Errors
///
/// See [`as_kind`].
pub fn as_number<'v, V: JsonNode>(
    root: &'v V,
    pointer: &str,
) -> Result<&'v V::Numeric, AccessError> {
    typed(root, pointer, Kind::Number, V::as_number)
}

/// Look up a boolean.
///
/// # Errors
///
/// See [`as_kind`].
pub fn as_boolean<V: JsonNode>(root: &V, pointer: &str) -> Result<bool, AccessError> {
    typed(root, pointer, Kind::Boolean, V::as_bool)
}

/// Look up a string.
///
/// # Errors
///
/// See [`as_kind`].
pub fn as_string<'v, V: JsonNode>(root: &'v V, pointer: &str) -> Result<&'v str, AccessError> {
    typed(root, pointer, Kind::String, V::as_str)
}

/// Look up an object.
///
/// # Errors
///
/// See [`as_kind`].
pub fn as_object<'v, V: JsonNode>(
    root: &'v V,
    pointer: &str,
) -> Result<&'v V::Map, AccessError> {
    typed(root, pointer, Kind::Object, V::as_object)
}

/// Checks the kind, then extracts the kind-specific representation.
fn typed<'v, V, T>(
    root: &'v V,
    pointer: &str,
    expected: Kind,
    extract: impl FnOnce(&'v V) -> Option<T>,
) -> Result<T, AccessError>
where
    V: JsonNode,
{
    let value = as_kind(root, pointer, expected)?;
    // A node whose accessor disagrees with its own kind is a type mismatch
    extract(value).ok_or(AccessError::TypeMismatch {
        expected,
        actual: value.kind(),
    })
}
