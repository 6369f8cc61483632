/*!
# Resolver

Walks a JSON value tree one reference token at a time.

Resolution is a single left-to-right pass with no backtracking: objects are
indexed by the token as a literal key, arrays by the token as an RFC 6901
array index, and any remaining token on a scalar is an error. The first
failure aborts the walk.

```
use jpointer::resolve::{ResolveError, resolve};
use serde_json::json;

let doc = json!({"a": {"b": [1, 2, 3]}});
assert_eq!(resolve(&doc, &["a", "b", "1"]), Ok(&json!(2)));
assert_eq!(
    resolve(&doc, &["a", "c"]),
    Err(ResolveError::KeyNotFound("c".to_string()))
);
```
*/
use thiserror::Error;

use crate::node::{JsonNode, Kind};

/// Represents errors that can occur while walking the value tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The object does not contain the requested key.
    #[error("key `{0}` not found")]
    KeyNotFound(String),
    /// The array index is out of range, or `-` was used to read past the end.
    #[error("array index `{0}` not found")]
    IndexNotFound(String),
    /// The token is not a valid array index.
    #[error("`{0}` is not a valid array index")]
    InvalidIndex(String),
    /// A token remained after reaching a scalar value.
    #[error("cannot resolve `{token}` inside a {kind} value")]
    NotIndexable {
        /// The token that could not be applied.
        token: String,
        /// Kind of the scalar that was reached.
        kind: Kind,
    },
}

/// A reference token interpreted as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayIndex {
    /// A concrete zero-based index.
    Index(usize),
    /// The `-` token, referring to the position after the last element.
    Append,
}

/// Interpret a reference token as an array index.
///
/// Accepts `-`, `0`, or a run of ASCII digits without a leading zero. Digit
/// runs too large for `usize` are reported as [`ResolveError::IndexNotFound`]
/// since no array can be that long.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidIndex`] for any other token, including
/// signed numbers, leading zeros, and the empty token.
///
/// # Examples
///
/// ```
/// use jpointer::resolve::{ArrayIndex, ResolveError, parse_index};
///
/// assert_eq!(parse_index("12"), Ok(ArrayIndex::Index(12)));
/// assert_eq!(parse_index("-"), Ok(ArrayIndex::Append));
/// assert!(matches!(parse_index("01"), Err(ResolveError::InvalidIndex(_))));
/// ```
pub fn parse_index(token: &str) -> Result<ArrayIndex, ResolveError> {
    if token == "-" {
        return Ok(ArrayIndex::Append);
    }

    let bytes = token.as_bytes();
    let well_formed = match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    };
    if !well_formed {
        return Err(ResolveError::InvalidIndex(token.to_string()));
    }

    token
        .parse::<usize>()
        .map(ArrayIndex::Index)
        .map_err(|_| ResolveError::IndexNotFound(token.to_string()))
}

/// Resolve a sequence of reference tokens against `root`.
///
/// An empty token sequence resolves to `root` itself. The returned reference
/// borrows from the caller's tree; nothing is copied.
///
/// # Errors
///
/// Returns the [`ResolveError`] for the first token that cannot be applied.
pub fn resolve<'v, V, T>(root: &'v V, tokens: &[T]) -> Result<&'v V, ResolveError>
where
    V: JsonNode,
    T: AsRef<str>,
{
    let mut current = root;

    for (depth, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        log::trace!("step {depth}: `{token}` into {}", current.kind());

        current = step(current, token).inspect_err(|err| {
            log::debug!("resolution stopped at token {depth}: {err}");
        })?;
    }

    Ok(current)
}

/// Apply a single reference token to `current`.
fn step<'v, V: JsonNode>(current: &'v V, token: &str) -> Result<&'v V, ResolveError> {
    match current.kind() {
        Kind::Object => current
            .lookup(token)
            .ok_or_else(|| ResolveError::KeyNotFound(token.to_string())),
        Kind::Array => {
            let not_found = || ResolveError::IndexNotFound(token.to_string());
            match parse_index(token)? {
                ArrayIndex::Index(index) => current.element_at(index).ok_or_else(not_found),
                // Nothing lives past the end of an array
                ArrayIndex::Append => Err(not_found()),
            }
        }
        kind @ (Kind::String | Kind::Number | Kind::Boolean | Kind::Null) => {
            Err(ResolveError::NotIndexable {
                token: token.to_string(),
                kind,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    /// Creates the following JSON object for testing:
    /// ```json
    /// {
    ///   "a": { "b": [1, 2, 3] },
    ///   "": "empty key",
    ///   "x": 5,
    ///   "z": null
    /// }
    /// ```
    fn create_test_json() -> Value {
        json!({
            "a": { "b": [1, 2, 3] },
            "": "empty key",
            "x": 5,
            "z": null
        })
    }

    #[test]
    fn empty_tokens_resolve_to_root() {
        let doc = create_test_json();
        let tokens: [&str; 0] = [];
        assert!(std::ptr::eq(resolve(&doc, &tokens).unwrap(), &doc));

        let scalar = json!(42);
        assert_eq!(resolve(&scalar, &tokens), Ok(&scalar));
    }

    #[test]
    fn nested_object_and_array() {
        let doc = create_test_json();
        assert_eq!(resolve(&doc, &["a", "b", "1"]), Ok(&json!(2)));
        assert_eq!(resolve(&doc, &["a", "b", "0"]), Ok(&json!(1)));
        assert_eq!(resolve(&doc, &["a", "b"]), Ok(&json!([1, 2, 3])));
    }

    #[test]
    fn returns_reference_into_tree() {
        let doc = create_test_json();
        let resolved = resolve(&doc, &["a"]).unwrap();
        assert!(std::ptr::eq(resolved, &doc["a"]));
    }

    #[test]
    fn empty_key() {
        let doc = create_test_json();
        assert_eq!(resolve(&doc, &[""]), Ok(&json!("empty key")));
    }

    #[test]
    fn null_is_distinct_from_missing() {
        let doc = create_test_json();
        assert_eq!(resolve(&doc, &["z"]), Ok(&Value::Null));
        assert_eq!(
            resolve(&doc, &["y"]),
            Err(ResolveError::KeyNotFound("y".to_string()))
        );
    }

    #[test]
    fn index_out_of_range() {
        let doc = create_test_json();
        assert_eq!(
            resolve(&doc, &["a", "b", "5"]),
            Err(ResolveError::IndexNotFound("5".to_string()))
        );
        assert_eq!(
            resolve(&doc, &["a", "b", "3"]),
            Err(ResolveError::IndexNotFound("3".to_string()))
        );
    }

    #[test]
    fn append_marker_is_never_found() {
        let doc = create_test_json();
        assert_eq!(
            resolve(&doc, &["a", "b", "-"]),
            Err(ResolveError::IndexNotFound("-".to_string()))
        );
        let empty = json!([]);
        assert_eq!(
            resolve(&empty, &["-"]),
            Err(ResolveError::IndexNotFound("-".to_string()))
        );
    }

    #[test]
    fn malformed_indices() {
        let doc = create_test_json();
        for token in ["01", "00", "+1", "-1", "1.0", "", " 1", "1e2", "one"] {
            assert_eq!(
                resolve(&doc, &["a", "b", token]),
                Err(ResolveError::InvalidIndex(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn huge_index_is_out_of_range() {
        let doc = create_test_json();
        let token = "99999999999999999999999999";
        assert_eq!(
            resolve(&doc, &["a", "b", token]),
            Err(ResolveError::IndexNotFound(token.to_string()))
        );
    }

    #[test]
    fn numeric_keys_on_objects_are_literal() {
        let doc = json!({"0": "zero", "01": "padded"});
        assert_eq!(resolve(&doc, &["0"]), Ok(&json!("zero")));
        assert_eq!(resolve(&doc, &["01"]), Ok(&json!("padded")));
        assert_eq!(
            resolve(&doc, &["-"]),
            Err(ResolveError::KeyNotFound("-".to_string()))
        );
    }

    #[test]
    fn scalars_are_not_indexable() {
        let doc = create_test_json();
        assert_eq!(
            resolve(&doc, &["x", "y"]),
            Err(ResolveError::NotIndexable {
                token: "y".to_string(),
                kind: Kind::Number
            })
        );
        assert_eq!(
            resolve(&doc, &["z", "0"]),
            Err(ResolveError::NotIndexable {
                token: "0".to_string(),
                kind: Kind::Null
            })
        );
        assert_eq!(
            resolve(&doc, &["", ""]),
            Err(ResolveError::NotIndexable {
                token: String::new(),
                kind: Kind::String
            })
        );
    }

    #[test]
    fn first_failure_wins() {
        let doc = create_test_json();
        // "c" is missing; the later malformed index is never inspected
        assert_eq!(
            resolve(&doc, &["a", "c", "01"]),
            Err(ResolveError::KeyNotFound("c".to_string()))
        );
    }

    #[test]
    fn accepts_owned_tokens() {
        let doc = create_test_json();
        let tokens = vec!["a".to_string(), "b".to_string(), "2".to_string()];
        assert_eq!(resolve(&doc, &tokens), Ok(&json!(3)));
    }

    #[test]
    fn resolution_is_deterministic() {
        let doc = create_test_json();
        let first = resolve(&doc, &["a", "b", "2"]);
        for _ in 0..3 {
            assert_eq!(resolve(&doc, &["a", "b", "2"]), first);
        }
    }

    #[test]
    fn borrowed_tree() {
        let raw = r#"{"a": {"b": [1, 2, 3]}, "x": 5}"#;
        let doc: serde_json_borrow::Value = serde_json::from_str(raw).unwrap();
        let two = resolve(&doc, &["a", "b", "1"]).unwrap();
        assert_eq!(two.kind(), Kind::Number);
        assert!(matches!(
            resolve(&doc, &["x", "y"]),
            Err(ResolveError::NotIndexable { kind: Kind::Number, .. })
        ));
    }

    #[test]
    fn parse_index_grammar() {
        assert_eq!(parse_index("0"), Ok(ArrayIndex::Index(0)));
        assert_eq!(parse_index("10"), Ok(ArrayIndex::Index(10)));
        assert_eq!(parse_index("-"), Ok(ArrayIndex::Append));
        assert_eq!(
            parse_index("--"),
            Err(ResolveError::InvalidIndex("--".to_string()))
        );
    }
}
