/*!
# `jpointer` Library

Resolves [RFC 6901](https://datatracker.ietf.org/doc/html/rfc6901) JSON
Pointers against an already parsed JSON value tree.

A pointer string is first split into unescaped reference tokens by the
[`tokenizer`], then the [resolver](mod@resolve) walks the tree one token at a time. The
[`access`] module layers kind-checked lookups on top.

```
use jpointer::{access, get};
use serde_json::json;

let doc = json!({"a": {"b": [1, 2, 3]}});
assert_eq!(get(&doc, "/a/b/1").unwrap(), &json!(2));
assert_eq!(access::as_array(&doc, "/a/b").unwrap().len(), 3);
```
*/

pub mod access;
pub mod commands;
pub mod node;
pub mod pointer;
pub mod resolve;
pub mod tokenizer;
pub mod utils;

// Re-exports
pub use access::AccessError;
pub use node::{JsonNode, Kind};
pub use pointer::{Pointer, PointerError, get};
pub use resolve::{ResolveError, resolve};
pub use tokenizer::{ParseError, tokenize};
