/*!
# JSON Nodes

Defines the read-only view of a JSON value tree that pointer resolution walks.
The tree itself is produced and owned by an external decoder; this module only
describes the accessors the resolver needs and implements them for
[`serde_json::Value`] and the zero-copy [`serde_json_borrow::Value`].
*/
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// The runtime tag of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A mapping from string keys to values
    Object,
    /// An ordered sequence of values
    Array,
    /// A string value
    String,
    /// A numeric value
    Number,
    /// `true` or `false`
    Boolean,
    /// The `null` value
    Null,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Object,
        Self::Array,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Null,
    ];

    /// Lowercase name of the kind, e.g., `"boolean"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown kind `{0}`, expected one of: object, array, string, number, boolean, null")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Read accessors over a JSON value tree.
///
/// Implementors report their [`Kind`] and expose by-key lookup for objects and
/// element access for arrays. The scalar accessors return `None` when the node
/// is of a different kind; they never convert between kinds.
pub trait JsonNode: Sized {
    /// The object representation handed out by [`JsonNode::as_object`].
    type Map: ?Sized;
    /// The number representation handed out by [`JsonNode::as_number`].
    type Numeric: ?Sized + Display;

    /// Returns the runtime tag of this node.
    fn kind(&self) -> Kind;

    /// Looks up `key` if this node is an object.
    fn lookup(&self, key: &str) -> Option<&Self>;

    /// Returns the elements if this node is an array.
    fn as_array(&self) -> Option<&[Self]>;

    /// Returns the object if this node is an object.
    fn as_object(&self) -> Option<&Self::Map>;

    /// Returns the number if this node is a number.
    fn as_number(&self) -> Option<&Self::Numeric>;

    /// Returns the string if this node is a string.
    fn as_str(&self) -> Option<&str>;

    /// Returns the boolean if this node is a boolean.
    fn as_bool(&self) -> Option<bool>;

    /// Key/value pairs in the order the map keeps them, duplicates included.
    /// Empty unless this node is an object.
    fn entries(&self) -> Vec<(&str, &Self)>;

    /// Number of elements if this node is an array.
    fn array_len(&self) -> Option<usize> {
        self.as_array().map(<[Self]>::len)
    }

    /// Element at `index` if this node is an array and `index` is in range.
    fn element_at(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    /// Whether this node is an object.
    fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    /// Whether this node is an array.
    fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    /// Whether this node is a string.
    fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    /// Whether this node is a number.
    fn is_number(&self) -> bool {
        self.kind() == Kind::Number
    }

    /// Whether this node is a boolean.
    fn is_boolean(&self) -> bool {
        self.kind() == Kind::Boolean
    }

    /// Whether this node is `null`.
    fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }
}

impl JsonNode for serde_json::Value {
    type Map = serde_json::Map<String, Self>;
    type Numeric = serde_json::Number;

    fn kind(&self) -> Kind {
        match self {
            Self::Object(_) => Kind::Object,
            Self::Array(_) => Kind::Array,
            Self::String(_) => Kind::String,
            Self::Number(_) => Kind::Number,
            Self::Bool(_) => Kind::Boolean,
            Self::Null => Kind::Null,
        }
    }

    fn lookup(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    fn as_object(&self) -> Option<&Self::Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<&Self::Numeric> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn entries(&self) -> Vec<(&str, &Self)> {
        match self {
            Self::Object(map) => map.iter().map(|(key, value)| (key.as_str(), value)).collect(),
            _ => Vec::new(),
        }
    }
}

impl<'ctx> JsonNode for serde_json_borrow::Value<'ctx> {
    type Map = serde_json_borrow::ObjectAsVec<'ctx>;
    type Numeric = serde_json_borrow::Number;

    fn kind(&self) -> Kind {
        match self {
            Self::Object(_) => Kind::Object,
            Self::Array(_) => Kind::Array,
            Self::Str(_) => Kind::String,
            Self::Number(_) => Kind::Number,
            Self::Bool(_) => Kind::Boolean,
            Self::Null => Kind::Null,
        }
    }

    fn lookup(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    fn as_object(&self) -> Option<&Self::Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<&Self::Numeric> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn entries(&self) -> Vec<(&str, &Self)> {
        match self {
            Self::Object(map) => map.iter().collect(),
            _ => Vec::new(),
        }
    }
}
