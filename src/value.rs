//! Dynamic value representation for VDF data.
//!
//! This module provides the [`Value`] enum which represents any value that
//! can appear inside a VDF document. VDF is a dynamically shaped format:
//! every entry is either a string scalar, a nested node, or a list of
//! repeated values when the same key occurs more than once at one level.
//!
//! ## Core Types
//!
//! - [`Value`]: a scalar string, a nested node, or a multikey list
//! - [`Map`](crate::Map): the ordered key/value map backing a node
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use steam_vdf::{vdf, Value};
//!
//! // From primitives
//! let text = Value::from("hello");
//! let number = Value::from(42); // numbers become their string form
//!
//! // Using the vdf! macro
//! let tree = vdf!({
//!     "node": {
//!         "key": "value"
//!     }
//! });
//! assert!(tree.is_node());
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use steam_vdf::Value;
//!
//! let value = Value::from("440");
//! assert!(value.is_scalar());
//! assert_eq!(value.as_str(), Some("440"));
//! ```

use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any VDF value.
///
/// The decoder produces `Scalar` for quoted/unquoted tokens, `Node` for
/// brace-delimited blocks, and `List` when the same key occurs more than
/// once at one nesting level. The encoder accepts the same three shapes.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::{Map, Value};
///
/// let scalar = Value::Scalar("value".to_string());
/// let node = Value::Node(Map::new());
/// let list = Value::List(vec![scalar.clone()]);
///
/// assert!(scalar.is_scalar());
/// assert!(node.is_node());
/// assert!(list.is_list());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A string scalar. Numeric literals in VDF are strings like any other.
    Scalar(String),
    /// A nested brace-delimited node.
    Node(Map),
    /// Repeated values for a key that occurred more than once.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if the value is a string scalar.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` if the value is a nested node.
    #[inline]
    #[must_use]
    pub const fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    /// Returns `true` if the value is a multikey list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// If the value is a scalar, returns it as a `&str`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steam_vdf::Value;
    ///
    /// assert_eq!(Value::from("tf2").as_str(), Some("tf2"));
    /// assert_eq!(Value::List(vec![]).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a node, returns a reference to its map. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&Map> {
        match self {
            Value::Node(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is a multikey list, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a scalar that parses as an integer, returns it.
    ///
    /// VDF carries numbers as strings; this is the usual way back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steam_vdf::Value;
    ///
    /// assert_eq!(Value::from("1024").as_i64(), Some(1024));
    /// assert_eq!(Value::from("bees").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_str().and_then(|s| s.parse().ok())
    }

    /// Looks up `key` if the value is a node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steam_vdf::from_str;
    ///
    /// let tree = from_str("\"node\" { \"key\" \"value\" }").unwrap();
    /// let node = tree.get("node").unwrap();
    /// assert_eq!(node.get("key").and_then(|v| v.as_str()), Some("value"));
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_node().and_then(|map| map.get(key))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "\"{}\"", s),
            Value::Node(map) => write!(f, "{{{} entries}}", map.len()),
            Value::List(items) => write!(f, "[{} values]", items.len()),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        // VDF convention for flags
        Value::Scalar(if value { "1" } else { "0" }.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Node(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Scalar(s) => serializer.serialize_str(s),
            Value::Node(map) => map.serialize(serializer),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, map, or sequence")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::Scalar(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                // VDF has no null; the empty scalar is its stand-in.
                Ok(Value::Scalar(String::new()))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Scalar(String::new()))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(element) = seq.next_element()? {
                    items.push(element);
                }
                Ok(Value::List(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    entries.insert(key, value);
                }
                Ok(Value::Node(entries))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
