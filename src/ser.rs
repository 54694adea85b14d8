//! VDF encoding.
//!
//! This module provides the [`Serializer`] that walks a [`Map`] tree and
//! emits indented brace-delimited VDF text.
//!
//! ## Emission rules
//!
//! For each entry, in map iteration order:
//!
//! - scalar: `"key" "value"` on one line at the current indentation
//! - node: the key on its own line, then a brace block holding the
//!   recursively encoded body, then a blank line
//! - list of nodes: the node form repeated once per element under the
//!   same key (the inverse of multikey decoding)
//! - list of scalars: a node whose entries are `"element" "1"`; this flag
//!   convention is part of the serialization contract and is preserved
//!   verbatim even though it does not round-trip to a list
//!
//! Indentation depth is threaded through the recursion as an explicit
//! parameter, so concurrent encode calls share no state.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use steam_vdf::{to_string, vdf};
//!
//! let tree = vdf!({ "key": "value" });
//! let text = to_string(tree.as_node().unwrap()).unwrap();
//! assert_eq!(text, "\"key\" \"value\"\n");
//! ```

use crate::{Error, Map, Options, Result, Value};

/// The VDF serializer.
///
/// Accumulates document text while walking a tree. Created via
/// [`Serializer::new`]; most callers use [`to_string`](crate::to_string) or
/// [`to_vec`](crate::to_vec) instead.
pub struct Serializer {
    output: String,
    indent: usize,
}

impl Serializer {
    pub fn new(options: &Options) -> Self {
        Serializer {
            output: String::new(),
            indent: options.indent,
        }
    }

    /// Consumes the serializer, returning the accumulated document text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Encodes a whole tree at top level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for tree shapes VDF cannot express:
    /// a list nested directly inside a list, or a node element mixed into a
    /// scalar list.
    pub fn write_document(&mut self, map: &Map) -> Result<()> {
        self.write_node_body(map, 0)
    }

    fn write_node_body(&mut self, map: &Map, depth: usize) -> Result<()> {
        for (key, value) in map.iter() {
            self.write_entry(key, value, depth)?;
        }
        Ok(())
    }

    fn write_entry(&mut self, key: &str, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Scalar(scalar) => {
                self.write_indent(depth);
                self.output.push('"');
                self.output.push_str(key);
                self.output.push_str("\" \"");
                self.output.push_str(scalar);
                self.output.push_str("\"\n");
                Ok(())
            }
            Value::Node(node) => self.write_node(key, node, depth),
            Value::List(items) => self.write_list(key, items, depth),
        }
    }

    fn write_node(&mut self, key: &str, node: &Map, depth: usize) -> Result<()> {
        self.write_indent(depth);
        self.output.push('"');
        self.output.push_str(key);
        self.output.push_str("\"\n");
        self.write_indent(depth);
        self.output.push_str("{\n");
        self.write_node_body(node, depth + 1)?;
        self.write_indent(depth);
        // Blank line after the block for readability.
        self.output.push_str("}\n\n");
        Ok(())
    }

    fn write_list(&mut self, key: &str, items: &[Value], depth: usize) -> Result<()> {
        if !items.is_empty() && items.iter().all(Value::is_node) {
            // The inverse of multikey decoding: repeat the key per element.
            for item in items {
                if let Value::Node(node) = item {
                    self.write_node(key, node, depth)?;
                }
            }
            return Ok(());
        }

        // Flag convention: each scalar becomes a "1"-valued entry of a node.
        self.write_indent(depth);
        self.output.push('"');
        self.output.push_str(key);
        self.output.push_str("\"\n");
        self.write_indent(depth);
        self.output.push_str("{\n");
        for item in items {
            let Value::Scalar(scalar) = item else {
                return Err(Error::invalid_value(
                    "a list may hold only scalars, or only nodes",
                ));
            };
            self.write_indent(depth + 1);
            self.output.push('"');
            self.output.push_str(scalar);
            self.output.push_str("\" \"1\"\n");
        }
        self.write_indent(depth);
        self.output.push_str("}\n\n");
        Ok(())
    }

    fn write_indent(&mut self, depth: usize) {
        for _ in 0..depth * self.indent {
            self.output.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdf;

    fn encode(map: &Map) -> String {
        let mut serializer = Serializer::new(&Options::default());
        serializer.write_document(map).unwrap();
        serializer.into_inner()
    }

    #[test]
    fn test_scalar_entry() {
        let tree = vdf!({ "key": "value" });
        assert_eq!(encode(tree.as_node().unwrap()), "\"key\" \"value\"\n");
    }

    #[test]
    fn test_node_entry() {
        let tree = vdf!({ "node": { "key": "value" } });
        assert_eq!(
            encode(tree.as_node().unwrap()),
            "\"node\"\n{\n  \"key\" \"value\"\n}\n\n"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let tree = vdf!({ "outer": { "inner": { "key": "value" } } });
        assert_eq!(
            encode(tree.as_node().unwrap()),
            "\"outer\"\n{\n  \"inner\"\n  {\n    \"key\" \"value\"\n  }\n\n}\n\n"
        );
    }

    #[test]
    fn test_scalar_list_flag_convention() {
        let tree = vdf!({ "array": ["a", "b", "c"] });
        assert_eq!(
            encode(tree.as_node().unwrap()),
            "\"array\"\n{\n  \"a\" \"1\"\n  \"b\" \"1\"\n  \"c\" \"1\"\n}\n\n"
        );
    }

    #[test]
    fn test_node_list_repeats_key() {
        let tree = vdf!({ "node": [{ "a": "1" }, { "b": "2" }] });
        assert_eq!(
            encode(tree.as_node().unwrap()),
            "\"node\"\n{\n  \"a\" \"1\"\n}\n\n\"node\"\n{\n  \"b\" \"2\"\n}\n\n"
        );
    }

    #[test]
    fn test_empty_list_emits_empty_node() {
        let tree = vdf!({ "empty": [] });
        assert_eq!(encode(tree.as_node().unwrap()), "\"empty\"\n{\n}\n\n");
    }

    #[test]
    fn test_mixed_list_rejected() {
        let tree = vdf!({ "bad": ["a", { "b": "2" }] });
        let mut serializer = Serializer::new(&Options::default());
        let err = serializer
            .write_document(tree.as_node().unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn test_nested_list_rejected() {
        let mut map = Map::new();
        map.insert(
            "bad".to_string(),
            Value::List(vec![Value::List(vec![Value::from("x")])]),
        );
        let mut serializer = Serializer::new(&Options::default());
        let err = serializer.write_document(&map).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn test_custom_indent_width() {
        let tree = vdf!({ "node": { "key": "value" } });
        let mut serializer = Serializer::new(&Options::new().with_indent(4));
        serializer.write_document(tree.as_node().unwrap()).unwrap();
        assert_eq!(
            serializer.into_inner(),
            "\"node\"\n{\n    \"key\" \"value\"\n}\n\n"
        );
    }
}
