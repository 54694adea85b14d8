//! # steam-vdf
//!
//! A lenient parser and serializer for Valve's VDF key/value text format.
//!
//! ## What is VDF?
//!
//! VDF (Valve Data Format, also known as KeyValues) is the brace-delimited
//! text format Steam and Source-engine games use for item schemas, manifests,
//! and configuration. A document is an ordered tree of string keys mapping to
//! string scalars or nested nodes, with `//` comments, optional quoting, and
//! `[$PLATFORM]` conditional annotations.
//!
//! ## Key Features
//!
//! - **Lenient by default**: real-world VDF is sloppy; malformed input
//!   produces the best partial tree reached instead of an error, with an
//!   opt-in strict mode for validation
//! - **Order preserving**: nodes are ordered maps, so decode/encode keeps
//!   the source declaration order
//! - **Multikey aware**: a key repeated at one level decodes to a list,
//!   preserving encounter order
//! - **Encoding agnostic**: byte input is auto-detected among ASCII, UTF-8,
//!   and UTF-16; output is UTF-16 by default to match on-disk schema files
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! steam-vdf = "0.1"
//! ```
//!
//! ### Decoding
//!
//! ```rust
//! use steam_vdf::from_str;
//!
//! let source = r#"
//! "node"
//! {
//!     // comments are transparent
//!     "key" "value"
//!     count 3
//! }
//! "#;
//!
//! let tree = from_str(source).unwrap();
//! let node = tree.get("node").unwrap();
//! assert_eq!(node.get("key").and_then(|v| v.as_str()), Some("value"));
//! assert_eq!(node.get("count").and_then(|v| v.as_i64()), Some(3));
//! ```
//!
//! ### Encoding
//!
//! ```rust
//! use steam_vdf::{to_string, to_vec, vdf};
//!
//! let tree = vdf!({
//!     "node": {
//!         "key": "value"
//!     }
//! });
//! let map = tree.as_node().unwrap();
//!
//! // Document text
//! let text = to_string(map).unwrap();
//! assert!(text.starts_with("\"node\""));
//!
//! // On-disk bytes: UTF-16 little-endian with a BOM by default
//! let bytes = to_vec(map).unwrap();
//! assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
//! ```
//!
//! ### Detecting the input encoding
//!
//! ```rust
//! use steam_vdf::{from_slice_detected, TextEncoding};
//!
//! let (tree, encoding) = from_slice_detected(b"\"key\" \"value\"").unwrap();
//! assert_eq!(encoding, TextEncoding::Ascii);
//! assert_eq!(tree.get("key").and_then(|v| v.as_str()), Some("value"));
//! ```
//!
//! ## Scope
//!
//! This crate is only the text codec: a complete in-memory buffer in, a
//! tree out, and vice versa. There is no binary-VDF support, no schema
//! validation, no streaming parse, and comments are not written back.
//!
//! ## Performance Characteristics
//!
//! - **Decoding**: O(n), single pass, no token list materialized
//! - **Encoding**: O(n) walk in map iteration order
//! - **Concurrency**: no shared state between calls; encode depth is an
//!   explicit parameter, so concurrent calls are safe

pub mod de;
pub mod encoding;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use encoding::TextEncoding;
pub use error::{Error, Result};
pub use map::Map;
pub use options::Options;
pub use ser::Serializer;
pub use value::Value;

use std::io;

/// Decodes a VDF document from a string.
///
/// Decoding is lenient: malformed input yields whatever partial tree the
/// parser reached. Use [`from_str_with_options`] with
/// [`Options::strict`] to fail on malformed input instead.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::from_str;
///
/// let tree = from_str("\"node\"\n{\n  \"key\" \"value\"\n}\n").unwrap();
/// assert!(tree.get("node").is_some());
/// ```
///
/// # Errors
///
/// Never fails in the default lenient mode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Map> {
    from_str_with_options(s, Options::default())
}

/// Decodes a VDF document from a string with custom options.
///
/// # Errors
///
/// Returns [`Error::Syntax`] on malformed input when `options.strict` is set.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: Options) -> Result<Map> {
    Parser::with_options(s, &options).parse()
}

/// Decodes a VDF document from bytes, detecting the charset.
///
/// Candidate encodings are tried in order (ASCII, UTF-8, UTF-16) and the
/// first that decodes cleanly wins. Use [`from_slice_detected`] to also
/// learn which encoding matched.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::from_slice;
///
/// let tree = from_slice(b"\"key\" \"value\"").unwrap();
/// assert_eq!(tree.get("key").and_then(|v| v.as_str()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] if the bytes decode under none of the
/// candidate charsets.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Map> {
    from_slice_detected(bytes).map(|(map, _)| map)
}

/// Decodes a VDF document from bytes, returning the detected charset too.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::{from_slice_detected, TextEncoding};
///
/// let (_, encoding) = from_slice_detected(b"key value").unwrap();
/// assert_eq!(encoding, TextEncoding::Ascii);
/// ```
///
/// # Errors
///
/// Returns [`Error::Encoding`] for undecodable bytes, and [`Error::Syntax`]
/// in strict mode for malformed documents.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_detected(bytes: &[u8]) -> Result<(Map, TextEncoding)> {
    from_slice_detected_with_options(bytes, Options::default())
}

/// Decodes a VDF document from bytes with custom options, returning the
/// detected charset too.
///
/// # Errors
///
/// Returns [`Error::Encoding`] for undecodable bytes, and [`Error::Syntax`]
/// in strict mode for malformed documents.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice_detected_with_options(
    bytes: &[u8],
    options: Options,
) -> Result<(Map, TextEncoding)> {
    let (text, detected) = encoding::decode_buffer(bytes)?;
    let map = from_str_with_options(&text, options)?;
    Ok((map, detected))
}

/// Decodes a VDF document from an I/O stream.
///
/// The whole stream is read into memory first; there is no incremental
/// parsing.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::from_reader;
/// use std::io::Cursor;
///
/// let cursor = Cursor::new(b"\"key\" \"value\"");
/// let tree = from_reader(cursor).unwrap();
/// assert_eq!(tree.get("key").and_then(|v| v.as_str()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, or any [`from_slice`] error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Map>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_slice(&bytes)
}

/// Encodes a tree to VDF document text.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::{to_string, vdf};
///
/// let tree = vdf!({ "key": "value" });
/// let text = to_string(tree.as_node().unwrap()).unwrap();
/// assert_eq!(text, "\"key\" \"value\"\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for tree shapes VDF cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(map: &Map) -> Result<String> {
    to_string_with_options(map, Options::default())
}

/// Encodes a tree to VDF document text with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for tree shapes VDF cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(map: &Map, options: Options) -> Result<String> {
    let mut serializer = Serializer::new(&options);
    serializer.write_document(map)?;
    Ok(serializer.into_inner())
}

/// Encodes a tree to VDF bytes, UTF-16 little-endian with a BOM by default.
///
/// This matches the most common on-disk convention for schema-like VDF
/// files. Select UTF-8 output with
/// [`Options::with_encoding`] and [`to_vec_with_options`].
///
/// # Examples
///
/// ```rust
/// use steam_vdf::{from_slice, to_vec, vdf};
///
/// let tree = vdf!({ "key": "value" });
/// let bytes = to_vec(tree.as_node().unwrap()).unwrap();
/// let back = from_slice(&bytes).unwrap();
/// assert_eq!(back.get("key").and_then(|v| v.as_str()), Some("value"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for tree shapes VDF cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec(map: &Map) -> Result<Vec<u8>> {
    to_vec_with_options(map, Options::default())
}

/// Encodes a tree to VDF bytes with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] for tree shapes VDF cannot express.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options(map: &Map, options: Options) -> Result<Vec<u8>> {
    let text = to_string_with_options(map, options.clone())?;
    Ok(encoding::encode_text(&text, options.encoding))
}

/// Encodes a tree to a writer in the configured output charset.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::{to_writer, vdf};
///
/// let tree = vdf!({ "key": "value" });
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, tree.as_node().unwrap()).unwrap();
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails, or any [`to_vec`] error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, map: &Map) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, map, Options::default())
}

/// Encodes a tree to a writer with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails, or any [`to_vec`] error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(mut writer: W, map: &Map, options: Options) -> Result<()>
where
    W: io::Write,
{
    let bytes = to_vec_with_options(map, options)?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
