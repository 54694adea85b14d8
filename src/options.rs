//! Configuration options for VDF decoding and encoding.
//!
//! This module provides [`Options`], shared by both directions of the codec:
//!
//! - `indent`: spaces per nesting level on encode (default 2)
//! - `encoding`: output charset on encode (default UTF-16, the common
//!   on-disk convention for schema-like VDF files)
//! - `strict`: whether the decoder errors on malformed input instead of
//!   returning the best partial tree (default off)
//!
//! ## Examples
//!
//! ```rust
//! use steam_vdf::{to_vec_with_options, vdf, Options, TextEncoding};
//!
//! let tree = vdf!({ "key": "value" });
//! let map = tree.as_node().unwrap();
//!
//! // UTF-8 output with 4-space indentation
//! let options = Options::new()
//!     .with_indent(4)
//!     .with_encoding(TextEncoding::Utf8);
//! let bytes = to_vec_with_options(map, options).unwrap();
//! assert!(bytes.starts_with(b"\"key\""));
//! ```

use crate::encoding::TextEncoding;

/// Configuration for VDF decoding and encoding.
///
/// # Examples
///
/// ```rust
/// use steam_vdf::{Options, TextEncoding};
///
/// // Defaults: 2-space indent, UTF-16 output, lenient decoding
/// let options = Options::new();
///
/// // Strict decoding (malformed input becomes an error)
/// let options = Options::strict();
///
/// // Custom configuration
/// let options = Options::new()
///     .with_indent(4)
///     .with_encoding(TextEncoding::Utf8);
/// ```
#[derive(Clone, Debug)]
pub struct Options {
    pub indent: usize,
    pub encoding: TextEncoding,
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: 2,
            encoding: TextEncoding::Utf16Le,
            strict: false,
        }
    }
}

impl Options {
    /// Creates default options (2-space indent, UTF-16 output, lenient decoding).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steam_vdf::Options;
    ///
    /// let options = Options::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.strict);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with strict decoding enabled.
    ///
    /// Strict decoding turns each lenient recovery (unterminated quote,
    /// unbalanced brace, key without value, ...) into an
    /// [`Error::Syntax`](crate::Error::Syntax).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steam_vdf::Options;
    ///
    /// let options = Options::strict();
    /// assert!(options.strict);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        Options {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets the indentation width (spaces per nesting level) for encoding.
    ///
    /// Default is 2.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the output charset used by [`to_vec`](crate::to_vec).
    ///
    /// Default is [`TextEncoding::Utf16Le`], matching the most common
    /// on-disk convention.
    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets whether decoding should fail on malformed input.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
