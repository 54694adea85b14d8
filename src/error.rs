//! Error types for VDF decoding and encoding.
//!
//! ## Error Categories
//!
//! - **Syntax errors**: malformed VDF, reported with line/column position.
//!   Only raised in strict mode; the default decoder is lenient and returns
//!   the best partial tree it reached instead.
//! - **Encoding errors**: byte input that is not decodable as ASCII, UTF-8,
//!   or UTF-16.
//! - **Invalid values**: tree shapes the encoder cannot express, such as a
//!   list nested directly inside a list.
//! - **I/O errors**: reader/writer failures in the convenience entry points.
//!
//! ## Examples
//!
//! ```rust
//! use steam_vdf::{from_str_with_options, Options};
//!
//! let result = from_str_with_options("\"node\" { \"key\"", Options::strict());
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during VDF decoding/encoding.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed VDF syntax, with source position (strict mode only)
    #[error("Syntax error at line {line}, column {column}: {msg}")]
    Syntax {
        line: usize,
        column: usize,
        msg: String,
    },

    /// Byte input not decodable as ASCII, UTF-8, or UTF-16
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A tree shape the encoder cannot express
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use steam_vdf::Error;
    ///
    /// let err = Error::syntax(10, 5, "unterminated quoted token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, column: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            column,
            msg: msg.to_string(),
        }
    }

    /// Creates an encoding error for undecodable byte input.
    pub fn encoding(msg: &str) -> Self {
        Error::Encoding(msg.to_string())
    }

    /// Creates an invalid-value error for tree shapes the encoder rejects.
    pub fn invalid_value(msg: &str) -> Self {
        Error::InvalidValue(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
