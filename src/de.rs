//! VDF decoding.
//!
//! This module provides the [`Parser`] that turns VDF text into a tree of
//! nested ordered maps.
//!
//! ## Overview
//!
//! - **Single-pass parsing**: one linear O(n) scan, no token list, no
//!   backtracking
//! - **Lenient by default**: malformed input yields the best partial tree
//!   reached rather than an error; real-world VDF producers are sloppy and
//!   callers should not depend on corruption being detected here
//! - **Strict mode**: [`Options::strict`](crate::Options::strict) turns
//!   each lenient recovery into a positioned [`Error::Syntax`]
//! - **Multikey handling**: a key repeated at one nesting level promotes
//!   the entry to a [`Value::List`] and appends, preserving encounter order
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use steam_vdf::from_str;
//!
//! let tree = from_str("\"node\"\n{\n  \"key\" \"value\"\n}\n").unwrap();
//! let node = tree.get("node").unwrap();
//! assert_eq!(node.get("key").and_then(|v| v.as_str()), Some("value"));
//! ```
//!
//! ## Syntax handled
//!
//! Quoted and unquoted tokens, nested braces, `//` line comments, CRLF and
//! LF line endings, and `[$TOKEN]` bracket annotations (discarded, except
//! that an annotation seen for an already-present key suppresses the
//! duplicate commit). Newlines separate tokens but carry no structure:
//! key/value pairing is strict alternation within each brace frame.

use crate::{Error, Map, Options, Result, Value};

/// The VDF parser.
///
/// Scans an in-memory string into a [`Map`] tree. Created via
/// [`Parser::from_str`]; most callers use [`from_str`](crate::from_str) or
/// [`from_slice`](crate::from_slice) instead.
pub struct Parser<'de> {
    input: &'de str,
    position: usize,
    line: usize,
    column: usize,
    strict: bool,
}

impl<'de> Parser<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Self::with_options(input, &Options::default())
    }

    pub fn with_options(input: &'de str, options: &Options) -> Self {
        Parser {
            input,
            position: 0,
            line: 1,
            column: 1,
            strict: options.strict,
        }
    }

    /// Parses the whole buffer into the top-level map.
    ///
    /// # Errors
    ///
    /// In lenient mode (the default), only never. In strict mode, returns
    /// [`Error::Syntax`] on the first structural problem.
    pub fn parse(&mut self) -> Result<Map> {
        self.parse_node(true)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(ch)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn syntax_error(&self, msg: &str) -> Error {
        Error::syntax(self.line, self.column, msg)
    }

    /// One brace frame. `top_level` frames end at end-of-input instead of `}`.
    fn parse_node(&mut self, top_level: bool) -> Result<Map> {
        let mut map = Map::new();
        // The key waiting for its value; tokens alternate key/value.
        let mut pending_key: Option<String> = None;
        // Sticky until it suppresses a duplicate, matching observed
        // producer behavior for platform-conditional entries.
        let mut annotated = false;

        loop {
            self.skip_whitespace();

            let Some(ch) = self.peek_char() else {
                if self.strict {
                    if !top_level {
                        return Err(self.syntax_error("unexpected end of input, expected '}'"));
                    }
                    if pending_key.is_some() {
                        return Err(self.syntax_error("key without a value at end of input"));
                    }
                }
                // Lenient: missing close braces end every open frame here,
                // and a dangling key is dropped.
                return Ok(map);
            };

            match ch {
                '{' => {
                    self.next_char();
                    let node = self.parse_node(false)?;
                    match pending_key.take() {
                        Some(key) => commit(&mut map, &mut annotated, key, Value::Node(node)),
                        None => {
                            if self.strict {
                                return Err(self.syntax_error("'{' without a preceding key"));
                            }
                            // Lenient: the anonymous node is parsed and dropped.
                        }
                    }
                }
                '}' => {
                    self.next_char();
                    if !top_level {
                        if self.strict && pending_key.is_some() {
                            return Err(self.syntax_error("key without a value before '}'"));
                        }
                        return Ok(map);
                    }
                    if self.strict {
                        return Err(self.syntax_error("unmatched '}' at top level"));
                    }
                    // Lenient: a stray close brace at top level is inert.
                }
                '[' => {
                    self.skip_annotation()?;
                    annotated = true;
                }
                '/' if self.input[self.position..].starts_with("//") => {
                    self.skip_comment();
                }
                _ => {
                    let token = if ch == '"' {
                        self.read_quoted()?
                    } else {
                        self.read_unquoted()
                    };
                    match pending_key.take() {
                        None => pending_key = Some(token),
                        Some(key) => commit(&mut map, &mut annotated, key, Value::Scalar(token)),
                    }
                }
            }
        }
    }

    /// Reads a quoted token. The value is the raw substring between the
    /// quotes; a quote preceded by a backslash does not terminate and the
    /// backslash is preserved literally (no unescaping).
    fn read_quoted(&mut self) -> Result<String> {
        self.next_char(); // opening quote
        let start = self.position;
        let mut prev = '\0';

        while let Some(ch) = self.peek_char() {
            if ch == '"' && prev != '\\' {
                let token = self.input[start..self.position].to_string();
                self.next_char(); // closing quote
                return Ok(token);
            }
            prev = ch;
            self.next_char();
        }

        if self.strict {
            return Err(self.syntax_error("unterminated quoted token"));
        }
        // Lenient: the rest of the buffer is the token.
        Ok(self.input[start..].to_string())
    }

    /// Reads an unquoted token: everything up to the next whitespace.
    fn read_unquoted(&mut self) -> String {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n' {
                break;
            }
            self.next_char();
        }
        self.input[start..self.position].to_string()
    }

    /// Skips a bracket annotation such as `[$WIN32]`. Bracket content is
    /// never nested and contains no escapes.
    fn skip_annotation(&mut self) -> Result<()> {
        self.next_char(); // '['
        while let Some(ch) = self.next_char() {
            if ch == ']' {
                return Ok(());
            }
        }
        if self.strict {
            return Err(self.syntax_error("unterminated bracket annotation"));
        }
        Ok(())
    }

    /// Skips a `//` comment up to (not including) the next newline.
    fn skip_comment(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch == '\n' {
                break;
            }
            self.next_char();
        }
    }
}

/// Commits `key -> value` into `map`.
///
/// If the key is already present and an annotation was captured since the
/// last suppression, the value is an annotation-suppressed duplicate: it is
/// discarded and the annotation memory cleared. Otherwise an existing entry
/// is promoted to a list and the value appended.
fn commit(map: &mut Map, annotated: &mut bool, key: String, value: Value) {
    if *annotated && map.contains_key(&key) {
        *annotated = false;
        return;
    }

    if let Some(existing) = map.get_mut(&key) {
        if let Value::List(items) = existing {
            items.push(value);
        } else {
            let previous = std::mem::replace(existing, Value::List(Vec::with_capacity(2)));
            if let Value::List(items) = existing {
                items.push(previous);
                items.push(value);
            }
        }
        return;
    }
    map.insert(key, value);
}
