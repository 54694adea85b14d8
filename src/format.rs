//! VDF format notes
//!
//! This module documents the VDF (Valve Data Format) syntax as implemented
//! by this crate. It contains no code.
//!
//! # Overview
//!
//! VDF is a brace-delimited, whitespace- and comment-tolerant key/value
//! text serialization. A document is an ordered mapping from string keys to
//! values; a value is a string scalar or a nested mapping. There is no
//! framing beyond the syntax itself: no magic header and no version field.
//!
//! ```text
//! "items_game"
//! {
//!     "rarities"
//!     {
//!         "common"        "1"
//!         "rare"          "2"     // line comment
//!     }
//! }
//! ```
//!
//! # Tokens
//!
//! | Lexical class | Syntax | Notes |
//! |---------------|--------|-------|
//! | Node open | `{` | value of the preceding key is a nested node |
//! | Node close | `}` | returns to the enclosing node |
//! | Annotation | `[$TOKEN]` | platform/build conditional; discarded |
//! | Comment | `// ...` | runs to end of line; no block comments |
//! | Quoted token | `"..."` | `\"` does not terminate and is kept literally |
//! | Unquoted token | any other run of non-whitespace | |
//!
//! Quoting is optional: `node { key value }` and
//! `"node" { "key" "value" }` decode to the same tree. Newlines (LF or
//! CRLF) and blank lines only separate tokens; key/value pairing is strict
//! alternation inside each brace frame.
//!
//! # Duplicate keys (multikey)
//!
//! Keys need not be unique. A repeated key at one nesting level promotes
//! the existing entry to a list and appends:
//!
//! ```text
//! node { key a  key b  key c }
//! ```
//!
//! decodes to `{"node": {"key": ["a", "b", "c"]}}`. This applies to node
//! values as well: repeated node keys produce a list of maps, not a merge.
//!
//! # Annotations and duplicate suppression
//!
//! A bracket annotation never becomes part of the tree. Its one semantic
//! effect: once an annotation has been seen inside a node, the next commit
//! for a key that is already present is discarded instead of promoted, and
//! the annotation memory is cleared. This mirrors how producers emit
//! platform-conditional alternatives for a single logical entry.
//!
//! # Leniency
//!
//! Decoding is best-effort by default. A missing `}` ends the document at
//! end-of-input; a stray `}` at top level is inert; an unterminated quote
//! takes the rest of the buffer; a dangling key is dropped. Strict mode
//! ([`Options::strict`](crate::Options::strict)) reports these as
//! positioned syntax errors instead. Callers must not rely on the default
//! mode to detect corruption.
//!
//! # Encodings
//!
//! Producers disagree on charsets, so byte input is detected: ASCII, then
//! UTF-8, then UTF-16 (BOM-aware, little-endian without a BOM). Encoded
//! output is UTF-16 little-endian with a BOM by default, matching common
//! on-disk schema files; UTF-8 is available through
//! [`Options::with_encoding`](crate::Options::with_encoding).
//!
//! # Encoding conventions
//!
//! - scalar entry: `"key" "value"` (two spaces of indent per level)
//! - node entry: key line, brace block, blank line after the block
//! - list of scalars: the flag convention, a node of `"element" "1"`
//!   entries; decoding the output yields that node, not the original list
//! - list of nodes: the node form repeated under the same key, which
//!   decodes back to a list by the multikey rule
//!
//! Round-trips are exact for trees of scalars and nodes. Scalar lists are
//! lossy by design (the flag convention), and numeric values are strings
//! after a round trip because VDF has no number type.
