//! Charset detection and conversion at the codec boundary.
//!
//! VDF producers are inconsistent about text encodings: game schema files
//! are commonly UTF-16 on disk, while hand-written config files are ASCII
//! or UTF-8. The decoder therefore accepts raw bytes and tries an ordered
//! list of candidate encodings, taking the first that decodes cleanly:
//! ASCII, then UTF-8, then UTF-16 (BOM-aware, little-endian assumed when no
//! BOM is present).
//!
//! On the way out, [`encode_text`] produces bytes in the requested charset;
//! UTF-16 output carries a BOM, matching the usual on-disk artifacts.

use crate::{Error, Result};

const BOM_UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const BOM_UTF16_BE: [u8; 2] = [0xFE, 0xFF];

/// A text encoding the codec can read or write.
///
/// Returned by [`from_slice_detected`](crate::from_slice_detected) for
/// diagnostics and accepted by
/// [`Options::with_encoding`](crate::Options::with_encoding) for output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEncoding {
    /// 7-bit ASCII (a strict subset of UTF-8).
    Ascii,
    /// UTF-8.
    Utf8,
    /// UTF-16, little-endian. The default output encoding.
    Utf16Le,
    /// UTF-16, big-endian.
    Utf16Be,
}

impl TextEncoding {
    /// Returns the conventional name of this encoding.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ascii",
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
        }
    }
}

/// Decodes a raw byte buffer into text, detecting its encoding.
///
/// Candidates are tried in order: ASCII, UTF-8, UTF-16. A UTF-16 buffer
/// with a BOM is decoded in the BOM's byte order; without one,
/// little-endian is assumed.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if no candidate decodes the buffer.
pub fn decode_buffer(bytes: &[u8]) -> Result<(String, TextEncoding)> {
    if bytes.is_ascii() {
        // Infallible: ASCII is valid UTF-8.
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::encoding(&e.to_string()))?
            .to_string();
        return Ok((text, TextEncoding::Ascii));
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok((text.to_string(), TextEncoding::Utf8));
    }

    decode_utf16(bytes)
}

fn decode_utf16(bytes: &[u8]) -> Result<(String, TextEncoding)> {
    let (payload, encoding) = if bytes.starts_with(&BOM_UTF16_LE) {
        (&bytes[2..], TextEncoding::Utf16Le)
    } else if bytes.starts_with(&BOM_UTF16_BE) {
        (&bytes[2..], TextEncoding::Utf16Be)
    } else {
        (bytes, TextEncoding::Utf16Le)
    };

    if payload.len() % 2 != 0 {
        return Err(Error::encoding(
            "input is not valid ASCII, UTF-8, or UTF-16 (odd byte length)",
        ));
    }

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| match encoding {
            TextEncoding::Utf16Be => u16::from_be_bytes([pair[0], pair[1]]),
            _ => u16::from_le_bytes([pair[0], pair[1]]),
        })
        .collect();

    let text = String::from_utf16(&units)
        .map_err(|_| Error::encoding("input is not valid ASCII, UTF-8, or UTF-16"))?;
    Ok((text, encoding))
}

/// Encodes text into the requested charset.
///
/// UTF-16 output is prefixed with the matching BOM. ASCII output is emitted
/// as UTF-8 bytes (identical for ASCII-only text; non-ASCII characters pass
/// through as UTF-8 rather than being rejected).
#[must_use]
pub fn encode_text(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Ascii | TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf16Le => {
            let mut out = Vec::with_capacity(2 + text.len() * 2);
            out.extend_from_slice(&BOM_UTF16_LE);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
        TextEncoding::Utf16Be => {
            let mut out = Vec::with_capacity(2 + text.len() * 2);
            out.extend_from_slice(&BOM_UTF16_BE);
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_ascii() {
        let (text, encoding) = decode_buffer(b"\"key\" \"value\"").unwrap();
        assert_eq!(text, "\"key\" \"value\"");
        assert_eq!(encoding, TextEncoding::Ascii);
    }

    #[test]
    fn test_detect_utf8() {
        let source = "\"key\" \"v\u{00e4}lue\"";
        let (text, encoding) = decode_buffer(source.as_bytes()).unwrap();
        assert_eq!(text, source);
        assert_eq!(encoding, TextEncoding::Utf8);
    }

    #[test]
    fn test_detect_utf16_le_with_bom() {
        let bytes = encode_text("\"key\" \"value\"", TextEncoding::Utf16Le);
        let (text, encoding) = decode_buffer(&bytes).unwrap();
        assert_eq!(text, "\"key\" \"value\"");
        assert_eq!(encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn test_detect_utf16_be_with_bom() {
        let bytes = encode_text("\"key\" \"value\"", TextEncoding::Utf16Be);
        let (text, encoding) = decode_buffer(&bytes).unwrap();
        assert_eq!(text, "\"key\" \"value\"");
        assert_eq!(encoding, TextEncoding::Utf16Be);
    }

    #[test]
    fn test_detect_utf16_le_without_bom() {
        let mut bytes = Vec::new();
        for unit in "\"k\u{00e9}y\"".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let (text, encoding) = decode_buffer(&bytes).unwrap();
        assert_eq!(text, "\"k\u{00e9}y\"");
        assert_eq!(encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn test_undecodable_input() {
        // Invalid UTF-8 and an odd byte count, so no candidate matches.
        let err = decode_buffer(&[0xFF, 0xFE, 0x00]).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_utf16_roundtrip_non_bmp() {
        let source = "\"emote\" \"\u{1F600}\"";
        let bytes = encode_text(source, TextEncoding::Utf16Le);
        let (text, _) = decode_buffer(&bytes).unwrap();
        assert_eq!(text, source);
    }
}
