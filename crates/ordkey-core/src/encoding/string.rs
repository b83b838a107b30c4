//! NUL-terminated UTF-8 string encoding.
//!
//! A string is stored as its UTF-8 bytes followed by a single `0x00`
//! terminator. When one string is a strict prefix of another the terminator
//! compares below whatever byte the longer string continues with, so
//! `"foo" < "foobar"` holds on the encoded bytes as well:
//!
//! ```text
//! "foo"    -> 66 6F 6F 00
//! "foobar" -> 66 6F 6F 62 61 72 00
//! ```
//!
//! This only works while no content byte is `0x00`. UTF-8 produces that byte
//! for U+0000 alone, so strings containing it are rejected on encode.

use std::str;

use crate::error::{CodecError, CodecResult, InvalidReason, ValueKind};

/// The byte that ends every encoded string.
pub const TERMINATOR: u8 = 0x00;

/// Encoded length of `value` (content plus terminator).
#[inline]
#[must_use]
pub const fn encoded_str_len(value: &str) -> usize {
    value.len() + 1
}

fn check_no_nul(value: &str) -> CodecResult<()> {
    match value.bytes().position(|b| b == TERMINATOR) {
        Some(position) => Err(CodecError::EmbeddedNul { position }),
        None => Ok(()),
    }
}

/// Encode a string as UTF-8 plus a `0x00` terminator.
///
/// # Errors
///
/// Returns [`CodecError::EmbeddedNul`] if `value` contains U+0000.
///
/// # Example
///
/// ```
/// use ordkey_core::encoding::string::encode_str;
///
/// assert_eq!(encode_str("foo").unwrap(), b"foo\0");
/// assert!(encode_str("foo").unwrap() < encode_str("foobar").unwrap());
/// ```
pub fn encode_str(value: &str) -> CodecResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(encoded_str_len(value));
    encode_str_into(value, &mut buf)?;
    Ok(buf)
}

/// Append the encoding of `value` to `buf`.
///
/// `buf` is left untouched on error.
///
/// # Errors
///
/// Returns [`CodecError::EmbeddedNul`] if `value` contains U+0000.
pub fn encode_str_into(value: &str, buf: &mut Vec<u8>) -> CodecResult<()> {
    check_no_nul(value)?;
    buf.reserve(encoded_str_len(value));
    buf.extend_from_slice(value.as_bytes());
    buf.push(TERMINATOR);
    Ok(())
}

/// Decode a string from the front of `bytes` without copying.
///
/// Returns the borrowed content and the number of bytes consumed, terminator
/// included. Bytes after the terminator are ignored.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if there is no terminator or the
/// content is not valid UTF-8.
pub fn decode_str_prefix(bytes: &[u8]) -> CodecResult<(&str, usize)> {
    let end = bytes
        .iter()
        .position(|&b| b == TERMINATOR)
        .ok_or(CodecError::invalid(ValueKind::String, InvalidReason::MissingTerminator))?;

    let content = str::from_utf8(&bytes[..end]).map_err(|e| {
        CodecError::invalid(
            ValueKind::String,
            InvalidReason::InvalidUtf8 { valid_up_to: e.valid_up_to() },
        )
    })?;

    Ok((content, end + 1))
}

/// Decode the string at the start of `bytes`.
///
/// Reads up to the first `0x00`; anything after the terminator is ignored.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if there is no terminator or the
/// content is not valid UTF-8.
pub fn decode_str(bytes: &[u8]) -> CodecResult<String> {
    decode_str_prefix(bytes).map(|(content, _)| content.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(encode_str("foo").unwrap(), [0x66, 0x6F, 0x6F, 0x00]);
        assert_eq!(encode_str("").unwrap(), [0x00]);
        assert_eq!(encoded_str_len("日本"), 7);
        assert_eq!(encode_str("日本").unwrap().len(), 7);
    }

    #[test]
    fn prefix_sorts_first() {
        assert!(encode_str("foo").unwrap() < encode_str("foobar").unwrap());
        assert!(encode_str("bar").unwrap() < encode_str("foo").unwrap());
        assert!(encode_str("").unwrap() < encode_str("a").unwrap());
    }

    #[test]
    fn sort_order() {
        let values = ["", "a", "aa", "ab", "b", "hello", "world", "é", "日本語", "\u{1F600}"];
        let mut encoded: Vec<_> = values.iter().map(|s| encode_str(s).unwrap()).collect();
        let original_order = encoded.clone();
        encoded.sort();
        assert_eq!(encoded, original_order, "strings should maintain sort order");
    }

    #[test]
    fn roundtrip() {
        for s in ["", "a", "hello world", "日本語", "\u{1F600}", "\u{7F}\u{80}"] {
            assert_eq!(decode_str(&encode_str(s).unwrap()).unwrap(), s, "failed for {s:?}");
        }
    }

    #[test]
    fn embedded_nul_rejected() {
        assert_eq!(encode_str("ab\0c").unwrap_err(), CodecError::EmbeddedNul { position: 2 });

        let mut buf = vec![0x01];
        assert!(encode_str_into("\0", &mut buf).is_err());
        assert_eq!(buf, [0x01]);
    }

    #[test]
    fn decode_missing_terminator() {
        let err = decode_str(b"hello").unwrap_err();
        assert_eq!(err.reason(), Some(InvalidReason::MissingTerminator));
        assert!(decode_str(&[]).is_err());
    }

    #[test]
    fn decode_invalid_utf8() {
        let err = decode_str(&[b'a', 0xFF, 0xFE, 0x00]).unwrap_err();
        assert_eq!(err.reason(), Some(InvalidReason::InvalidUtf8 { valid_up_to: 1 }));
    }

    #[test]
    fn decode_stops_at_first_terminator() {
        assert_eq!(decode_str(b"foo\0bar").unwrap(), "foo");
        assert_eq!(decode_str(b"foo\0bar\0").unwrap(), "foo");
        assert_eq!(decode_str(b"\0\0").unwrap(), "");
    }

    #[test]
    fn prefix_decode_is_borrowed() {
        let mut buf = Vec::new();
        encode_str_into("hello", &mut buf).unwrap();
        encode_str_into("world", &mut buf).unwrap();

        let (first, consumed) = decode_str_prefix(&buf).unwrap();
        assert_eq!(first, "hello");
        assert_eq!(consumed, 6);
        assert_eq!(first.as_ptr(), buf.as_ptr());

        let (second, rest) = decode_str_prefix(&buf[consumed..]).unwrap();
        assert_eq!(second, "world");
        assert_eq!(consumed + rest, buf.len());
    }
}
