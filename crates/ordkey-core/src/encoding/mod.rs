//! Order-preserving key encoding for primitive values.
//!
//! Each codec maps one primitive type to bytes such that comparing the
//! encodings byte by byte (unsigned, lexicographic) gives the same order as
//! comparing the original values. This lets sorted storage compare keys
//! without decoding them.
//!
//! # Byte Layout
//!
//! | Type | Width | Rule |
//! |------|-------|------|
//! | `i64` | 8 | big-endian, sign bit flipped |
//! | `f64` | 8 | big-endian, sign bit set (`>= +0.0`) or all bits inverted (`<= -0.0`) |
//! | `bool` | 1 | `0x00` / `0x01` |
//! | `str` | len + 1 | UTF-8 bytes, then `0x00` |
//!
//! # Modules
//!
//! - [`int64`], [`double`], [`boolean`], [`string`] - one free-function codec per type
//! - [`KeyEncode`] / [`KeyDecode`] - the same codecs behind traits
//! - [`KeyCodec`] - codec front-end carrying a [`CodecConfig`](crate::CodecConfig)
//! - [`KeyReader`] - decodes successive values from one buffer
//!
//! # Example
//!
//! ```
//! use ordkey_core::encoding::{int64, string};
//!
//! let mut keys = vec![int64::encode_i64(10), int64::encode_i64(-10), int64::encode_i64(0)];
//! keys.sort();
//! let decoded: Vec<i64> = keys.iter().map(|k| int64::decode_i64(k).unwrap()).collect();
//! assert_eq!(decoded, [-10, 0, 10]);
//!
//! assert!(string::encode_str("foo").unwrap() < string::encode_str("foobar").unwrap());
//! ```

pub mod boolean;
pub mod double;
pub mod int64;
mod reader;
pub mod string;
mod traits;

#[cfg(test)]
mod proptest_tests;

pub use reader::KeyReader;
pub use traits::{KeyCodec, KeyDecode, KeyEncode};

use crate::error::{CodecError, CodecResult, InvalidReason, ValueKind};

/// The sign bit of a 64-bit word.
pub(crate) const SIGN_MASK: u64 = 0x8000_0000_0000_0000;

/// Copy `bytes` into a fixed array, requiring an exact length match.
fn read_exact<const N: usize>(kind: ValueKind, bytes: &[u8]) -> CodecResult<[u8; N]> {
    bytes.try_into().map_err(|_| {
        CodecError::invalid(kind, InvalidReason::WrongLength { expected: N, actual: bytes.len() })
    })
}

/// Copy the first `N` bytes of `bytes` into a fixed array.
fn read_prefix<const N: usize>(kind: ValueKind, bytes: &[u8]) -> CodecResult<[u8; N]> {
    match bytes.get(..N) {
        Some(head) => read_exact(kind, head),
        None => Err(CodecError::invalid(
            kind,
            InvalidReason::Truncated { needed: N, available: bytes.len() },
        )),
    }
}
