//! Sort-order preserving encoding for signed 64-bit integers.
//!
//! Integers use a "sign-flip" encoding:
//! - XOR with `0x8000_0000_0000_0000` flips the sign bit
//! - `i64::MIN` maps to all zero bytes, `0` to the midpoint, `i64::MAX` to all
//!   `0xFF` bytes
//! - Result is stored in big-endian format

use crate::error::{CodecResult, ValueKind};

use super::{read_exact, read_prefix, SIGN_MASK};

/// Encoded width of an `i64`.
pub const INT64_WIDTH: usize = 8;

#[inline]
const fn to_ordered(value: i64) -> u64 {
    (value as u64) ^ SIGN_MASK
}

#[inline]
const fn from_ordered(encoded: u64) -> i64 {
    (encoded ^ SIGN_MASK) as i64
}

/// Encode an `i64` into 8 order-preserving bytes.
///
/// # Example
///
/// ```
/// use ordkey_core::encoding::int64::encode_i64;
///
/// assert_eq!(encode_i64(4), [0x80, 0, 0, 0, 0, 0, 0, 0x04]);
/// assert!(encode_i64(-5) < encode_i64(5));
/// ```
#[inline]
#[must_use]
pub const fn encode_i64(value: i64) -> [u8; INT64_WIDTH] {
    to_ordered(value).to_be_bytes()
}

/// Append the encoding of `value` to `buf`.
#[inline]
pub fn encode_i64_into(value: i64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&encode_i64(value));
}

/// Decode exactly 8 bytes back into an `i64`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`](crate::CodecError::InvalidEncoding)
/// if `bytes` is not exactly 8 bytes long.
pub fn decode_i64(bytes: &[u8]) -> CodecResult<i64> {
    let raw = read_exact::<INT64_WIDTH>(ValueKind::Int64, bytes)?;
    Ok(from_ordered(u64::from_be_bytes(raw)))
}

/// Decode an `i64` from the front of `bytes`, returning it with the number
/// of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`](crate::CodecError::InvalidEncoding)
/// if fewer than 8 bytes are available.
pub fn decode_i64_prefix(bytes: &[u8]) -> CodecResult<(i64, usize)> {
    let raw = read_prefix::<INT64_WIDTH>(ValueKind::Int64, bytes)?;
    Ok((from_ordered(u64::from_be_bytes(raw)), INT64_WIDTH))
}
