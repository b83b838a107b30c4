//! Boolean encoding: `false` -> `0x00`, `true` -> `0x01`.

use crate::config::BoolDecoding;
use crate::error::{CodecError, CodecResult, InvalidReason, ValueKind};

use super::{read_exact, read_prefix};

/// Encoded width of a `bool`.
pub const BOOL_WIDTH: usize = 1;

const FALSE_BYTE: u8 = 0x00;
const TRUE_BYTE: u8 = 0x01;

#[inline]
fn from_byte(byte: u8, mode: BoolDecoding) -> CodecResult<bool> {
    match (byte, mode) {
        (FALSE_BYTE, _) => Ok(false),
        (TRUE_BYTE, _) | (_, BoolDecoding::Lenient) => Ok(true),
        (other, BoolDecoding::Strict) => {
            Err(CodecError::invalid(ValueKind::Bool, InvalidReason::InvalidBool(other)))
        }
    }
}

/// Encode a `bool` as a single byte.
#[inline]
#[must_use]
pub const fn encode_bool(value: bool) -> [u8; BOOL_WIDTH] {
    [if value { TRUE_BYTE } else { FALSE_BYTE }]
}

/// Append the encoding of `value` to `buf`.
#[inline]
pub fn encode_bool_into(value: bool, buf: &mut Vec<u8>) {
    buf.push(u8::from(value));
}

/// Decode exactly one byte in strict mode.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if `bytes` is not one byte long or
/// holds anything other than `0x00`/`0x01`.
pub fn decode_bool(bytes: &[u8]) -> CodecResult<bool> {
    decode_bool_with(bytes, BoolDecoding::Strict)
}

/// Decode exactly one byte using the given strictness.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] on a length mismatch, or in strict
/// mode on a byte other than `0x00`/`0x01`.
pub fn decode_bool_with(bytes: &[u8], mode: BoolDecoding) -> CodecResult<bool> {
    let [byte] = read_exact::<BOOL_WIDTH>(ValueKind::Bool, bytes)?;
    from_byte(byte, mode)
}

/// Decode a `bool` from the front of `bytes`, returning it with the number
/// of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`] if `bytes` is empty or, in strict
/// mode, the first byte is not `0x00`/`0x01`.
pub fn decode_bool_prefix(bytes: &[u8], mode: BoolDecoding) -> CodecResult<(bool, usize)> {
    let [byte] = read_prefix::<BOOL_WIDTH>(ValueKind::Bool, bytes)?;
    Ok((from_byte(byte, mode)?, BOOL_WIDTH))
}
