//! Sort-order preserving encoding for IEEE-754 doubles.
//!
//! IEEE-754 bit patterns are sign-magnitude, so the raw bits only sort
//! correctly among values of the same sign, and negative values sort in
//! reverse. The transform:
//!
//! - Sign bit clear (`+0.0` and above): XOR with `0x8000_0000_0000_0000`,
//!   lifting every non-negative value above all negative ones
//! - Sign bit set (`-0.0` and below): flip all bits, reversing the order of
//!   the negative range and dropping it below the non-negative range
//! - Result is stored in big-endian format
//!
//! The branch is on the sign bit, not on `value >= 0.0`: `-0.0 >= 0.0` holds
//! numerically, and taking that path would send `-0.0` below `-inf`.
//!
//! Resulting order, lowest first:
//!
//! ```text
//! -NaN < -inf < ... < -MIN_POSITIVE < -subnormal < -0.0 < +0.0 < subnormal < ... < +inf < +NaN
//! ```
//!
//! NaN payloads land outside the infinities according to their sign bit.
//! Callers must not rely on where NaN sorts.

use crate::config::ZeroPolicy;
use crate::error::{CodecResult, ValueKind};

use super::{read_exact, read_prefix, SIGN_MASK};

/// Encoded width of an `f64`.
pub const DOUBLE_WIDTH: usize = 8;

#[inline]
const fn to_ordered(bits: u64) -> u64 {
    if bits & SIGN_MASK == 0 {
        bits ^ SIGN_MASK
    } else {
        !bits
    }
}

#[inline]
const fn from_ordered(encoded: u64) -> u64 {
    if encoded & SIGN_MASK != 0 {
        encoded ^ SIGN_MASK
    } else {
        !encoded
    }
}

/// Encode an `f64` into 8 order-preserving bytes.
///
/// `-0.0` and `+0.0` keep distinct, adjacent encodings. Use
/// [`encode_f64_with`] and [`ZeroPolicy::Canonical`] to fold them together.
///
/// # Example
///
/// ```
/// use ordkey_core::encoding::double::encode_f64;
///
/// assert!(encode_f64(f64::NEG_INFINITY) < encode_f64(-1.0));
/// assert!(encode_f64(-0.0) < encode_f64(0.0));
/// assert!(encode_f64(1.0) < encode_f64(f64::INFINITY));
/// ```
#[inline]
#[must_use]
pub fn encode_f64(value: f64) -> [u8; DOUBLE_WIDTH] {
    to_ordered(value.to_bits()).to_be_bytes()
}

/// Encode an `f64` applying the given negative zero policy.
#[inline]
#[must_use]
pub fn encode_f64_with(value: f64, zero_policy: ZeroPolicy) -> [u8; DOUBLE_WIDTH] {
    match zero_policy {
        // `-0.0 == 0.0`, so this also folds `-0.0`.
        ZeroPolicy::Canonical if value == 0.0 => encode_f64(0.0),
        _ => encode_f64(value),
    }
}

/// Append the encoding of `value` to `buf`.
#[inline]
pub fn encode_f64_into(value: f64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&encode_f64(value));
}

/// Decode exactly 8 bytes back into an `f64`.
///
/// The transform is a bijection on 64-bit patterns, so any 8 bytes decode,
/// and the result is bit-identical to the encoded value (NaN payloads and the
/// sign of zero included).
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`](crate::CodecError::InvalidEncoding)
/// if `bytes` is not exactly 8 bytes long.
pub fn decode_f64(bytes: &[u8]) -> CodecResult<f64> {
    let raw = read_exact::<DOUBLE_WIDTH>(ValueKind::Double, bytes)?;
    Ok(f64::from_bits(from_ordered(u64::from_be_bytes(raw))))
}

/// Decode an `f64` from the front of `bytes`, returning it with the number
/// of bytes consumed.
///
/// # Errors
///
/// Returns [`CodecError::InvalidEncoding`](crate::CodecError::InvalidEncoding)
/// if fewer than 8 bytes are available.
pub fn decode_f64_prefix(bytes: &[u8]) -> CodecResult<(f64, usize)> {
    let raw = read_prefix::<DOUBLE_WIDTH>(ValueKind::Double, bytes)?;
    Ok((f64::from_bits(from_ordered(u64::from_be_bytes(raw))), DOUBLE_WIDTH))
}
