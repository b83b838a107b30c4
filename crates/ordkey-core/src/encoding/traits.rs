//! Encoding and decoding traits over the primitive codecs.

use crate::config::{BoolDecoding, CodecConfig};
use crate::error::{CodecResult, ValueKind};

use super::boolean::{
    decode_bool_prefix, decode_bool_with, encode_bool, encode_bool_into, BOOL_WIDTH,
};
use super::double::{
    decode_f64, decode_f64_prefix, encode_f64, encode_f64_into, encode_f64_with, DOUBLE_WIDTH,
};
use super::int64::{decode_i64, decode_i64_prefix, encode_i64, encode_i64_into, INT64_WIDTH};
use super::string::{decode_str, decode_str_prefix, encode_str, encode_str_into, encoded_str_len};

/// A type with an order-preserving key encoding.
///
/// For two values `a` and `b` of the same type, `a < b` implies
/// `a.encode_key()? < b.encode_key()?` under byte-wise comparison.
pub trait KeyEncode {
    /// Encode this value to a fresh buffer.
    ///
    /// # Errors
    ///
    /// Only strings can fail, see [`CodecError::EmbeddedNul`](crate::CodecError::EmbeddedNul).
    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode_key_to(&mut buf)?;
        Ok(buf)
    }

    /// Append the encoding of this value to `buf`.
    ///
    /// # Errors
    ///
    /// Only strings can fail, see [`CodecError::EmbeddedNul`](crate::CodecError::EmbeddedNul).
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()>;

    /// Number of bytes [`encode_key`](Self::encode_key) produces.
    fn encoded_len(&self) -> usize;
}

/// A type that can be decoded from its order-preserving key encoding.
pub trait KeyDecode: Sized {
    /// The kind reported in decode errors.
    const KIND: ValueKind;

    /// Decode a buffer holding exactly one encoded value.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEncoding`](crate::CodecError::InvalidEncoding)
    /// if the bytes are malformed or have the wrong length.
    fn decode_key(bytes: &[u8]) -> CodecResult<Self>;

    /// Decode one value from the front of `bytes`, returning it with the
    /// number of bytes consumed.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEncoding`](crate::CodecError::InvalidEncoding)
    /// if the bytes are malformed or truncated.
    fn decode_key_prefix(bytes: &[u8]) -> CodecResult<(Self, usize)>;
}

impl KeyEncode for i64 {
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        encode_i64_into(*self, buf);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        INT64_WIDTH
    }
}

impl KeyDecode for i64 {
    const KIND: ValueKind = ValueKind::Int64;

    fn decode_key(bytes: &[u8]) -> CodecResult<Self> {
        decode_i64(bytes)
    }

    fn decode_key_prefix(bytes: &[u8]) -> CodecResult<(Self, usize)> {
        decode_i64_prefix(bytes)
    }
}

impl KeyEncode for f64 {
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        encode_f64_into(*self, buf);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        DOUBLE_WIDTH
    }
}

impl KeyDecode for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn decode_key(bytes: &[u8]) -> CodecResult<Self> {
        decode_f64(bytes)
    }

    fn decode_key_prefix(bytes: &[u8]) -> CodecResult<(Self, usize)> {
        decode_f64_prefix(bytes)
    }
}

impl KeyEncode for bool {
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        encode_bool_into(*self, buf);
        Ok(())
    }

    fn encoded_len(&self) -> usize {
        BOOL_WIDTH
    }
}

impl KeyDecode for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn decode_key(bytes: &[u8]) -> CodecResult<Self> {
        decode_bool_with(bytes, BoolDecoding::Strict)
    }

    fn decode_key_prefix(bytes: &[u8]) -> CodecResult<(Self, usize)> {
        decode_bool_prefix(bytes, BoolDecoding::Strict)
    }
}

impl KeyEncode for str {
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        encode_str_into(self, buf)
    }

    fn encoded_len(&self) -> usize {
        encoded_str_len(self)
    }
}

impl KeyEncode for String {
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        encode_str_into(self, buf)
    }

    fn encoded_len(&self) -> usize {
        encoded_str_len(self)
    }
}

impl KeyDecode for String {
    const KIND: ValueKind = ValueKind::String;

    fn decode_key(bytes: &[u8]) -> CodecResult<Self> {
        decode_str(bytes)
    }

    fn decode_key_prefix(bytes: &[u8]) -> CodecResult<(Self, usize)> {
        let (s, consumed) = decode_str_prefix(bytes)?;
        Ok((s.to_owned(), consumed))
    }
}

impl<T: KeyEncode + ?Sized> KeyEncode for &T {
    fn encode_key_to(&self, buf: &mut Vec<u8>) -> CodecResult<()> {
        (**self).encode_key_to(buf)
    }

    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}

/// Codec front-end that applies a [`CodecConfig`].
///
/// `KeyCodec::default()` behaves exactly like the free functions in the
/// codec modules.
///
/// # Example
///
/// ```
/// use ordkey_core::{CodecConfig, KeyCodec, ZeroPolicy};
///
/// let codec = KeyCodec::new(CodecConfig::new().with_zero_policy(ZeroPolicy::Canonical));
/// assert_eq!(codec.encode_f64(-0.0), codec.encode_f64(0.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyCodec {
    config: CodecConfig,
}

impl KeyCodec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode an `i64`.
    #[must_use]
    pub const fn encode_i64(&self, value: i64) -> [u8; INT64_WIDTH] {
        encode_i64(value)
    }

    /// Encode an `f64` under the configured zero policy.
    #[must_use]
    pub fn encode_f64(&self, value: f64) -> [u8; DOUBLE_WIDTH] {
        encode_f64_with(value, self.config.zero_policy)
    }

    /// Encode a `bool`.
    #[must_use]
    pub const fn encode_bool(&self, value: bool) -> [u8; BOOL_WIDTH] {
        encode_bool(value)
    }

    /// Encode a string.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::EmbeddedNul`](crate::CodecError::EmbeddedNul) if
    /// `value` contains U+0000.
    pub fn encode_str(&self, value: &str) -> CodecResult<Vec<u8>> {
        encode_str(value)
    }

    /// Decode an `i64` from exactly 8 bytes.
    ///
    /// # Errors
    ///
    /// See [`decode_i64`].
    pub fn decode_i64(&self, bytes: &[u8]) -> CodecResult<i64> {
        decode_i64(bytes)
    }

    /// Decode an `f64` from exactly 8 bytes.
    ///
    /// Under [`ZeroPolicy::Canonical`](crate::ZeroPolicy::Canonical) a key
    /// produced by this codec never decodes to `-0.0`.
    ///
    /// # Errors
    ///
    /// See [`decode_f64`].
    pub fn decode_f64(&self, bytes: &[u8]) -> CodecResult<f64> {
        decode_f64(bytes)
    }

    /// Decode a `bool` under the configured strictness.
    ///
    /// # Errors
    ///
    /// See [`decode_bool_with`].
    pub fn decode_bool(&self, bytes: &[u8]) -> CodecResult<bool> {
        decode_bool_with(bytes, self.config.bool_decoding)
    }

    /// Decode the string at the start of `bytes`, ignoring anything after
    /// its terminator.
    ///
    /// # Errors
    ///
    /// See [`decode_str`].
    pub fn decode_str(&self, bytes: &[u8]) -> CodecResult<String> {
        decode_str(bytes)
    }
}
