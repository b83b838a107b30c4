//! Sequential decoding of values packed into one buffer.
//!
//! Encoders append, so several values can be written back to back into one
//! buffer. [`KeyReader`] walks such a buffer, decoding one value per call and
//! advancing past the bytes it consumed. It imposes no schema: the caller
//! decides which kind to read next.

use tracing::trace;

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult, ValueKind};

use super::boolean::decode_bool_prefix;
use super::double::decode_f64_prefix;
use super::int64::decode_i64_prefix;
use super::string::decode_str_prefix;
use super::traits::KeyDecode;

/// A cursor that decodes successive values from a borrowed buffer.
///
/// A failed read leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use ordkey_core::encoding::KeyReader;
/// use ordkey_core::KeyEncode;
///
/// let mut buf = Vec::new();
/// "hello".encode_key_to(&mut buf).unwrap();
/// (-4i64).encode_key_to(&mut buf).unwrap();
///
/// let mut reader = KeyReader::new(&buf);
/// assert_eq!(reader.read_str().unwrap(), "hello");
/// assert_eq!(reader.read_i64().unwrap(), -4);
/// reader.finish().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct KeyReader<'a> {
    buf: &'a [u8],
    position: usize,
    config: CodecConfig,
}

impl<'a> KeyReader<'a> {
    /// Creates a reader over `buf` with the default configuration.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, CodecConfig::default())
    }

    /// Creates a reader over `buf` with the given configuration.
    #[must_use]
    pub const fn with_config(buf: &'a [u8], config: CodecConfig) -> Self {
        Self { buf, position: 0, config }
    }

    /// Byte offset of the next value.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.position..]
    }

    /// Returns true once every byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position >= self.buf.len()
    }

    fn advance<T>(
        &mut self,
        kind: ValueKind,
        result: CodecResult<(T, usize)>,
    ) -> CodecResult<T> {
        match result {
            Ok((value, consumed)) => {
                self.position += consumed;
                Ok(value)
            }
            Err(err) => {
                trace!(%kind, position = self.position, error = %err, "key read failed");
                Err(err)
            }
        }
    }

    /// Read an `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEncoding`] if fewer than 8 bytes remain.
    pub fn read_i64(&mut self) -> CodecResult<i64> {
        let result = decode_i64_prefix(self.remaining());
        self.advance(ValueKind::Int64, result)
    }

    /// Read an `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEncoding`] if fewer than 8 bytes remain.
    pub fn read_f64(&mut self) -> CodecResult<f64> {
        let result = decode_f64_prefix(self.remaining());
        self.advance(ValueKind::Double, result)
    }

    /// Read a `bool` under the configured strictness.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEncoding`] if no bytes remain or, in
    /// strict mode, the byte is not `0x00`/`0x01`.
    pub fn read_bool(&mut self) -> CodecResult<bool> {
        let result = decode_bool_prefix(self.remaining(), self.config.bool_decoding);
        self.advance(ValueKind::Bool, result)
    }

    /// Read a string without copying.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidEncoding`] if the remaining bytes have no
    /// terminator or the content is not valid UTF-8.
    pub fn read_str(&mut self) -> CodecResult<&'a str> {
        let result = decode_str_prefix(self.remaining());
        self.advance(ValueKind::String, result)
    }

    /// Read a string into an owned `String`.
    ///
    /// # Errors
    ///
    /// See [`read_str`](Self::read_str).
    pub fn read_string(&mut self) -> CodecResult<String> {
        self.read_str().map(str::to_owned)
    }

    /// Read any [`KeyDecode`] type.
    ///
    /// Booleans read this way are always strict; use
    /// [`read_bool`](Self::read_bool) to honor the configuration.
    ///
    /// # Errors
    ///
    /// Propagates the decode error of `T`.
    pub fn read<T: KeyDecode>(&mut self) -> CodecResult<T> {
        let result = T::decode_key_prefix(self.remaining());
        self.advance(T::KIND, result)
    }

    /// Consume the reader, failing if any bytes are left.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unconsumed`] if the buffer was not fully read.
    pub fn finish(self) -> CodecResult<()> {
        match self.remaining().len() {
            0 => Ok(()),
            remaining => Err(CodecError::Unconsumed { position: self.position, remaining }),
        }
    }
}
