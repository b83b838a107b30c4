//! Error types for the key codecs.

use std::fmt;

use thiserror::Error;

use crate::encoding::boolean::BOOL_WIDTH;
use crate::encoding::double::DOUBLE_WIDTH;
use crate::encoding::int64::INT64_WIDTH;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// The primitive value kinds that have an order-preserving encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Signed 64-bit integer.
    Int64,
    /// IEEE-754 double-precision float.
    Double,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    String,
}

impl ValueKind {
    /// Encoded width in bytes, or `None` for variable-width kinds.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Int64 => Some(INT64_WIDTH),
            Self::Double => Some(DOUBLE_WIDTH),
            Self::Bool => Some(BOOL_WIDTH),
            Self::String => None,
        }
    }

    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a byte sequence is not a valid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// A fixed-width value was given the wrong number of bytes.
    #[error("expected {expected} bytes, got {actual}")]
    WrongLength {
        /// Width of the encoding.
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },

    /// Fewer bytes remain than a prefix decode needs.
    #[error("need {needed} bytes, only {available} available")]
    Truncated {
        /// Width of the encoding.
        needed: usize,
        /// Bytes remaining in the input.
        available: usize,
    },

    /// A string encoding has no `0x00` terminator.
    #[error("missing 0x00 terminator")]
    MissingTerminator,

    /// String content is not valid UTF-8.
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },

    /// A boolean byte other than `0x00` or `0x01`.
    #[error("byte {0:#04x} is not a boolean")]
    InvalidBool(u8),
}

/// Errors that can occur while encoding or decoding keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The bytes do not correspond to a valid encoding of the expected kind.
    #[error("invalid {kind} encoding: {reason}")]
    InvalidEncoding {
        /// The kind being decoded.
        kind: ValueKind,
        /// What was wrong with the input.
        reason: InvalidReason,
    },

    /// A string contains U+0000, which would collide with the terminator.
    #[error("string contains a NUL byte at offset {position}")]
    EmbeddedNul {
        /// Byte offset of the first NUL in the UTF-8 content.
        position: usize,
    },

    /// A [`KeyReader`](crate::encoding::KeyReader) finished with bytes left over.
    #[error("{remaining} unread bytes at offset {position}")]
    Unconsumed {
        /// Offset of the first unread byte.
        position: usize,
        /// Number of unread bytes.
        remaining: usize,
    },
}

impl CodecError {
    /// Creates an [`CodecError::InvalidEncoding`] error.
    #[must_use]
    pub const fn invalid(kind: ValueKind, reason: InvalidReason) -> Self {
        Self::InvalidEncoding { kind, reason }
    }

    /// Returns true if this error came from decoding malformed bytes.
    #[must_use]
    pub const fn is_invalid_encoding(&self) -> bool {
        matches!(self, Self::InvalidEncoding { .. })
    }

    /// The value kind involved in the failure, if any.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::InvalidEncoding { kind, .. } => Some(*kind),
            Self::EmbeddedNul { .. } => Some(ValueKind::String),
            Self::Unconsumed { .. } => None,
        }
    }

    /// The decode failure reason, if this is an [`CodecError::InvalidEncoding`].
    #[must_use]
    pub const fn reason(&self) -> Option<InvalidReason> {
        match self {
            Self::InvalidEncoding { reason, .. } => Some(*reason),
            Self::EmbeddedNul { .. } | Self::Unconsumed { .. } => None,
        }
    }
}
