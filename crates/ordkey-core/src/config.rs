//! Codec policy configuration.
//!
//! The byte layout of every codec is fixed. The two knobs here only decide
//! how edge-case inputs are treated: whether `-0.0` keeps its own encoding,
//! and whether boolean decoding accepts bytes other than `0x00`/`0x01`.

use serde::{Deserialize, Serialize};

/// How negative zero is encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPolicy {
    /// `-0.0` encodes as the immediate predecessor of `+0.0` (IEEE total order).
    #[default]
    Distinct,
    /// `-0.0` is folded into `+0.0` before encoding, so numerically equal
    /// zeros produce identical keys.
    Canonical,
}

/// How a boolean byte is interpreted on decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoolDecoding {
    /// Only `0x00` and `0x01` are accepted.
    #[default]
    Strict,
    /// Any non-zero byte decodes as `true`.
    Lenient,
}

/// Configuration for [`KeyCodec`](crate::encoding::KeyCodec) and
/// [`KeyReader`](crate::encoding::KeyReader).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Negative zero handling for doubles (default: distinct).
    pub zero_policy: ZeroPolicy,

    /// Boolean decode strictness (default: strict).
    pub bool_decoding: BoolDecoding,
}

impl CodecConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { zero_policy: ZeroPolicy::Distinct, bool_decoding: BoolDecoding::Strict }
    }

    /// Sets the negative zero policy.
    #[must_use]
    pub const fn with_zero_policy(mut self, zero_policy: ZeroPolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    /// Sets the boolean decode mode.
    #[must_use]
    pub const fn with_bool_decoding(mut self, bool_decoding: BoolDecoding) -> Self {
        self.bool_decoding = bool_decoding;
        self
    }
}
