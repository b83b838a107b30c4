//! `ordkey` Core
//!
//! Order-preserving binary encodings for primitive values. Comparing two
//! encoded keys byte by byte gives the same result as comparing the original
//! values, so ordered key-value stores, LSM trees and range-partitioned
//! indexes can sort and range-scan raw keys without decoding them.
//!
//! # Overview
//!
//! - **Int64**: 8 bytes, big-endian, sign bit flipped
//! - **Double**: 8 bytes, big-endian, sign bit set for `+0.0` and above, all
//!   bits inverted for `-0.0` and below
//! - **Bool**: 1 byte, `0x00` / `0x01`
//! - **String**: UTF-8 bytes followed by a `0x00` terminator
//!
//! All codecs are stateless free functions; they are safe to call from any
//! number of threads.
//!
//! # Example
//!
//! ```
//! use ordkey_core::{KeyDecode, KeyEncode};
//!
//! let mut keys: Vec<Vec<u8>> = [3.5f64, -0.0, -2.0, 0.0, f64::INFINITY]
//!     .iter()
//!     .map(|v| v.encode_key().unwrap())
//!     .collect();
//! keys.sort();
//!
//! let decoded: Vec<f64> = keys.iter().map(|k| f64::decode_key(k).unwrap()).collect();
//! assert_eq!(decoded, [-2.0, -0.0, 0.0, 3.5, f64::INFINITY]);
//! assert!(decoded[1].is_sign_negative());
//! ```
//!
//! # Modules
//!
//! - [`encoding`] - the codecs, [`KeyEncode`] / [`KeyDecode`], [`KeyCodec`] and [`KeyReader`]
//! - [`config`] - [`CodecConfig`] policies for negative zero and boolean decoding
//! - [`dump`] - hex rendering of encoded keys
//! - [`error`] - error types ([`CodecError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod dump;
pub mod encoding;
pub mod error;

// Re-export commonly used types
pub use config::{BoolDecoding, CodecConfig, ZeroPolicy};
pub use encoding::{KeyCodec, KeyDecode, KeyEncode, KeyReader};
pub use error::{CodecError, CodecResult, InvalidReason, ValueKind};
