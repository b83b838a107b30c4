//! Human-readable rendering of encoded keys.

use std::fmt::{self, Write as _};

use tracing::debug;

use crate::encoding::boolean::encode_bool;
use crate::encoding::double::encode_f64;
use crate::encoding::int64::encode_i64;
use crate::encoding::string::encode_str;
use crate::error::CodecResult;

/// Displays a byte slice as space-separated uppercase hex pairs.
///
/// ```
/// use ordkey_core::dump::HexKey;
/// use ordkey_core::encoding::int64::encode_i64;
///
/// assert_eq!(HexKey(&encode_i64(4)).to_string(), "80 00 00 00 00 00 00 04");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexKey<'a>(pub &'a [u8]);

impl fmt::Display for HexKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hex digits are ASCII, so char offsets are byte offsets.
        for (i, digit) in hex::encode_upper(self.0).char_indices() {
            if i > 0 && i % 2 == 0 {
                f.write_char(' ')?;
            }
            f.write_char(digit)?;
        }
        Ok(())
    }
}

/// One labelled sample in a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpLine {
    /// The input value as written in source.
    pub label: String,
    /// Its encoding.
    pub bytes: Vec<u8>,
}

impl DumpLine {
    fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { label: label.into(), bytes: bytes.into() }
    }
}

impl fmt::Display for DumpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.label, HexKey(&self.bytes))
    }
}

/// Encode a fixed set of sample values for manual inspection.
///
/// Each line is also emitted at debug level.
///
/// # Errors
///
/// Never fails for the built-in samples; the `Result` carries string encode
/// errors through unchanged.
pub fn visualize() -> CodecResult<Vec<DumpLine>> {
    let lines = vec![
        DumpLine::new("int64 4", encode_i64(4)),
        DumpLine::new("int64 -4", encode_i64(-4)),
        DumpLine::new("bool true", encode_bool(true)),
        DumpLine::new("bool false", encode_bool(false)),
        DumpLine::new("double 4.01", encode_f64(4.01)),
        DumpLine::new("double 4.1", encode_f64(4.1)),
        DumpLine::new("double -4.01", encode_f64(-4.01)),
        DumpLine::new("double -4.1", encode_f64(-4.1)),
        DumpLine::new("string \"foo\"", encode_str("foo")?),
    ];

    for line in &lines {
        debug!(label = %line.label, bytes = %HexKey(&line.bytes), "encoded sample");
    }

    Ok(lines)
}
