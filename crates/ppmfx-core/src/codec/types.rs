//! Core types for the PPM codec.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk encoding of the pixel samples.
///
/// Both variants share the same header grammar and in-memory
/// [`PixelBuffer`](crate::PixelBuffer) shape; they differ only in how the
/// samples after the header are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PpmVariant {
    /// Raw binary samples, magic token `P6`.
    #[default]
    Binary,
    /// Whitespace-separated decimal samples, magic token `P3`.
    Ascii,
}

impl PpmVariant {
    /// The magic token this variant declares in the file header.
    pub fn magic(self) -> &'static str {
        match self {
            PpmVariant::Binary => "P6",
            PpmVariant::Ascii => "P3",
        }
    }
}

/// Errors that can occur while reading or writing a PPM file.
#[derive(Debug, Error)]
pub enum CodecError {
    /// I/O error opening, reading, or creating the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The magic token does not match the expected variant.
    #[error("bad magic token: expected {expected:?}, found {found:?}")]
    BadMagic {
        expected: &'static str,
        found: String,
    },

    /// The header is missing tokens or contains non-numeric values.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// Fewer pixel samples are present than the header declares.
    ///
    /// Counts are bytes for the binary variant and decimal samples for the
    /// ascii variant.
    #[error("truncated pixel data: expected {expected} samples, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// An ascii sample is outside the 0-255 channel range.
    #[error("channel value {0} out of range 0-255")]
    ChannelOutOfRange(i64),
}
