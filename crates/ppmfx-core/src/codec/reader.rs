//! PPM decoding.
//!
//! The header is shared by both variants: a magic token, width, height, and
//! maxval, separated by arbitrary whitespace. After the header the binary
//! variant carries raw samples (one whitespace byte, then width * height * 3
//! bytes) while the ascii variant carries whitespace-separated decimal
//! samples.
//!
//! The maxval is parsed but not enforced; it is 255 by convention.

use std::path::Path;

use super::{CodecError, PpmVariant};
use crate::PixelBuffer;

/// Decode a PPM image from bytes.
///
/// # Arguments
///
/// * `bytes` - Raw file contents
/// * `variant` - Expected sample encoding; the magic token must match
///
/// # Errors
///
/// Returns [`CodecError::BadMagic`] if the magic token does not match the
/// declared variant, [`CodecError::MalformedHeader`] if header tokens are
/// missing, non-numeric, or zero-dimensioned, [`CodecError::TruncatedData`]
/// if fewer samples are present than the header declares, and
/// [`CodecError::ChannelOutOfRange`] for ascii samples outside 0-255.
pub fn decode_ppm(bytes: &[u8], variant: PpmVariant) -> Result<PixelBuffer, CodecError> {
    let mut tokens = Tokens::new(bytes);

    let magic = tokens
        .next()
        .ok_or_else(|| CodecError::MalformedHeader("missing magic token".to_string()))?;
    if magic != variant.magic().as_bytes() {
        return Err(CodecError::BadMagic {
            expected: variant.magic(),
            found: String::from_utf8_lossy(magic).into_owned(),
        });
    }

    let width = parse_dimension(&mut tokens, "width")?;
    let height = parse_dimension(&mut tokens, "height")?;
    let _maxval = parse_header_value(&mut tokens, "maxval")?;

    let expected = (width as usize) * (height as usize) * 3;

    let pixels = match variant {
        PpmVariant::Binary => {
            // Exactly one whitespace byte separates the maxval from the samples.
            match bytes.get(tokens.pos) {
                Some(b) if b.is_ascii_whitespace() => {}
                _ => {
                    return Err(CodecError::MalformedHeader(
                        "missing whitespace after maxval".to_string(),
                    ))
                }
            }
            let data = &bytes[tokens.pos + 1..];
            if data.len() < expected {
                return Err(CodecError::TruncatedData {
                    expected,
                    actual: data.len(),
                });
            }
            // Trailing bytes beyond the declared sample count are ignored.
            data[..expected].to_vec()
        }
        PpmVariant::Ascii => {
            let mut samples = Vec::with_capacity(expected);
            for _ in 0..expected {
                let token = match tokens.next() {
                    Some(t) => t,
                    None => {
                        return Err(CodecError::TruncatedData {
                            expected,
                            actual: samples.len(),
                        })
                    }
                };
                samples.push(parse_sample(token)?);
            }
            samples
        }
    };

    Ok(PixelBuffer::new(width, height, pixels))
}

/// Read and decode a PPM image from a file.
///
/// # Errors
///
/// Returns [`CodecError::Io`] if the file cannot be opened or read, plus
/// everything [`decode_ppm`] can return.
pub fn read_ppm(path: impl AsRef<Path>, variant: PpmVariant) -> Result<PixelBuffer, CodecError> {
    let bytes = std::fs::read(path)?;
    decode_ppm(&bytes, variant)
}

/// Cursor over whitespace-separated header tokens.
struct Tokens<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Advance past leading whitespace and return the next token, leaving
    /// the cursor on the byte immediately after it.
    fn next(&mut self) -> Option<&'a [u8]> {
        while self.pos < self.bytes.len() && self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        let start = self.pos;
        while self.pos < self.bytes.len() && !self.bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.bytes[start..self.pos])
    }
}

fn parse_header_value(tokens: &mut Tokens, name: &str) -> Result<u32, CodecError> {
    let token = tokens
        .next()
        .ok_or_else(|| CodecError::MalformedHeader(format!("missing {name}")))?;
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            CodecError::MalformedHeader(format!(
                "invalid {name}: {:?}",
                String::from_utf8_lossy(token)
            ))
        })
}

fn parse_dimension(tokens: &mut Tokens, name: &str) -> Result<u32, CodecError> {
    let value = parse_header_value(tokens, name)?;
    if value == 0 {
        return Err(CodecError::MalformedHeader(format!("{name} must be positive")));
    }
    Ok(value)
}

fn parse_sample(token: &[u8]) -> Result<u8, CodecError> {
    let value: i64 = std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| {
            CodecError::MalformedHeader(format!(
                "invalid sample: {:?}",
                String::from_utf8_lossy(token)
            ))
        })?;
    u8::try_from(value).map_err(|_| CodecError::ChannelOutOfRange(value))
}
