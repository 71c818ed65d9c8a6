//! PPM encoding.
//!
//! Both variants emit the same header — the magic token, `width height` on
//! one line, `255` on the next — followed by the samples: raw bytes for the
//! binary variant, one `r g b` line per pixel for the ascii variant.

use std::fmt::Write as _;
use std::path::Path;

use super::{CodecError, PpmVariant};
use crate::PixelBuffer;

/// Encode a PPM image to bytes.
///
/// Encoding an in-memory buffer cannot fail; channel values are already
/// 0-255 by construction.
pub fn encode_ppm(image: &PixelBuffer, variant: PpmVariant) -> Vec<u8> {
    let header = format!("{}\n{} {}\n255\n", variant.magic(), image.width, image.height);

    match variant {
        PpmVariant::Binary => {
            let mut out = Vec::with_capacity(header.len() + image.byte_size());
            out.extend_from_slice(header.as_bytes());
            out.extend_from_slice(&image.pixels);
            out
        }
        PpmVariant::Ascii => {
            // "255 255 255\n" is 12 bytes per pixel at worst
            let mut out = String::with_capacity(header.len() + image.pixels.len() * 4);
            out.push_str(&header);
            for rgb in image.pixels.chunks_exact(3) {
                let _ = writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2]);
            }
            out.into_bytes()
        }
    }
}

/// Encode a PPM image and write it to a file, truncating any existing file.
///
/// # Errors
///
/// Returns [`CodecError::Io`] if the file cannot be created or written.
/// A failed write is terminal; no retry is attempted.
pub fn write_ppm(
    path: impl AsRef<Path>,
    image: &PixelBuffer,
    variant: PpmVariant,
) -> Result<(), CodecError> {
    std::fs::write(path, encode_ppm(image, variant))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode_ppm;

    fn two_pixel_image() -> PixelBuffer {
        PixelBuffer::new(2, 1, vec![255, 0, 0, 0, 255, 0])
    }

    #[test]
    fn test_encode_binary_layout() {
        let bytes = encode_ppm(&two_pixel_image(), PpmVariant::Binary);
        assert_eq!(&bytes[..11], b"P6\n2 1\n255\n");
        assert_eq!(&bytes[11..], &[255, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn test_encode_ascii_layout() {
        let bytes = encode_ppm(&two_pixel_image(), PpmVariant::Ascii);
        assert_eq!(bytes, b"P3\n2 1\n255\n255 0 0\n0 255 0\n");
    }

    #[test]
    fn test_round_trip_binary() {
        let img = PixelBuffer::new(3, 2, (0u8..18).collect());
        let decoded = decode_ppm(&encode_ppm(&img, PpmVariant::Binary), PpmVariant::Binary).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_round_trip_ascii() {
        let img = PixelBuffer::new(3, 2, (0u8..18).collect());
        let decoded = decode_ppm(&encode_ppm(&img, PpmVariant::Ascii), PpmVariant::Ascii).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_write_ppm_create_failure() {
        let img = two_pixel_image();
        let result = write_ppm("/nonexistent/dir/out.ppm", &img, PpmVariant::Binary);
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn test_write_then_read_file() {
        let dir = std::env::temp_dir();
        let path = dir.join("ppmfx_writer_roundtrip_test.ppm");

        let img = PixelBuffer::new(2, 2, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        write_ppm(&path, &img, PpmVariant::Binary).unwrap();
        let back = crate::codec::read_ppm(&path, PpmVariant::Binary).unwrap();
        assert_eq!(back, img);

        let _ = std::fs::remove_file(&path);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
