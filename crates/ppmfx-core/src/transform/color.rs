//! Color-space transforms: grayscale, negative, x-ray, and the two sepia
//! policies.
//!
//! Every function is pure. The input buffer is read-only and a fresh output
//! buffer of the same dimensions is allocated; each output pixel depends
//! only on the corresponding input pixel.

use crate::luminance::luminance_u8;
use crate::PixelBuffer;

/// Convert to grayscale.
///
/// Each output pixel has R = G = B = `floor(0.299 R + 0.587 G + 0.114 B)`.
/// Exactly idempotent: gray pixels map to themselves.
pub fn grayscale(image: &PixelBuffer) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(image.byte_size());
    for rgb in image.pixels.chunks_exact(3) {
        let lum = luminance_u8(rgb[0], rgb[1], rgb[2]);
        pixels.extend_from_slice(&[lum, lum, lum]);
    }
    PixelBuffer::new(image.width, image.height, pixels)
}

/// Convert to negative: each channel becomes `255 - value`. Involutive.
pub fn negative(image: &PixelBuffer) -> PixelBuffer {
    let pixels = image.pixels.iter().map(|&c| 255 - c).collect();
    PixelBuffer::new(image.width, image.height, pixels)
}

/// Apply an x-ray style contrast remap.
///
/// Luminance is normalized to [0, 1], raised to `intensity`, rescaled to
/// 0-255 with truncation, and inverted. A higher exponent darkens mid-tones
/// before the inversion, so the output curve resembles radiographic film.
///
/// `intensity` is expected in [1.0, 2.0]; the caller clamps it before
/// invocation.
pub fn xray(image: &PixelBuffer, intensity: f32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(image.byte_size());
    for rgb in image.pixels.chunks_exact(3) {
        let lum = luminance_u8(rgb[0], rgb[1], rgb[2]);
        // The identity exponent skips the power path, keeping the result
        // bit-exact with inverted grayscale.
        let remapped = if intensity == 1.0 {
            lum
        } else {
            let normalized = lum as f32 / 255.0;
            (normalized.powf(intensity) * 255.0) as u8
        };
        let inverted = 255 - remapped;
        pixels.extend_from_slice(&[inverted, inverted, inverted]);
    }
    PixelBuffer::new(image.width, image.height, pixels)
}

/// Apply the fixed weighted-matrix sepia policy.
///
/// ```text
/// R' = 0.393 R + 0.769 G + 0.189 B
/// G' = 0.349 R + 0.686 G + 0.168 B
/// B' = 0.272 R + 0.534 G + 0.131 B
/// ```
///
/// Each channel is clamped on the upper bound at 255 and truncated; the
/// weights are non-negative, so no lower clamp is needed.
pub fn sepia_matrix(image: &PixelBuffer) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(image.byte_size());
    for rgb in image.pixels.chunks_exact(3) {
        let (r, g, b) = (rgb[0] as f32, rgb[1] as f32, rgb[2] as f32);
        let tr = 0.393 * r + 0.769 * g + 0.189 * b;
        let tg = 0.349 * r + 0.686 * g + 0.168 * b;
        let tb = 0.272 * r + 0.534 * g + 0.131 * b;
        pixels.extend_from_slice(&[
            tr.min(255.0) as u8,
            tg.min(255.0) as u8,
            tb.min(255.0) as u8,
        ]);
    }
    PixelBuffer::new(image.width, image.height, pixels)
}

/// Apply the parametrized tint sepia policy.
///
/// ```text
/// R' = R * (1 + factor) + tint
/// G' = G * (1 + factor) + tint
/// B' = B * (1 - factor) - tint
/// ```
///
/// Each channel is clamped to [0, 255] and rounded. This is a distinct
/// policy from [`sepia_matrix`], not an equivalent reformulation; both stay
/// in the catalog.
pub fn sepia_tint(image: &PixelBuffer, factor: f32, tint: f32) -> PixelBuffer {
    let warm = 1.0 + factor;
    let cool = 1.0 - factor;
    let mut pixels = Vec::with_capacity(image.byte_size());
    for rgb in image.pixels.chunks_exact(3) {
        let r = rgb[0] as f32 * warm + tint;
        let g = rgb[1] as f32 * warm + tint;
        let b = rgb[2] as f32 * cool - tint;
        pixels.extend_from_slice(&[
            r.clamp(0.0, 255.0).round() as u8,
            g.clamp(0.0, 255.0).round() as u8,
            b.clamp(0.0, 255.0).round() as u8,
        ]);
    }
    PixelBuffer::new(image.width, image.height, pixels)
}
