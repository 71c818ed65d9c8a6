//! The transform catalog: color-space conversions and rotations.
//!
//! Every operation maps one [`PixelBuffer`] to a new, independently owned
//! [`PixelBuffer`]. Color transforms preserve dimensions; the quarter-turn
//! rotation swaps them. Inputs are never mutated.
//!
//! The catalog keeps the two sepia policies as separate entries. They
//! produce different output for the same input and are both part of the
//! tool's observed behavior, so neither replaces the other.

mod color;
mod rotation;

pub use color::{grayscale, negative, sepia_matrix, sepia_tint, xray};
pub use rotation::{rotate180, rotate90_cw};

use serde::{Deserialize, Serialize};

use crate::PixelBuffer;

/// A pixel-level or geometric transform, with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// Luminance-weighted grayscale conversion.
    Grayscale,
    /// Per-channel inversion.
    Negative,
    /// Contrast remap resembling radiographic film; `intensity` is the
    /// exponent applied to normalized luminance, expected in [1.0, 2.0].
    XRay { intensity: f32 },
    /// Fixed weighted-matrix sepia.
    SepiaMatrix,
    /// Parametrized warm/cool sepia with a flat tint offset.
    SepiaTint { factor: f32, tint: f32 },
    /// Quarter turn clockwise; swaps width and height.
    Rotate90Cw,
    /// Half turn.
    Rotate180,
}

impl Transform {
    /// Apply this transform, producing a freshly allocated output buffer.
    pub fn apply(&self, image: &PixelBuffer) -> PixelBuffer {
        match *self {
            Transform::Grayscale => grayscale(image),
            Transform::Negative => negative(image),
            Transform::XRay { intensity } => xray(image, intensity),
            Transform::SepiaMatrix => sepia_matrix(image),
            Transform::SepiaTint { factor, tint } => sepia_tint(image, factor, tint),
            Transform::Rotate90Cw => rotate90_cw(image),
            Transform::Rotate180 => rotate180(image),
        }
    }

    /// Output dimensions for an input of the given size.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Transform::Rotate90Cw => (height, width),
            _ => (width, height),
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating small buffers with positive dimensions.
    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let len = (w as usize) * (h as usize) * 3;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| PixelBuffer::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: negative is involutive.
        #[test]
        fn prop_negative_involutive(img in buffer_strategy()) {
            prop_assert_eq!(negative(&negative(&img)), img);
        }

        /// Property: rotate180 is involutive.
        #[test]
        fn prop_rotate180_involutive(img in buffer_strategy()) {
            prop_assert_eq!(rotate180(&rotate180(&img)), img);
        }

        /// Property: four quarter turns return the original buffer.
        #[test]
        fn prop_rotate90_four_times_identity(img in buffer_strategy()) {
            let once = rotate90_cw(&img);
            let result = rotate90_cw(&rotate90_cw(&rotate90_cw(&once)));
            prop_assert_eq!(result, img);
        }

        /// Property: grayscale is idempotent.
        #[test]
        fn prop_grayscale_idempotent(img in buffer_strategy()) {
            let once = grayscale(&img);
            prop_assert_eq!(grayscale(&once), once);
        }

        /// Property: x-ray with the identity exponent inverts grayscale.
        #[test]
        fn prop_xray_identity_exponent(img in buffer_strategy()) {
            prop_assert_eq!(xray(&img, 1.0), negative(&grayscale(&img)));
        }

        /// Property: a quarter turn swaps dimensions, everything else
        /// preserves them.
        #[test]
        fn prop_dimension_contract(img in buffer_strategy()) {
            let turned = rotate90_cw(&img);
            prop_assert_eq!((turned.width, turned.height), (img.height, img.width));

            for t in [
                Transform::Grayscale,
                Transform::Negative,
                Transform::XRay { intensity: 1.5 },
                Transform::SepiaMatrix,
                Transform::SepiaTint { factor: 0.3, tint: 20.0 },
                Transform::Rotate180,
            ] {
                let out = t.apply(&img);
                prop_assert_eq!((out.width, out.height), (img.width, img.height));
            }
        }
    }
}
