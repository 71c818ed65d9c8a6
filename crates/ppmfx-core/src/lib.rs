//! ppmfx Core - PPM image processing library
//!
//! This crate provides the core functionality for ppmfx: an owned RGB pixel
//! container, a codec for the two uncompressed PPM sample encodings (binary
//! `P6` and ascii `P3`), and a catalog of pixel-level and geometric
//! transforms.
//!
//! The processing flow is read → transform → write:
//!
//! ```ignore
//! use ppmfx_core::{read_ppm, write_ppm, PpmVariant, Transform};
//!
//! let img = read_ppm("photo.ppm", PpmVariant::Binary)?;
//! let out = Transform::Grayscale.apply(&img);
//! write_ppm("gray_photo.ppm", &out, PpmVariant::Binary)?;
//! ```
//!
//! Everything is synchronous and single-threaded; each buffer is owned by
//! exactly one stage at a time and handed off by value.

pub mod buffer;
pub mod codec;
pub mod luminance;
pub mod transform;

pub use buffer::PixelBuffer;
pub use codec::{decode_ppm, encode_ppm, read_ppm, write_ppm, CodecError, PpmVariant};
pub use transform::Transform;
