//! PPM reading and writing.
//!
//! This module implements the uncompressed portable pixel-map format in its
//! two sample encodings:
//!
//! - **Binary** (`P6`): raw RGB bytes after the header
//! - **Ascii** (`P3`): whitespace-separated decimal triples
//!
//! Both encodings share one header grammar and decode into the same
//! [`PixelBuffer`](crate::PixelBuffer) shape, so every transform works on
//! either. Decoding works on in-memory bytes, with thin path-based wrappers
//! on top for file I/O.

mod reader;
mod types;
mod writer;

pub use reader::{decode_ppm, read_ppm};
pub use types::{CodecError, PpmVariant};
pub use writer::{encode_ppm, write_ppm};
