//! Mathematical operations for color conversions
//!
//! - 3x3 matrix operations for RGB↔XYZ transforms
//! - sRGB companding

pub mod gamma;
pub mod matrix;

pub use gamma::{srgb_compress, srgb_expand};
pub use matrix::{Matrix3x3, SRGB_TO_XYZ, XYZ_TO_SRGB};
