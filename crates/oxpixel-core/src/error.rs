//! Error types for oxpixel

use crate::color::ColorSpaceKind;
use thiserror::Error;

/// Result type for oxpixel operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxpixel operations
///
/// Clamping of out-of-range channel values and the achromatic defaults of
/// the HSL/HSV/CMYK conversions are not errors; they are documented,
/// deterministic behavior of the respective conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Requested palette size is below one
    #[error("Invalid maximum color count: {0} (must be at least 1)")]
    InvalidMaxColors(usize),

    /// Destination buffer too short for the requested component order
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Encoder quality outside of 1..=100
    #[error("Invalid quality: {0} (must be in 1..=100)")]
    InvalidQuality(u8),

    /// A palette quantizer was given no colors to map to
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Two color space values of different kinds were compared
    #[error("Cannot compare {left:?} with {right:?}")]
    SpaceMismatch {
        left: ColorSpaceKind,
        right: ColorSpaceKind,
    },
}
