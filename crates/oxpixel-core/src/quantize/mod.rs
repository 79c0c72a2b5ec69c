//! Color quantization
//!
//! Reduces a buffer of colors to a bounded palette plus per-pixel indices.
//! Three strategies are provided:
//!
//! - [`OctreeQuantizer`]: adaptive, merges the least-used leaves of an
//!   8-level RGB octree
//! - [`WuQuantizer`]: adaptive, splits the RGB cube along the cut that
//!   maximizes between-box variance
//! - [`PaletteQuantizer`]: maps to the nearest entry of a fixed palette
//!
//! All three are deterministic: the same input always yields the same
//! palette order and indices.

mod image;
mod octree;
mod palette;
mod wu;

pub use image::QuantizedImage;
pub use octree::OctreeQuantizer;
pub use palette::PaletteQuantizer;
pub use wu::WuQuantizer;

use crate::color::Color;
use crate::{Error, Result};

/// Palette size used when the caller does not choose one
pub const DEFAULT_MAX_COLORS: usize = 256;

/// A color reduction strategy
pub trait Quantizer: Send + Sync {
    /// Reduce `pixels` to at most `max_colors` palette entries
    ///
    /// Fails with [`Error::InvalidMaxColors`] when `max_colors` is zero.
    /// An empty input yields an empty palette and no indices.
    fn quantize(&self, pixels: &[Color], max_colors: usize) -> Result<QuantizedImage>;
}

/// Quantizer selection for options and call sites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuantizerKind {
    #[default]
    Octree,
    Wu,
    /// Nearest match against the web-safe palette
    Palette,
}

impl QuantizerKind {
    pub fn quantize(&self, pixels: &[Color], max_colors: usize) -> Result<QuantizedImage> {
        match self {
            Self::Octree => OctreeQuantizer.quantize(pixels, max_colors),
            Self::Wu => WuQuantizer.quantize(pixels, max_colors),
            Self::Palette => PaletteQuantizer::web_safe().quantize(pixels, max_colors),
        }
    }
}

/// Quantize with the given strategy
pub fn quantize(kind: QuantizerKind, pixels: &[Color], max_colors: usize) -> Result<QuantizedImage> {
    kind.quantize(pixels, max_colors)
}

pub(crate) fn check_max_colors(max_colors: usize) -> Result<()> {
    if max_colors == 0 {
        return Err(Error::InvalidMaxColors(max_colors));
    }
    Ok(())
}

/// Clamped 8-bit RGB of a color, used to address tree nodes and histogram cells
#[inline]
pub(crate) fn rgb_bytes(color: &Color) -> [u8; 3] {
    let [r, g, b, _] = color.to_bytes();
    [r, g, b]
}
