//! Fixed-palette quantizer

use super::{QuantizedImage, Quantizer, check_max_colors};
use crate::color::Color;
use crate::simd::nearest_index;
use crate::{Error, Result};
use rayon::prelude::*;
use tracing::debug;

/// The six per-channel levels of the web-safe palette
const WEB_SAFE_LEVELS: [u8; 6] = [0x00, 0x33, 0x66, 0x99, 0xCC, 0xFF];

/// Maps each pixel to the nearest entry of a fixed palette
///
/// Pixels are clamped to [0, 1] (NaN to 0) before matching. Distance is
/// squared Euclidean over RGBA. Ties resolve to the lowest palette index. Only the first `max_colors` entries take part.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteQuantizer {
    palette: Vec<Color>,
}

impl PaletteQuantizer {
    /// Use a caller-supplied palette
    pub fn new(palette: Vec<Color>) -> Result<Self> {
        if palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Self { palette })
    }

    /// The 216-color web-safe cube, red varying slowest
    pub fn web_safe() -> Self {
        let mut palette = Vec::with_capacity(216);
        for r in WEB_SAFE_LEVELS {
            for g in WEB_SAFE_LEVELS {
                for b in WEB_SAFE_LEVELS {
                    palette.push(Color::from_bytes(r, g, b, 255));
                }
            }
        }
        Self { palette }
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }
}

impl Default for PaletteQuantizer {
    fn default() -> Self {
        Self::web_safe()
    }
}

impl Quantizer for PaletteQuantizer {
    fn quantize(&self, pixels: &[Color], max_colors: usize) -> Result<QuantizedImage> {
        check_max_colors(max_colors)?;
        debug!(pixels = pixels.len(), max_colors, "palette quantize");
        if pixels.is_empty() {
            return Ok(QuantizedImage::default());
        }

        let palette = &self.palette[..max_colors.min(self.palette.len())];
        let indices: Vec<u32> = pixels
            .par_iter()
            .map(|&p| nearest_index(palette, p.clamp()).unwrap_or(0) as u32)
            .collect();

        let image = QuantizedImage::new(palette.to_vec(), indices);
        debug!(palette = image.palette().len(), "palette done");
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_safe() {
        let q = PaletteQuantizer::web_safe();
        assert_eq!(q.palette().len(), 216);
        assert_eq!(q.palette()[0], Color::BLACK);
        assert_eq!(q.palette()[215], Color::WHITE);
        assert_eq!(q.palette()[1], Color::from_bytes(0, 0, 0x33, 255));
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert_eq!(PaletteQuantizer::new(Vec::new()), Err(Error::EmptyPalette));
    }

    #[test]
    fn test_palette_colors_map_to_themselves() {
        let q = PaletteQuantizer::web_safe();
        let image = q.quantize(q.palette(), 256).unwrap();
        assert_eq!(image.to_pixels(), q.palette());
        let expected: Vec<u32> = (0..216).collect();
        assert_eq!(image.indices(), expected.as_slice());
    }

    #[test]
    fn test_truncated_to_max_colors() {
        let q = PaletteQuantizer::new(vec![Color::BLACK, Color::WHITE, Color::RED]).unwrap();
        let image = q.quantize(&[Color::RED, Color::rgb(0.9, 0.9, 0.9)], 2).unwrap();
        assert_eq!(image.palette(), &[Color::BLACK, Color::WHITE]);
        assert_eq!(image.indices(), &[0, 1]);
    }

    #[test]
    fn test_tie_lowest_index() {
        let q = PaletteQuantizer::new(vec![Color::BLACK, Color::WHITE]).unwrap();
        let image = q.quantize(&[Color::rgb(0.5, 0.5, 0.5)], 2).unwrap();
        assert_eq!(image.indices(), &[0]);
    }

    #[test]
    fn test_nan_lane_reads_as_zero() {
        let q = PaletteQuantizer::new(vec![Color::BLACK, Color::WHITE, Color::RED]).unwrap();
        let pixels = [Color::new(f32::NAN, 0.0, 0.0, 1.0)];
        let image = q.quantize(&pixels, 3).unwrap();
        assert_eq!(image.indices(), &[0]);
        assert_eq!(image.to_pixels(), vec![Color::BLACK]);

        let octree = crate::quantize::OctreeQuantizer.quantize(&pixels, 3).unwrap();
        assert_eq!(octree.to_pixels(), image.to_pixels());
    }

    #[test]
    fn test_duplicate_entries_merged() {
        let q = PaletteQuantizer::new(vec![Color::RED, Color::RED, Color::BLUE]).unwrap();
        let image = q.quantize(&[Color::BLUE, Color::RED], 3).unwrap();
        assert_eq!(image.palette(), &[Color::RED, Color::BLUE]);
        assert_eq!(image.indices(), &[1, 0]);
    }
}
