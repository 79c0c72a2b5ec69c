//! Test pattern generation
//!
//! Deterministic color buffers for quantizer and conversion tests.

use oxpixel_core::{Color, Hsl};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Horizontal gradient black to white
    GradientH,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Opaque white fading to transparent
    AlphaRamp,
    /// Random opaque pixels with seed
    Random(u64),
    /// Random pixels including alpha, with seed
    RandomAlpha(u64),
    /// Pixels drawn from `n` distinct colors, with seed
    Distinct { colors: usize, seed: u64 },
    /// Skin tone samples
    SkinTones,
    /// All black
    Black,
}

/// Generate a test pattern as a row-major color buffer
pub fn generate_pattern(pattern: TestPattern, width: usize, height: usize) -> Vec<Color> {
    let pixel_count = width * height;
    let fraction = |i: usize, n: usize| i as f32 / n.max(1) as f32;

    match pattern {
        TestPattern::GradientH => (0..pixel_count)
            .map(|i| {
                let v = fraction(i % width, width);
                Color::rgb(v, v, v)
            })
            .collect(),
        TestPattern::ColorCube => {
            let corners: [[u8; 3]; 8] = [
                [0, 0, 0],
                [255, 0, 0],
                [0, 255, 0],
                [0, 0, 255],
                [255, 255, 0],
                [255, 0, 255],
                [0, 255, 255],
                [255, 255, 255],
            ];
            (0..pixel_count)
                .map(|i| {
                    let [r, g, b] = corners[i % 8];
                    Color::from_bytes(r, g, b, 255)
                })
                .collect()
        }
        TestPattern::HueRamp => (0..pixel_count)
            .map(|i| Hsl::new(fraction(i, pixel_count) * 360.0, 1.0, 0.5).to_color())
            .collect(),
        TestPattern::AlphaRamp => (0..pixel_count)
            .map(|i| Color::new(1.0, 1.0, 1.0, 1.0 - fraction(i, pixel_count)))
            .collect(),
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..pixel_count)
                .map(|_| Color::from_bytes(rng.r#gen(), rng.r#gen(), rng.r#gen(), 255))
                .collect()
        }
        TestPattern::RandomAlpha(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..pixel_count)
                .map(|_| {
                    let mut bytes = [0u8; 4];
                    rng.fill_bytes(&mut bytes);
                    Color::from(bytes)
                })
                .collect()
        }
        TestPattern::Distinct { colors, seed } => {
            let palette = distinct_colors(colors, seed);
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
            (0..pixel_count)
                .map(|i| {
                    // Every color appears at least once when the buffer is large enough
                    if i < palette.len() {
                        palette[i]
                    } else {
                        palette[rng.gen_range(0..palette.len())]
                    }
                })
                .collect()
        }
        TestPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            (0..pixel_count)
                .map(|i| {
                    let [r, g, b] = tones[i % 6];
                    Color::from_bytes(r, g, b, 255)
                })
                .collect()
        }
        TestPattern::Black => vec![Color::BLACK; pixel_count],
    }
}

/// Up to 32768 opaque colors that fall into distinct 5-bit RGB cells
///
/// Each color sits at the center of its cell, so colors stay apart under
/// both the octree's 8-bit addressing and Wu's 5-bit histogram.
pub fn distinct_colors(count: usize, seed: u64) -> Vec<Color> {
    let mut cells: Vec<u16> = (0..1u16 << 15).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    cells.shuffle(&mut rng);
    cells
        .into_iter()
        .take(count.min(1 << 15))
        .map(|cell| {
            let level = |shift: u16| (((cell >> shift) & 0x1F) as u8) << 3 | 4;
            Color::from_bytes(level(10), level(5), level(0), 255)
        })
        .collect()
}

/// Standard test sizes
pub mod sizes {
    pub const TINY: (usize, usize) = (8, 8);
    pub const SMALL: (usize, usize) = (64, 64);
    pub const MEDIUM: (usize, usize) = (256, 256);
}
