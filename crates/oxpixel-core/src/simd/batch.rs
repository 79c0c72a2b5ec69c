//! Batch conversions between float colors and interleaved RGBA8 buffers

use crate::color::Color;
use crate::color::rgba::clamp_unit;
use crate::{Error, Result};
use multiversion::multiversion;

/// Convert colors to interleaved RGBA8, four bytes per color
///
/// Lanes are clamped (NaN to 0) and rounded to nearest.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn colors_to_rgba8(src: &[Color], dst: &mut [u8]) -> Result<()> {
    let needed = src.len() * 4;
    if dst.len() < needed {
        return Err(Error::BufferSize {
            expected: needed,
            actual: dst.len(),
        });
    }

    for (color, out) in src.iter().zip(dst.chunks_exact_mut(4)) {
        out[0] = (clamp_unit(color.r) * 255.0 + 0.5) as u8;
        out[1] = (clamp_unit(color.g) * 255.0 + 0.5) as u8;
        out[2] = (clamp_unit(color.b) * 255.0 + 0.5) as u8;
        out[3] = (clamp_unit(color.a) * 255.0 + 0.5) as u8;
    }
    Ok(())
}

/// Convert interleaved RGBA8 to colors
///
/// `src` must hold a whole number of pixels and `dst` room for all of them.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn rgba8_to_colors(src: &[u8], dst: &mut [Color]) -> Result<()> {
    let pixels = src.len().div_ceil(4);
    if src.len() % 4 != 0 {
        return Err(Error::BufferSize {
            expected: pixels * 4,
            actual: src.len(),
        });
    }
    if dst.len() < pixels {
        return Err(Error::BufferSize {
            expected: pixels,
            actual: dst.len(),
        });
    }

    for (chunk, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *out = Color::new(
            chunk[0] as f32 / 255.0,
            chunk[1] as f32 / 255.0,
            chunk[2] as f32 / 255.0,
            chunk[3] as f32 / 255.0,
        );
    }
    Ok(())
}

/// Clamp every lane of every color to [0, 1], mapping NaN to 0
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn clamp_colors(data: &mut [Color]) {
    for color in data.iter_mut() {
        color.r = clamp_unit(color.r);
        color.g = clamp_unit(color.g);
        color.b = clamp_unit(color.b);
        color.a = clamp_unit(color.a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_roundtrip() {
        let src = [0u8, 128, 255, 64, 192, 32, 7, 255];
        let mut colors = [Color::default(); 2];
        let mut dst = [0u8; 8];

        rgba8_to_colors(&src, &mut colors).unwrap();
        colors_to_rgba8(&colors, &mut dst).unwrap();

        assert_eq!(src, dst);
    }

    #[test]
    fn test_colors_to_rgba8_clamps() {
        let mut dst = [0u8; 4];
        colors_to_rgba8(&[Color::new(1.5, -0.5, 0.5, 1.0)], &mut dst).unwrap();
        assert_eq!(dst, [255, 0, 128, 255]);
    }

    #[test]
    fn test_buffer_checks() {
        let mut dst = [0u8; 3];
        assert_eq!(
            colors_to_rgba8(&[Color::WHITE], &mut dst),
            Err(Error::BufferSize {
                expected: 4,
                actual: 3
            })
        );
        let mut colors = [Color::default(); 1];
        assert_eq!(
            rgba8_to_colors(&[0u8; 5], &mut colors),
            Err(Error::BufferSize {
                expected: 8,
                actual: 5
            })
        );
        // A short destination is reported in pixels
        assert_eq!(
            rgba8_to_colors(&[0u8; 8], &mut colors),
            Err(Error::BufferSize {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_colors_to_rgba8_nan() {
        let mut dst = [0xAAu8; 4];
        colors_to_rgba8(&[Color::new(f32::NAN, 1.0, 0.0, f32::NAN)], &mut dst).unwrap();
        assert_eq!(dst, [0, 255, 0, 0]);
    }

    #[test]
    fn test_clamp_colors() {
        let mut data = [Color::new(1.5, -0.5, 0.5, 2.0)];
        clamp_colors(&mut data);
        assert_eq!(data[0], Color::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn test_clamp_colors_nan() {
        let nan = Color::new(f32::NAN, 0.5, 0.5, 1.0);
        let mut data = [nan, Color::new(0.25, f32::NAN, 2.0, f32::NAN)];
        clamp_colors(&mut data);
        assert_eq!(data[0], nan.clamp());
        assert_eq!(data[0].r, 0.0);
        assert_eq!(data[1].to_array(), [0.25, 0.0, 1.0, 0.0]);
    }
}
