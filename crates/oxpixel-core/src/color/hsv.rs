//! HSV (hue, saturation, value) color space, also known as HSB

use crate::color::almost_eq::impl_almost_eq;
use crate::color::hsl::{clamp_hue, hue_degrees, hue_to_rgb};
use crate::color::rgba::clamp_unit;
use crate::color::{Color, EPSILON};
use std::fmt;

/// HSV color coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Hsv {
    /// Hue in degrees (0 to 360)
    pub h: f32,
    /// Saturation (0 to 1)
    pub s: f32,
    /// Value / brightness (0 to 1)
    pub v: f32,
}

impl Hsv {
    /// All components zero
    pub const EMPTY: Self = Self {
        h: 0.0,
        s: 0.0,
        v: 0.0,
    };

    /// Create a new HSV color, clamping each component to its range
    #[inline]
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: clamp_hue(h),
            s: clamp_unit(s),
            v: clamp_unit(v),
        }
    }

    /// Convert from RGBA; alpha is discarded
    pub fn from_color(color: Color) -> Self {
        let [r, g, b] = [clamp_unit(color.r), clamp_unit(color.g), clamp_unit(color.b)];
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        if chroma.abs() < EPSILON {
            return Self::new(0.0, 0.0, max);
        }

        let h = hue_degrees(r, g, b, max, chroma);
        Self::new(h, chroma / max, max)
    }

    /// Convert to an opaque RGBA color
    pub fn to_color(&self) -> Color {
        let c = self.v * self.s;
        let m = self.v - c;
        let [r, g, b] = hue_to_rgb(self.h, c);
        Color::rgb(r + m, g + m, b + m).clamp()
    }

    /// Components as an array
    #[inline]
    pub const fn components(&self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }

    /// True when every component is (approximately) zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(Hsv);

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Hsv [ Empty ]");
        }
        write!(f, "Hsv [ H={:.2}, S={:.2}, V={:.2} ]", self.h, self.s, self.v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_is_achromatic() {
        let hsv = Hsv::from_color(Color::rgb(0.3, 0.3, 0.3));
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert!((hsv.v - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_black_is_empty() {
        assert!(Hsv::from_color(Color::BLACK).is_empty());
    }

    #[test]
    fn test_known_values() {
        assert_eq!(Hsv::from_color(Color::RED), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(
            Hsv::from_color(Color::rgb(0.0, 0.5, 0.5)),
            Hsv::new(180.0, 1.0, 0.5)
        );
        // Magenta-ish hue wraps past 300 degrees
        let hsv = Hsv::from_color(Color::rgb(1.0, 0.0, 0.5));
        assert!((hsv.h - 330.0).abs() < 1e-3);
    }

    #[test]
    fn test_roundtrip() {
        let colors = [
            Color::rgb(0.2, 0.4, 0.6),
            Color::rgb(0.9, 0.1, 0.3),
            Color::rgb(0.1, 0.8, 0.2),
        ];
        for c in colors {
            let back = Hsv::from_color(c).to_color();
            assert!(c.approx_eq(&back, 1e-5), "{c:?} -> {back:?}");
        }
    }
}
