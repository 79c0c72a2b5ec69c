//! HSL (hue, saturation, lightness) color space

use crate::color::almost_eq::impl_almost_eq;
use crate::color::rgba::clamp_unit;
use crate::color::{Color, EPSILON};
use std::fmt;

/// HSL color coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct Hsl {
    /// Hue in degrees (0 to 360)
    pub h: f32,
    /// Saturation (0 to 1)
    pub s: f32,
    /// Lightness (0 to 1)
    pub l: f32,
}

impl Hsl {
    /// All components zero
    pub const EMPTY: Self = Self {
        h: 0.0,
        s: 0.0,
        l: 0.0,
    };

    /// Create a new HSL color, clamping each component to its range
    #[inline]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: clamp_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    /// Convert from RGBA; alpha is discarded
    pub fn from_color(color: Color) -> Self {
        let [r, g, b] = [clamp_unit(color.r), clamp_unit(color.g), clamp_unit(color.b)];
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;
        let l = (max + min) / 2.0;

        if chroma.abs() < EPSILON {
            return Self::new(0.0, 0.0, l);
        }

        let h = hue_degrees(r, g, b, max, chroma);
        let s = if l <= 0.5 {
            chroma / (max + min)
        } else {
            chroma / (2.0 - max - min)
        };

        Self::new(h, s, l)
    }

    /// Convert to an opaque RGBA color
    pub fn to_color(&self) -> Color {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let m = self.l - c / 2.0;
        let [r, g, b] = hue_to_rgb(self.h, c);
        Color::rgb(r + m, g + m, b + m).clamp()
    }

    /// Components as an array
    #[inline]
    pub const fn components(&self) -> [f32; 3] {
        [self.h, self.s, self.l]
    }

    /// True when every component is (approximately) zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(Hsl);

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Hsl [ Empty ]");
        }
        write!(f, "Hsl [ H={:.2}, S={:.2}, L={:.2} ]", self.h, self.s, self.l)
    }
}

#[inline]
pub(super) fn clamp_hue(h: f32) -> f32 {
    if h.is_nan() { 0.0 } else { h.clamp(0.0, 360.0) }
}

/// Hue angle for a chromatic color; `max` and `chroma` come from the caller
pub(super) fn hue_degrees(r: f32, g: f32, b: f32, max: f32, chroma: f32) -> f32 {
    let sector = if max == r {
        (g - b) / chroma
    } else if max == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    let h = sector * 60.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// RGB contribution of a hue at the given chroma, before the lightness offset
pub(super) fn hue_to_rgb(h: f32, c: f32) -> [f32; 3] {
    let h = if h >= 360.0 { 0.0 } else { h };
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    if h < 60.0 {
        [c, x, 0.0]
    } else if h < 120.0 {
        [x, c, 0.0]
    } else if h < 180.0 {
        [0.0, c, x]
    } else if h < 240.0 {
        [0.0, x, c]
    } else if h < 300.0 {
        [x, 0.0, c]
    } else {
        [c, 0.0, x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_is_achromatic() {
        let hsl = Hsl::from_color(Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(Hsl::from_color(Color::RED), Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(Hsl::from_color(Color::GREEN), Hsl::new(120.0, 1.0, 0.5));
        assert_eq!(Hsl::from_color(Color::BLUE), Hsl::new(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_light_saturation() {
        // l > 0.5 uses the 2 - max - min denominator
        let hsl = Hsl::from_color(Color::rgb(1.0, 0.5, 0.5));
        assert!((hsl.l - 0.75).abs() < 1e-6);
        assert!((hsl.s - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let colors = [
            Color::rgb(0.2, 0.4, 0.6),
            Color::rgb(0.9, 0.1, 0.3),
            Color::rgb(0.75, 0.75, 0.1),
        ];
        for c in colors {
            let back = Hsl::from_color(c).to_color();
            assert!(c.approx_eq(&back, 1e-5), "{c:?} -> {back:?}");
        }
    }

    #[test]
    fn test_clamping() {
        let hsl = Hsl::new(400.0, -1.0, 2.0);
        assert_eq!(hsl.components(), [360.0, 0.0, 1.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hsl::EMPTY.to_string(), "Hsl [ Empty ]");
        assert_eq!(
            Hsl::new(120.0, 0.5, 0.25).to_string(),
            "Hsl [ H=120.00, S=0.50, L=0.25 ]"
        );
    }
}
