//! CMYK (cyan, magenta, yellow, key/black) color space

use crate::color::almost_eq::impl_almost_eq;
use crate::color::rgba::clamp_unit;
use crate::color::{Color, EPSILON};
use std::fmt;

/// CMYK color coordinates, each in 0 to 1
#[derive(Debug, Clone, Copy, Default)]
pub struct Cmyk {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
    /// Key (black)
    pub k: f32,
}

impl Cmyk {
    /// All components zero
    pub const EMPTY: Self = Self {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 0.0,
    };

    /// Create a new CMYK color, clamping each component to [0, 1]
    #[inline]
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self {
            c: clamp_unit(c),
            m: clamp_unit(m),
            y: clamp_unit(y),
            k: clamp_unit(k),
        }
    }

    /// Convert from RGBA; alpha is discarded
    ///
    /// Pure black short-circuits to (0, 0, 0, 1) since the chromatic
    /// components would otherwise divide by zero.
    pub fn from_color(color: Color) -> Self {
        let c = 1.0 - clamp_unit(color.r);
        let m = 1.0 - clamp_unit(color.g);
        let y = 1.0 - clamp_unit(color.b);
        let k = c.min(m).min(y);

        if (k - 1.0).abs() <= EPSILON {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let scale = 1.0 / (1.0 - k);
        Self::new((c - k) * scale, (m - k) * scale, (y - k) * scale, k)
    }

    /// Convert to an opaque RGBA color
    pub fn to_color(&self) -> Color {
        let white = 1.0 - self.k;
        Color::rgb(
            (1.0 - self.c) * white,
            (1.0 - self.m) * white,
            (1.0 - self.y) * white,
        )
    }

    /// Components as an array
    #[inline]
    pub const fn components(&self) -> [f32; 4] {
        [self.c, self.m, self.y, self.k]
    }

    /// True when every component is (approximately) zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(Cmyk);

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Cmyk [ Empty ]");
        }
        write!(
            f,
            "Cmyk [ C={:.2}, M={:.2}, Y={:.2}, K={:.2} ]",
            self.c, self.m, self.y, self.k
        )
    }
}
