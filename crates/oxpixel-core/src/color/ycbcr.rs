//! YCbCr (luma, blue chroma, red chroma), full-range BT.601
//!
//! The variant used by JFIF: all three components span 0-255 and the
//! chroma channels are biased by 128.

use crate::color::Color;
use crate::color::almost_eq::impl_almost_eq;
use std::fmt;

/// Full-range YCbCr color, one byte per component
#[derive(Debug, Clone, Copy, Default)]
pub struct YCbCr {
    /// Luma (0 to 255)
    pub y: u8,
    /// Blue-difference chroma (0 to 255, neutral at 128)
    pub cb: u8,
    /// Red-difference chroma (0 to 255, neutral at 128)
    pub cr: u8,
}

impl YCbCr {
    /// All components zero
    pub const EMPTY: Self = Self::new(0, 0, 0);

    /// Create a new YCbCr color
    #[inline]
    pub const fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }

    /// Convert from RGBA; alpha is discarded
    ///
    /// Each component is rounded to the nearest byte.
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, _] = color.to_bytes().map(f32::from);

        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let cb = 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b;
        let cr = 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b;

        Self::new(round_byte(y), round_byte(cb), round_byte(cr))
    }

    /// Convert to an opaque RGBA color
    pub fn to_color(&self) -> Color {
        let y = f32::from(self.y);
        let cb = f32::from(self.cb) - 128.0;
        let cr = f32::from(self.cr) - 128.0;

        let r = y + 1.402 * cr;
        let g = y - 0.344136 * cb - 0.714136 * cr;
        let b = y + 1.772 * cb;

        Color::from_bytes(round_byte(r), round_byte(g), round_byte(b), 255)
    }

    /// Components as an array
    #[inline]
    pub fn components(&self) -> [f32; 3] {
        [self.y, self.cb, self.cr].map(f32::from)
    }

    /// True when every component is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(YCbCr);

#[inline]
fn round_byte(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for YCbCr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "YCbCr [ Empty ]");
        }
        write!(f, "YCbCr [ Y={}, Cb={}, Cr={} ]", self.y, self.cb, self.cr)
    }
}
