//! 32-bit BGRA color, one byte per channel

use crate::color::Color;
use crate::color::almost_eq::impl_almost_eq;
use std::fmt;

/// BGRA color with byte components
#[derive(Debug, Clone, Copy, Default)]
pub struct Bgra32 {
    /// Blue (0 to 255)
    pub b: u8,
    /// Green (0 to 255)
    pub g: u8,
    /// Red (0 to 255)
    pub r: u8,
    /// Alpha (0 to 255)
    pub a: u8,
}

impl Bgra32 {
    /// All components zero
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    /// Create a new BGRA color
    #[inline]
    pub const fn new(b: u8, g: u8, r: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Create a fully opaque BGRA color
    #[inline]
    pub const fn opaque(b: u8, g: u8, r: u8) -> Self {
        Self::new(b, g, r, 255)
    }

    /// Convert from RGBA, rounding each lane to the nearest byte
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.to_bytes();
        Self::new(b, g, r, a)
    }

    /// Convert to RGBA
    pub fn to_color(&self) -> Color {
        Color::from_bytes(self.r, self.g, self.b, self.a)
    }

    /// The color as a little-endian BGRA word: `A << 24 | R << 16 | G << 8 | B`
    #[inline]
    pub const fn bgra(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Components as an array, in B, G, R, A order
    #[inline]
    pub fn components(&self) -> [f32; 4] {
        [self.b, self.g, self.r, self.a].map(f32::from)
    }

    /// True when every component is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(Bgra32);

impl fmt::Display for Bgra32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Bgra32 [ Empty ]");
        }
        write!(
            f,
            "Bgra32 [ B={}, G={}, R={}, A={} ]",
            self.b, self.g, self.r, self.a
        )
    }
}
