//! CIE XYZ Color Space
//!
//! XYZ is the device-independent hub for the perceptual spaces: CIE Luv is
//! derived from it. Values here are scaled so that Y = 100 for sRGB white.

use crate::color::Color;
use crate::color::almost_eq::impl_almost_eq;
use crate::math::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use std::fmt;

/// CIE 1931 XYZ color coordinates (D65, Y in 0-100)
///
/// Components are not clamped; the documented ranges are the usual ones
/// for colors inside the sRGB gamut.
#[derive(Debug, Clone, Copy, Default)]
pub struct CieXyz {
    /// X tristimulus value (mix of cone responses, roughly red; 0 to ~95)
    pub x: f32,
    /// Y tristimulus value (luminance; 0 to 100)
    pub y: f32,
    /// Z tristimulus value (roughly blue; 0 to ~109)
    pub z: f32,
}

impl CieXyz {
    /// All components zero
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new XYZ color
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Convert from gamma-encoded sRGB; alpha is discarded
    pub fn from_color(color: Color) -> Self {
        let linear = color.clamp().expand();
        let [x, y, z] = SRGB_TO_XYZ.multiply_vec([linear.r, linear.g, linear.b]);
        Self::new(x * 100.0, y * 100.0, z * 100.0)
    }

    /// Convert to an opaque sRGB color, clamping out-of-gamut results
    pub fn to_color(&self) -> Color {
        let [r, g, b] = XYZ_TO_SRGB.multiply_vec([self.x / 100.0, self.y / 100.0, self.z / 100.0]);
        Color::rgb(r, g, b).clamp().compress()
    }

    /// Get the luminance (Y component)
    #[inline]
    pub const fn luminance(&self) -> f32 {
        self.y
    }

    /// Convert to xyY chromaticity coordinates
    ///
    /// Returns (x, y, Y) where x and y are chromaticity and Y is luminance.
    #[inline]
    pub fn to_xyy(&self) -> (f32, f32, f32) {
        let sum = self.x + self.y + self.z;
        if sum > 0.0 {
            (self.x / sum, self.y / sum, self.y)
        } else {
            (0.0, 0.0, 0.0)
        }
    }

    /// Components as an array
    #[inline]
    pub const fn components(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// True when every component is (approximately) zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(CieXyz);

impl fmt::Display for CieXyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "CieXyz [ Empty ]");
        }
        write!(f, "CieXyz [ X={:.2}, Y={:.2}, Z={:.2} ]", self.x, self.y, self.z)
    }
}
