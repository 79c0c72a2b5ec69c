//! CIE Standard Illuminant White Points
//!
//! Specified as CIE XYZ coordinates on the same 0-100 scale as
//! [`CieXyz`].

use crate::color::CieXyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// Name of the illuminant
    pub name: &'static str,
    /// CIE XYZ coordinates (Y = 100)
    pub xyz: CieXyz,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(name: &'static str, x: f32, y: f32, z: f32) -> Self {
        Self {
            name,
            xyz: CieXyz::new(x, y, z),
        }
    }

    /// CIE 1976 u′v′ chromaticity of this white
    pub fn uv_prime(&self) -> (f32, f32) {
        let CieXyz { x, y, z } = self.xyz;
        let denom = x + 15.0 * y + 3.0 * z;
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

/// CIE Standard Illuminant D50 (Horizon Light)
pub const D50: WhitePoint = WhitePoint::new("D50", 96.42, 100.0, 82.51);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Matches the row sums of [`SRGB_TO_XYZ`](crate::math::SRGB_TO_XYZ), so
/// sRGB white has zero chroma in Luv.
pub const D65: WhitePoint = WhitePoint::new("D65", 95.05, 100.0, 108.9);
