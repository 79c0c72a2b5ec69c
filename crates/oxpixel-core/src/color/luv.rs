//! CIE L*u*v* (CIELUV) Color Space
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - u*, v*: chromaticity relative to the reference white

use crate::color::almost_eq::impl_almost_eq;
use crate::color::{CieXyz, Color, D65, WhitePoint};
use std::fmt;

/// CIE 1976 ε (216 / 24389)
const CIE_EPSILON: f32 = 216.0 / 24389.0;
/// CIE 1976 κ (24389 / 27)
const CIE_KAPPA: f32 = 24389.0 / 27.0;

/// CIELUV color coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct CieLuv {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Green-red chromaticity (about -134 to 220 for sRGB colors)
    pub u: f32,
    /// Blue-yellow chromaticity (about -140 to 122 for sRGB colors)
    pub v: f32,
}

impl CieLuv {
    /// All components zero
    pub const EMPTY: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a new Luv color
    #[inline]
    pub const fn new(l: f32, u: f32, v: f32) -> Self {
        Self { l, u, v }
    }

    /// Convert from RGBA via XYZ, using the D65 reference white
    pub fn from_color(color: Color) -> Self {
        Self::from_xyz(CieXyz::from_color(color))
    }

    /// Convert to an opaque RGBA color via XYZ
    pub fn to_color(&self) -> Color {
        self.to_xyz().to_color()
    }

    /// Convert from XYZ with the D65 reference white
    pub fn from_xyz(xyz: CieXyz) -> Self {
        Self::from_xyz_with_white(xyz, &D65)
    }

    /// Convert from XYZ with a specific reference white
    pub fn from_xyz_with_white(xyz: CieXyz, white: &WhitePoint) -> Self {
        let yr = xyz.y / white.xyz.y;
        let l = if yr > CIE_EPSILON {
            116.0 * yr.cbrt() - 16.0
        } else {
            CIE_KAPPA * yr
        };

        let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        if denom <= 0.0 {
            return Self::new(l, 0.0, 0.0);
        }

        let (un, vn) = white.uv_prime();
        let up = 4.0 * xyz.x / denom;
        let vp = 9.0 * xyz.y / denom;

        Self::new(l, 13.0 * l * (up - un), 13.0 * l * (vp - vn))
    }

    /// Convert to XYZ with the D65 reference white
    pub fn to_xyz(&self) -> CieXyz {
        self.to_xyz_with_white(&D65)
    }

    /// Convert to XYZ with a specific reference white
    pub fn to_xyz_with_white(&self, white: &WhitePoint) -> CieXyz {
        if self.l <= 0.0 {
            return CieXyz::EMPTY;
        }

        let y = if self.l > CIE_KAPPA * CIE_EPSILON {
            ((self.l + 16.0) / 116.0).powi(3)
        } else {
            self.l / CIE_KAPPA
        } * white.xyz.y;

        let (un, vn) = white.uv_prime();
        let up = self.u / (13.0 * self.l) + un;
        let vp = self.v / (13.0 * self.l) + vn;

        let x = y * 9.0 * up / (4.0 * vp);
        let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);
        CieXyz::new(x, y, z)
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f32 {
        (self.u * self.u + self.v * self.v).sqrt()
    }

    /// Components as an array
    #[inline]
    pub const fn components(&self) -> [f32; 3] {
        [self.l, self.u, self.v]
    }

    /// True when every component is (approximately) zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl_almost_eq!(CieLuv);

impl fmt::Display for CieLuv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "CieLuv [ Empty ]");
        }
        write!(f, "CieLuv [ L={:.2}, U={:.2}, V={:.2} ]", self.l, self.u, self.v)
    }
}
