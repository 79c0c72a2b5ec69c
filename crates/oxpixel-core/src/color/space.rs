//! Runtime-selected color spaces
//!
//! [`ColorSpaceKind`] names a space; [`AnyColorSpace`] holds a value of
//! any of them, for callers that pick the analysis space at run time.

use crate::color::{AlmostEq, Bgra32, CieLuv, CieXyz, Cmyk, Color, Hsl, Hsv, YCbCr};
use crate::{Error, Result};
use std::fmt;

/// Color spaces convertible to and from [`Color`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorSpaceKind {
    /// Byte-per-channel BGRA
    Bgra32,
    /// CIE L*u*v*
    CieLuv,
    /// CIE 1931 XYZ
    CieXyz,
    /// Cyan, magenta, yellow, key
    Cmyk,
    /// Hue, saturation, lightness
    Hsl,
    /// Hue, saturation, value
    Hsv,
    /// Full-range BT.601 YCbCr
    YCbCr,
}

impl ColorSpaceKind {
    /// Every supported kind
    pub const ALL: [Self; 7] = [
        Self::Bgra32,
        Self::CieLuv,
        Self::CieXyz,
        Self::Cmyk,
        Self::Hsl,
        Self::Hsv,
        Self::YCbCr,
    ];

    /// Number of channels for this color space
    pub fn channels(&self) -> usize {
        match self {
            Self::CieLuv | Self::CieXyz | Self::Hsl | Self::Hsv | Self::YCbCr => 3,
            Self::Bgra32 | Self::Cmyk => 4,
        }
    }

    /// Whether values of this space carry the source alpha
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Bgra32)
    }
}

/// A value in one of the supported color spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyColorSpace {
    Bgra32(Bgra32),
    CieLuv(CieLuv),
    CieXyz(CieXyz),
    Cmyk(Cmyk),
    Hsl(Hsl),
    Hsv(Hsv),
    YCbCr(YCbCr),
}

impl AnyColorSpace {
    /// Convert a color into the given space
    pub fn from_color(kind: ColorSpaceKind, color: Color) -> Self {
        match kind {
            ColorSpaceKind::Bgra32 => Self::Bgra32(Bgra32::from_color(color)),
            ColorSpaceKind::CieLuv => Self::CieLuv(CieLuv::from_color(color)),
            ColorSpaceKind::CieXyz => Self::CieXyz(CieXyz::from_color(color)),
            ColorSpaceKind::Cmyk => Self::Cmyk(Cmyk::from_color(color)),
            ColorSpaceKind::Hsl => Self::Hsl(Hsl::from_color(color)),
            ColorSpaceKind::Hsv => Self::Hsv(Hsv::from_color(color)),
            ColorSpaceKind::YCbCr => Self::YCbCr(YCbCr::from_color(color)),
        }
    }

    /// Convert back to RGBA
    pub fn to_color(&self) -> Color {
        match self {
            Self::Bgra32(v) => v.to_color(),
            Self::CieLuv(v) => v.to_color(),
            Self::CieXyz(v) => v.to_color(),
            Self::Cmyk(v) => v.to_color(),
            Self::Hsl(v) => v.to_color(),
            Self::Hsv(v) => v.to_color(),
            Self::YCbCr(v) => v.to_color(),
        }
    }

    /// The space this value lives in
    pub fn kind(&self) -> ColorSpaceKind {
        match self {
            Self::Bgra32(_) => ColorSpaceKind::Bgra32,
            Self::CieLuv(_) => ColorSpaceKind::CieLuv,
            Self::CieXyz(_) => ColorSpaceKind::CieXyz,
            Self::Cmyk(_) => ColorSpaceKind::Cmyk,
            Self::Hsl(_) => ColorSpaceKind::Hsl,
            Self::Hsv(_) => ColorSpaceKind::Hsv,
            Self::YCbCr(_) => ColorSpaceKind::YCbCr,
        }
    }

    /// Compare two values with a tolerance
    ///
    /// Values from different spaces have no meaningful distance; comparing
    /// them is an error rather than a silent `false`.
    pub fn try_almost_eq(&self, other: &Self, epsilon: f32) -> Result<bool> {
        match (self, other) {
            (Self::Bgra32(a), Self::Bgra32(b)) => Ok(a.almost_eq(b, epsilon)),
            (Self::CieLuv(a), Self::CieLuv(b)) => Ok(a.almost_eq(b, epsilon)),
            (Self::CieXyz(a), Self::CieXyz(b)) => Ok(a.almost_eq(b, epsilon)),
            (Self::Cmyk(a), Self::Cmyk(b)) => Ok(a.almost_eq(b, epsilon)),
            (Self::Hsl(a), Self::Hsl(b)) => Ok(a.almost_eq(b, epsilon)),
            (Self::Hsv(a), Self::Hsv(b)) => Ok(a.almost_eq(b, epsilon)),
            (Self::YCbCr(a), Self::YCbCr(b)) => Ok(a.almost_eq(b, epsilon)),
            _ => Err(Error::SpaceMismatch {
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }

    /// True when the wrapped value is its space's all-zero sentinel
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bgra32(v) => v.is_empty(),
            Self::CieLuv(v) => v.is_empty(),
            Self::CieXyz(v) => v.is_empty(),
            Self::Cmyk(v) => v.is_empty(),
            Self::Hsl(v) => v.is_empty(),
            Self::Hsv(v) => v.is_empty(),
            Self::YCbCr(v) => v.is_empty(),
        }
    }
}

impl fmt::Display for AnyColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bgra32(v) => fmt::Display::fmt(v, f),
            Self::CieLuv(v) => fmt::Display::fmt(v, f),
            Self::CieXyz(v) => fmt::Display::fmt(v, f),
            Self::Cmyk(v) => fmt::Display::fmt(v, f),
            Self::Hsl(v) => fmt::Display::fmt(v, f),
            Self::Hsv(v) => fmt::Display::fmt(v, f),
            Self::YCbCr(v) => fmt::Display::fmt(v, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EPSILON;

    #[test]
    fn test_channels() {
        assert_eq!(ColorSpaceKind::Cmyk.channels(), 4);
        assert_eq!(ColorSpaceKind::Hsl.channels(), 3);
        assert!(ColorSpaceKind::Bgra32.has_alpha());
        assert!(!ColorSpaceKind::CieXyz.has_alpha());
    }

    #[test]
    fn test_roundtrip_every_kind() {
        let c = Color::rgb(0.25, 0.5, 0.75);
        for kind in ColorSpaceKind::ALL {
            let value = AnyColorSpace::from_color(kind, c);
            assert_eq!(value.kind(), kind);
            let back = value.to_color();
            // YCbCr and Bgra32 are byte-quantized
            assert!(c.approx_eq(&back, 0.01), "{kind:?}: {back:?}");
        }
    }

    #[test]
    fn test_same_kind_comparison() {
        let a = AnyColorSpace::from_color(ColorSpaceKind::Hsv, Color::RED);
        let b = AnyColorSpace::Hsv(Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(a.try_almost_eq(&b, EPSILON), Ok(true));
    }

    #[test]
    fn test_cross_kind_comparison_fails() {
        let a = AnyColorSpace::from_color(ColorSpaceKind::Hsl, Color::BLACK);
        let b = AnyColorSpace::from_color(ColorSpaceKind::Hsv, Color::BLACK);
        // Both are all-zero, yet they must not compare as equal
        assert!(a.is_empty() && b.is_empty());
        assert_eq!(
            a.try_almost_eq(&b, EPSILON),
            Err(Error::SpaceMismatch {
                left: ColorSpaceKind::Hsl,
                right: ColorSpaceKind::Hsv,
            })
        );
    }

    #[test]
    fn test_display_delegates() {
        let v = AnyColorSpace::from_color(ColorSpaceKind::YCbCr, Color::WHITE);
        assert_eq!(v.to_string(), "YCbCr [ Y=255, Cb=128, Cr=128 ]");
    }
}
