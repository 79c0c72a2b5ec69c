//! Canonical RGBA color
//!
//! [`Color`] is the truth representation every packed format and color
//! space converts through: four normalized `f32` lanes in [0, 1].

use crate::math::{srgb_compress, srgb_expand};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Mul, Sub};

/// Normalized RGBA color (all lanes nominally 0.0-1.0)
///
/// Equality is exact on the stored bits. Use [`Color::approx_eq`] for
/// tolerance-based comparisons of derived values.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component (0 = transparent, 1 = opaque)
    pub a: f32,
}

impl Color {
    /// Create a new color from raw lane values
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create from an `[r, g, b, a]` array
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to an `[r, g, b, a]` array
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from 8-bit values (0-255)
    #[inline]
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Convert to 8-bit values (0-255), rounding to nearest
    #[inline]
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            unorm_to_u8(self.r),
            unorm_to_u8(self.g),
            unorm_to_u8(self.b),
            unorm_to_u8(self.a),
        ]
    }

    /// Clamp all lanes to [0, 1]; NaN becomes 0
    #[inline]
    pub fn clamp(&self) -> Self {
        Self::new(
            clamp_unit(self.r),
            clamp_unit(self.g),
            clamp_unit(self.b),
            clamp_unit(self.a),
        )
    }

    /// Decode the sRGB transfer function on the color lanes; alpha is kept
    #[inline]
    pub fn expand(&self) -> Self {
        Self::new(
            srgb_expand(self.r),
            srgb_expand(self.g),
            srgb_expand(self.b),
            self.a,
        )
    }

    /// Encode linear color lanes with the sRGB transfer function
    #[inline]
    pub fn compress(&self) -> Self {
        Self::new(
            srgb_compress(self.r),
            srgb_compress(self.g),
            srgb_compress(self.b),
            self.a,
        )
    }

    /// Squared Euclidean distance over all four lanes
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        let da = self.a - other.a;
        dr * dr + dg * dg + db * db + da * da
    }

    /// Check if approximately equal to another color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        crate::color::almost_equal(self.to_array(), other.to_array(), epsilon)
    }

    /// Fully transparent black
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Red primary
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Green primary
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Blue primary
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
}

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub(crate) fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn unorm_to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

impl From<[f32; 4]> for Color {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::from_bytes(arr[0], arr[1], arr[2], arr[3])
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
