//! IEEE half-precision formats
//!
//! Lanes are stored unnormalized. Values beyond the finite half range clamp
//! to ±65504 and NaN stores as zero.

use super::{PackedPixel, PixelFormat};
use crate::color::Color;
use bytemuck::{Pod, Zeroable};
use half::f16;

#[inline]
fn to_half(v: f32) -> f16 {
    if v.is_nan() {
        return f16::ZERO;
    }
    f16::from_f32(v.clamp(f16::MIN.to_f32(), f16::MAX.to_f32()))
}

/// A single half-float channel stored in red
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct HalfSingle(pub u16);

impl HalfSingle {
    pub fn new(value: f32) -> Self {
        Self(to_half(value).to_bits())
    }

    pub fn value(&self) -> f32 {
        f16::from_bits(self.0).to_f32()
    }
}

impl PackedPixel for HalfSingle {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::HalfSingle;

    #[inline]
    fn pack(color: Color) -> Self {
        Self::new(color.r)
    }

    #[inline]
    fn to_color(&self) -> Color {
        Color::rgb(self.value(), 0.0, 0.0)
    }

    #[inline]
    fn packed(&self) -> u16 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u16) -> Self {
        Self(packed)
    }
}

/// Four half-float channels, red in the low 16 bits
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct HalfVector4(pub u64);

impl HalfVector4 {
    /// The four lanes as halves in R, G, B, A order
    pub fn lanes(&self) -> [f16; 4] {
        [0, 16, 32, 48].map(|shift| f16::from_bits((self.0 >> shift) as u16))
    }
}

impl PackedPixel for HalfVector4 {
    type Packed = u64;
    const FORMAT: PixelFormat = PixelFormat::HalfVector4;

    fn pack(color: Color) -> Self {
        let word = color
            .to_array()
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &v)| acc | (to_half(v).to_bits() as u64) << (16 * i));
        Self(word)
    }

    fn to_color(&self) -> Color {
        Color::from_array(self.lanes().map(f16::to_f32))
    }

    #[inline]
    fn packed(&self) -> u64 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self(packed)
    }
}
