//! Little-endian RGBA word formats
//!
//! Red occupies the least significant field in every layout here.

use super::{PackedPixel, PixelFormat, pack_unorm, unpack_unorm};
use crate::color::Color;
use bytemuck::{Pod, Zeroable};

/// 8 bits per channel, `r | g << 8 | b << 16 | a << 24`
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba32(pub u32);

impl Rgba32 {
    /// Pack from bytes without going through floats
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    /// Bytes in R, G, B, A order
    #[inline]
    pub const fn to_rgba8(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

impl PackedPixel for Rgba32 {
    type Packed = u32;
    const FORMAT: PixelFormat = PixelFormat::Rgba32;

    #[inline]
    fn pack(color: Color) -> Self {
        let [r, g, b, a] = color.to_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    #[inline]
    fn to_color(&self) -> Color {
        let [r, g, b, a] = self.to_rgba8();
        Color::from_bytes(r, g, b, a)
    }

    #[inline]
    fn packed(&self) -> u32 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    #[inline]
    fn from_bytes(x: u8, y: u8, z: u8, w: u8) -> Self {
        Self::from_rgba8(x, y, z, w)
    }
}

/// 16 bits per channel
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba64(pub u64);

impl PackedPixel for Rgba64 {
    type Packed = u64;
    const FORMAT: PixelFormat = PixelFormat::Rgba64;

    fn pack(color: Color) -> Self {
        let lane = |v: f32| pack_unorm(v, 0xFFFF) as u64;
        Self(lane(color.r) | lane(color.g) << 16 | lane(color.b) << 32 | lane(color.a) << 48)
    }

    fn to_color(&self) -> Color {
        let lane = |shift: u32| unpack_unorm((self.0 >> shift & 0xFFFF) as u32, 0xFFFF);
        Color::new(lane(0), lane(16), lane(32), lane(48))
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

/// 10 bits per color channel with 2-bit alpha
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rgba1010102(pub u32);

impl PackedPixel for Rgba1010102 {
    type Packed = u32;
    const FORMAT: PixelFormat = PixelFormat::Rgba1010102;

    fn pack(color: Color) -> Self {
        let r = pack_unorm(color.r, 0x3FF);
        let g = pack_unorm(color.g, 0x3FF);
        let b = pack_unorm(color.b, 0x3FF);
        let a = pack_unorm(color.a, 0x3);
        Self(r | g << 10 | b << 20 | a << 30)
    }

    fn to_color(&self) -> Color {
        let v = self.0;
        Color::new(
            unpack_unorm(v & 0x3FF, 0x3FF),
            unpack_unorm(v >> 10 & 0x3FF, 0x3FF),
            unpack_unorm(v >> 20 & 0x3FF, 0x3FF),
            unpack_unorm(v >> 30, 0x3),
        )
    }

    #[inline]
    fn packed(&self) -> u32 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }
}

/// Two 16-bit channels, red and green
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Rg32(pub u32);

impl PackedPixel for Rg32 {
    type Packed = u32;
    const FORMAT: PixelFormat = PixelFormat::Rg32;

    fn pack(color: Color) -> Self {
        Self(pack_unorm(color.r, 0xFFFF) | pack_unorm(color.g, 0xFFFF) << 16)
    }

    fn to_color(&self) -> Color {
        Color::rgb(
            unpack_unorm(self.0 & 0xFFFF, 0xFFFF),
            unpack_unorm(self.0 >> 16, 0xFFFF),
            0.0,
        )
    }

    #[inline]
    fn packed(&self) -> u32 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba32_layout() {
        assert_eq!(Rgba32::pack(Color::RED).packed(), 0xFF00_00FF);
        assert_eq!(Rgba32::pack(Color::BLUE).packed(), 0xFFFF_0000);
        assert_eq!(Rgba32::pack(Color::TRANSPARENT).packed(), 0);
        assert_eq!(Rgba32::from_bytes(0x12, 0x34, 0x56, 0x78).packed(), 0x7856_3412);
    }

    #[test]
    fn test_rgba32_byte_exact() {
        for v in 0..=255u8 {
            let px = Rgba32::from_rgba8(v, 255 - v, v / 2, 255);
            assert_eq!(Rgba32::pack(px.to_color()), px);
        }
    }

    #[test]
    fn test_rgba64_layout() {
        assert_eq!(Rgba64::pack(Color::WHITE).packed(), u64::MAX);
        assert_eq!(
            Rgba64::pack(Color::new(1.0, 0.0, 0.0, 1.0)).packed(),
            0xFFFF_0000_0000_FFFF
        );
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert!(c.approx_eq(&Rgba64::pack(c).to_color(), 1e-4));
    }

    #[test]
    fn test_rgba1010102_layout() {
        assert_eq!(Rgba1010102::pack(Color::WHITE).packed(), u32::MAX);
        assert_eq!(Rgba1010102::pack(Color::GREEN).packed(), 0xC00F_FC00);
        let c = Rgba1010102::pack(Color::new(0.0, 0.0, 0.0, 0.4)).to_color();
        assert!((c.a - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rg32_defaults() {
        let c = Rg32::pack(Color::new(0.25, 0.75, 0.9, 0.1)).to_color();
        assert!((c.r - 0.25).abs() < 1e-4);
        assert!((c.g - 0.75).abs() < 1e-4);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }
}
