//! 16-bit BGR(A) formats
//!
//! Bit layouts, most significant field first:
//! - `Bgr565`:   R5 G6 B5
//! - `Bgra4444`: A4 R4 G4 B4
//! - `Bgra5551`: A1 R5 G5 B5

use super::{PackedPixel, PixelFormat, pack_unorm, unpack_unorm};
use crate::color::Color;
use bytemuck::{Pod, Zeroable};

/// 5-6-5 opaque color
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Bgr565(pub u16);

impl PackedPixel for Bgr565 {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::Bgr565;

    fn pack(color: Color) -> Self {
        let r = pack_unorm(color.r, 31);
        let g = pack_unorm(color.g, 63);
        let b = pack_unorm(color.b, 31);
        Self((r << 11 | g << 5 | b) as u16)
    }

    fn to_color(&self) -> Color {
        let v = self.0 as u32;
        Color::rgb(
            unpack_unorm(v >> 11 & 0x1F, 31),
            unpack_unorm(v >> 5 & 0x3F, 63),
            unpack_unorm(v & 0x1F, 31),
        )
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

/// 4 bits per channel with alpha
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Bgra4444(pub u16);

impl PackedPixel for Bgra4444 {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::Bgra4444;

    fn pack(color: Color) -> Self {
        let a = pack_unorm(color.a, 15);
        let r = pack_unorm(color.r, 15);
        let g = pack_unorm(color.g, 15);
        let b = pack_unorm(color.b, 15);
        Self((a << 12 | r << 8 | g << 4 | b) as u16)
    }

    fn to_color(&self) -> Color {
        let v = self.0 as u32;
        Color::new(
            unpack_unorm(v >> 8 & 0xF, 15),
            unpack_unorm(v >> 4 & 0xF, 15),
            unpack_unorm(v & 0xF, 15),
            unpack_unorm(v >> 12 & 0xF, 15),
        )
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

/// 5 bits per color channel with a 1-bit alpha
///
/// The alpha bit follows the same round-to-nearest rule as wider fields:
/// alpha >= 0.5 sets it.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Bgra5551(pub u16);

impl PackedPixel for Bgra5551 {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::Bgra5551;

    fn pack(color: Color) -> Self {
        let a = pack_unorm(color.a, 1);
        let r = pack_unorm(color.r, 31);
        let g = pack_unorm(color.g, 31);
        let b = pack_unorm(color.b, 31);
        Self((a << 15 | r << 10 | g << 5 | b) as u16)
    }

    fn to_color(&self) -> Color {
        let v = self.0 as u32;
        Color::new(
            unpack_unorm(v >> 10 & 0x1F, 31),
            unpack_unorm(v >> 5 & 0x1F, 31),
            unpack_unorm(v & 0x1F, 31),
            unpack_unorm(v >> 15, 1),
        )
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
