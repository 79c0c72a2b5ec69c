//! Signed normalized byte formats

use super::{PackedPixel, PixelFormat, pack_snorm, unpack_snorm};
use crate::color::Color;
use bytemuck::{Pod, Zeroable};

/// Four signed normalized bytes in [-1, 1], red in the low byte
///
/// Colors outside [-1, 1] clamp. Byte -128 reads back as -1, same as -127.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct NormalizedByte4(pub u32);

impl PackedPixel for NormalizedByte4 {
    type Packed = u32;
    const FORMAT: PixelFormat = PixelFormat::NormalizedByte4;

    fn pack(color: Color) -> Self {
        let bytes = color.to_array().map(|v| pack_snorm(v, 127) as i8 as u8);
        Self(u32::from_le_bytes(bytes))
    }

    fn to_color(&self) -> Color {
        Color::from_array(self.0.to_le_bytes().map(|b| unpack_snorm(b as i8 as i32, 127)))
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
