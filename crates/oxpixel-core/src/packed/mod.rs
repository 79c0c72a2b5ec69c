//! Packed pixel formats
//!
//! A packed pixel stores a color in one fixed-width word with a defined
//! bit allocation per channel. Every format implements [`PackedPixel`],
//! which converts through the canonical [`Color`].
//!
//! Packing scales each lane to its bit field, rounds to nearest and clamps
//! to the field's range. Out-of-range input (including NaN and ±∞) is
//! clamped, never wrapped.

mod alpha8;
mod bgr;
mod format;
mod half;
mod normalized;
mod rgba;

pub use alpha8::Alpha8;
pub use bgr::{Bgr565, Bgra4444, Bgra5551};
pub use format::PixelFormat;
pub use half::{HalfSingle, HalfVector4};
pub use normalized::NormalizedByte4;
pub use rgba::{Rg32, Rgba32, Rgba64, Rgba1010102};

use crate::color::Color;
use crate::color::rgba::clamp_unit;
use crate::{Error, Result};
use std::fmt::Debug;

/// Order in which color components are written to a byte buffer
///
/// X, Y, Z and W stand for red, green, blue and alpha of the unpacked
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentOrder {
    /// Red, green, blue
    Xyz,
    /// Blue, green, red
    Zyx,
    /// Red, green, blue, alpha
    Xyzw,
    /// Blue, green, red, alpha
    Zyxw,
}

impl ComponentOrder {
    /// Number of components written for this order
    pub fn component_count(&self) -> usize {
        if self.has_alpha() { 4 } else { 3 }
    }

    /// Whether the order includes an alpha component
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Xyzw | Self::Zyxw)
    }
}

/// Fixed-width integer backing a packed pixel
pub trait PackedWord: Copy + Default + Eq + Debug + Into<u64> + Send + Sync + 'static {
    /// Bit width of the word
    const BITS: u32;

    /// Keep the low bits of a 64-bit word
    fn truncate(word: u64) -> Self;
}

macro_rules! impl_packed_word {
    ($($ty:ty),*) => {
        $(
            impl PackedWord for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn truncate(word: u64) -> Self {
                    word as $ty
                }
            }
        )*
    };
}

impl_packed_word!(u8, u16, u32, u64);

/// Conversion contract shared by all packed formats
pub trait PackedPixel: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Backing integer type
    type Packed: PackedWord;

    /// Runtime tag of this format
    const FORMAT: PixelFormat;

    /// Pack a color, clamping each lane to the representable range
    fn pack(color: Color) -> Self;

    /// Unpack to a color; lanes the format does not store read as 0,
    /// except alpha which reads as 1
    fn to_color(&self) -> Color;

    /// The raw packed word
    fn packed(&self) -> Self::Packed;

    /// Wrap a raw packed word
    fn from_packed(packed: Self::Packed) -> Self;

    /// Pack from 8-bit components given in X, Y, Z, W (R, G, B, A) order
    fn from_bytes(x: u8, y: u8, z: u8, w: u8) -> Self {
        Self::pack(Color::from_bytes(x, y, z, w))
    }

    /// Write this pixel's 8-bit components into `buffer` at `offset`
    ///
    /// At least three bytes must be available. A four-component order
    /// whose span holds only three bytes omits the alpha byte. A
    /// three-component order whose span is exactly four bytes also writes
    /// the alpha byte as a trailer. Formats without alpha write 255.
    fn to_bytes(&self, buffer: &mut [u8], offset: usize, order: ComponentOrder) -> Result<()> {
        let available = buffer.len().saturating_sub(offset);
        if available < 3 {
            return Err(Error::BufferSize {
                expected: offset + 3,
                actual: buffer.len(),
            });
        }

        let [x, y, z, w] = self.to_color().to_bytes();
        let components = match order {
            ComponentOrder::Xyz | ComponentOrder::Xyzw => [x, y, z, w],
            ComponentOrder::Zyx | ComponentOrder::Zyxw => [z, y, x, w],
        };

        let count = if order.has_alpha() {
            order.component_count().min(available)
        } else if available == 4 {
            4
        } else {
            3
        };

        buffer[offset..offset + count].copy_from_slice(&components[..count]);
        Ok(())
    }
}

/// Pack a buffer of colors
pub fn pack_slice<P: PackedPixel>(colors: &[Color]) -> Vec<P> {
    colors.iter().map(|&c| P::pack(c)).collect()
}

/// Unpack a buffer of packed pixels
pub fn unpack_slice<P: PackedPixel>(pixels: &[P]) -> Vec<Color> {
    pixels.iter().map(PackedPixel::to_color).collect()
}

/// Scale a [0, 1] lane to an unsigned field with maximum `max`
#[inline]
pub(crate) fn pack_unorm(v: f32, max: u32) -> u32 {
    (clamp_unit(v) * max as f32).round() as u32
}

/// Inverse of [`pack_unorm`]
#[inline]
pub(crate) fn unpack_unorm(bits: u32, max: u32) -> f32 {
    bits as f32 / max as f32
}

/// Scale a [-1, 1] lane to a signed field with maximum `max`
#[inline]
pub(crate) fn pack_snorm(v: f32, max: i32) -> i32 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) };
    (v * max as f32).round() as i32
}

/// Inverse of [`pack_snorm`]
#[inline]
pub(crate) fn unpack_snorm(bits: i32, max: i32) -> f32 {
    (bits as f32 / max as f32).max(-1.0)
}
