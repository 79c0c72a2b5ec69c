//! Runtime pixel format tags

use super::{
    Alpha8, Bgr565, Bgra4444, Bgra5551, HalfSingle, HalfVector4, NormalizedByte4, PackedPixel,
    PackedWord, Rg32, Rgba32, Rgba64, Rgba1010102,
};
use crate::color::Color;
use std::fmt;

/// Packed pixel formats selectable at run time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelFormat {
    Alpha8,
    Bgr565,
    Bgra4444,
    Bgra5551,
    HalfSingle,
    HalfVector4,
    NormalizedByte4,
    Rg32,
    Rgba32,
    Rgba64,
    Rgba1010102,
}

fn pack_as<P: PackedPixel>(color: Color) -> u64 {
    P::pack(color).packed().into()
}

fn unpack_as<P: PackedPixel>(word: u64) -> Color {
    P::from_packed(P::Packed::truncate(word)).to_color()
}

impl PixelFormat {
    pub const ALL: [Self; 11] = [
        Self::Alpha8,
        Self::Bgr565,
        Self::Bgra4444,
        Self::Bgra5551,
        Self::HalfSingle,
        Self::HalfVector4,
        Self::NormalizedByte4,
        Self::Rg32,
        Self::Rgba32,
        Self::Rgba64,
        Self::Rgba1010102,
    ];

    /// Width of the packed word in bits
    pub fn bits(&self) -> u32 {
        match self {
            Self::Alpha8 => 8,
            Self::Bgr565 | Self::Bgra4444 | Self::Bgra5551 | Self::HalfSingle => 16,
            Self::NormalizedByte4 | Self::Rg32 | Self::Rgba32 | Self::Rgba1010102 => 32,
            Self::HalfVector4 | Self::Rgba64 => 64,
        }
    }

    /// Width of the packed word in bytes
    pub fn bytes(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Whether alpha survives a pack/unpack cycle
    pub fn has_alpha(&self) -> bool {
        !matches!(self, Self::Bgr565 | Self::HalfSingle | Self::Rg32)
    }

    /// Pack a color into this format, zero-extended to 64 bits
    pub fn pack_word(&self, color: Color) -> u64 {
        match self {
            Self::Alpha8 => pack_as::<Alpha8>(color),
            Self::Bgr565 => pack_as::<Bgr565>(color),
            Self::Bgra4444 => pack_as::<Bgra4444>(color),
            Self::Bgra5551 => pack_as::<Bgra5551>(color),
            Self::HalfSingle => pack_as::<HalfSingle>(color),
            Self::HalfVector4 => pack_as::<HalfVector4>(color),
            Self::NormalizedByte4 => pack_as::<NormalizedByte4>(color),
            Self::Rg32 => pack_as::<Rg32>(color),
            Self::Rgba32 => pack_as::<Rgba32>(color),
            Self::Rgba64 => pack_as::<Rgba64>(color),
            Self::Rgba1010102 => pack_as::<Rgba1010102>(color),
        }
    }

    /// Unpack a word of this format; bits above [`bits`](Self::bits) are ignored
    pub fn unpack_word(&self, word: u64) -> Color {
        match self {
            Self::Alpha8 => unpack_as::<Alpha8>(word),
            Self::Bgr565 => unpack_as::<Bgr565>(word),
            Self::Bgra4444 => unpack_as::<Bgra4444>(word),
            Self::Bgra5551 => unpack_as::<Bgra5551>(word),
            Self::HalfSingle => unpack_as::<HalfSingle>(word),
            Self::HalfVector4 => unpack_as::<HalfVector4>(word),
            Self::NormalizedByte4 => unpack_as::<NormalizedByte4>(word),
            Self::Rg32 => unpack_as::<Rg32>(word),
            Self::Rgba32 => unpack_as::<Rgba32>(word),
            Self::Rgba64 => unpack_as::<Rgba64>(word),
            Self::Rgba1010102 => unpack_as::<Rgba1010102>(word),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_match_word_type() {
        fn word_bits<P: PackedPixel>() -> u32 {
            P::Packed::BITS
        }
        assert_eq!(PixelFormat::Alpha8.bits(), word_bits::<Alpha8>());
        assert_eq!(PixelFormat::Bgr565.bits(), word_bits::<Bgr565>());
        assert_eq!(PixelFormat::HalfVector4.bits(), word_bits::<HalfVector4>());
        assert_eq!(PixelFormat::Rgba1010102.bits(), word_bits::<Rgba1010102>());
        assert_eq!(Rgba32::FORMAT.bytes(), 4);
    }

    #[test]
    fn test_dispatch_matches_static() {
        let c = Color::new(0.2, 0.4, 0.6, 0.8);
        assert_eq!(
            PixelFormat::Rgba32.pack_word(c),
            Rgba32::pack(c).packed() as u64
        );
        assert_eq!(
            PixelFormat::Bgr565.unpack_word(0xF800),
            Bgr565(0xF800).to_color()
        );
    }

    #[test]
    fn test_unpack_ignores_high_bits() {
        let low = PixelFormat::Alpha8.unpack_word(0x80);
        let high = PixelFormat::Alpha8.unpack_word(0xFFFF_FF80);
        assert_eq!(low, high);
    }

    #[test]
    fn test_alpha_survival() {
        let c = Color::new(1.0, 1.0, 1.0, 0.0);
        for format in PixelFormat::ALL {
            let back = format.unpack_word(format.pack_word(c));
            if format.has_alpha() {
                assert_eq!(back.a, 0.0, "{format}");
            } else {
                assert_eq!(back.a, 1.0, "{format}");
            }
        }
    }
}
