//! Single-channel 8-bit alpha

use super::{PackedPixel, PixelFormat, pack_unorm, unpack_unorm};
use crate::color::Color;
use bytemuck::{Pod, Zeroable};

/// 8-bit unsigned normalized alpha; color lanes read as black
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Alpha8(pub u8);

impl Alpha8 {
    /// Pack an alpha value, clamping to [0, 1]
    #[inline]
    pub fn new(alpha: f32) -> Self {
        Self(pack_unorm(alpha, 0xFF) as u8)
    }

    /// The alpha value as a float
    #[inline]
    pub fn alpha(&self) -> f32 {
        unpack_unorm(self.0 as u32, 0xFF)
    }
}

impl PackedPixel for Alpha8 {
    type Packed = u8;
    const FORMAT: PixelFormat = PixelFormat::Alpha8;

    #[inline]
    fn pack(color: Color) -> Self {
        Self::new(color.a)
    }

    #[inline]
    fn to_color(&self) -> Color {
        Color::new(0.0, 0.0, 0.0, self.alpha())
    }

    #[inline]
    fn packed(&self) -> u8 {
        self.0
    }

    #[inline]
    fn from_packed(packed: u8) -> Self {
        Self(packed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packed::ComponentOrder;

    #[test]
    fn test_packed_value() {
        let cases: [(f32, u8); 6] = [
            // Limits
            (0.0, 0x00),
            (1.0, 0xFF),
            // Clamping
            (-1234.0, 0x00),
            (1234.0, 0xFF),
            // Ordering
            (124.0 / 255.0, 124),
            (0.1, 26),
        ];
        for (alpha, expected) in cases {
            assert_eq!(Alpha8::new(alpha).packed(), expected, "alpha={alpha}");
        }
    }

    #[test]
    fn test_to_color() {
        for alpha in [0.5f32, 0.1, 0.2] {
            let color = Alpha8::new(alpha).to_color();
            assert_eq!([color.r, color.g, color.b], [0.0, 0.0, 0.0]);
            assert!((color.a - alpha).abs() < 0.005, "alpha={alpha} got={}", color.a);
        }
    }

    #[test]
    fn test_to_bytes() {
        let cases: [(usize, ComponentOrder, &[u8]); 4] = [
            (3, ComponentOrder::Xyz, &[0, 0, 0]),
            (3, ComponentOrder::Zyx, &[0, 0, 0]),
            (4, ComponentOrder::Xyzw, &[0, 0, 0, 128]),
            (4, ComponentOrder::Zyxw, &[0, 0, 0, 128]),
        ];
        let alpha = Alpha8::new(0.5);
        for (size, order, expected) in cases {
            let mut bytes = vec![0u8; size];
            alpha.to_bytes(&mut bytes, 0, order).unwrap();
            assert_eq!(bytes, expected, "{order:?}");
        }
    }

    #[test]
    fn test_pack_ignores_color_lanes() {
        assert_eq!(Alpha8::pack(Color::new(1.0, 0.5, 0.25, 0.0)), Alpha8(0));
    }
}
