//! Encoder options consumed by downstream image writers

use crate::color::Color;
use crate::packed::ComponentOrder;
use crate::quantize::{DEFAULT_MAX_COLORS, QuantizedImage, QuantizerKind};
use crate::{Error, Result};

/// Quality used when none is given
pub const DEFAULT_QUALITY: u8 = 75;

/// Options shared by every encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderOptions {
    /// Encoder quality, 1 to 100
    pub quality: u8,
    /// Quantizer for palette-based output; `None` lets the encoder choose
    pub quantizer: Option<QuantizerKind>,
    /// Largest palette a quantizing encoder may produce
    pub max_colors: usize,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            quantizer: None,
            max_colors: DEFAULT_MAX_COLORS,
        }
    }
}

impl EncoderOptions {
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_quantizer(mut self, quantizer: QuantizerKind) -> Self {
        self.quantizer = Some(quantizer);
        self
    }

    pub fn with_max_colors(mut self, max_colors: usize) -> Self {
        self.max_colors = max_colors;
        self
    }

    /// Check that every field is in range
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.quality) {
            return Err(Error::InvalidQuality(self.quality));
        }
        if self.max_colors == 0 {
            return Err(Error::InvalidMaxColors(self.max_colors));
        }
        Ok(())
    }

    /// Validate, then quantize with the configured (or default) quantizer
    pub fn quantize(&self, pixels: &[Color]) -> Result<QuantizedImage> {
        self.validate()?;
        self.quantizer
            .unwrap_or_default()
            .quantize(pixels, self.max_colors)
    }
}

/// Bit depth of BMP pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BmpBitsPerPixel {
    /// Blue, green, red
    #[default]
    Pixel24,
    /// Blue, green, red, alpha
    Pixel32,
}

impl BmpBitsPerPixel {
    pub fn bits(&self) -> u16 {
        match self {
            Self::Pixel24 => 24,
            Self::Pixel32 => 32,
        }
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bits() as usize / 8
    }

    /// Byte order of one stored pixel
    pub fn component_order(&self) -> ComponentOrder {
        match self {
            Self::Pixel24 => ComponentOrder::Zyx,
            Self::Pixel32 => ComponentOrder::Zyxw,
        }
    }
}

/// Options for BMP output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BmpEncoderOptions {
    pub encoder: EncoderOptions,
    pub bits_per_pixel: BmpBitsPerPixel,
}

impl BmpEncoderOptions {
    pub fn with_bits_per_pixel(mut self, bits_per_pixel: BmpBitsPerPixel) -> Self {
        self.bits_per_pixel = bits_per_pixel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.encoder.validate()
    }
}

impl From<EncoderOptions> for BmpEncoderOptions {
    fn from(encoder: EncoderOptions) -> Self {
        Self {
            encoder,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packed::{PackedPixel, Rgba32};

    #[test]
    fn test_defaults() {
        let opts = EncoderOptions::default();
        assert_eq!(opts.quality, 75);
        assert_eq!(opts.quantizer, None);
        assert_eq!(opts.max_colors, 256);
        assert!(opts.validate().is_ok());
        assert_eq!(BmpEncoderOptions::default().bits_per_pixel, BmpBitsPerPixel::Pixel24);
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            EncoderOptions::default().with_quality(0).validate(),
            Err(Error::InvalidQuality(0))
        );
        assert_eq!(
            EncoderOptions::default().with_quality(101).validate(),
            Err(Error::InvalidQuality(101))
        );
        assert_eq!(
            EncoderOptions::default().with_max_colors(0).validate(),
            Err(Error::InvalidMaxColors(0))
        );
        assert!(EncoderOptions::default().with_quality(100).validate().is_ok());
    }

    #[test]
    fn test_quantize_uses_options() {
        let pixels = vec![Color::RED, Color::GREEN, Color::BLUE, Color::WHITE];
        let opts = EncoderOptions::default()
            .with_quantizer(QuantizerKind::Wu)
            .with_max_colors(2);
        let image = opts.quantize(&pixels).unwrap();
        assert!(image.palette().len() <= 2);
        assert!(opts.with_quality(0).quantize(&pixels).is_err());
    }

    #[test]
    fn test_bmp_layout() {
        assert_eq!(BmpBitsPerPixel::Pixel24.bytes_per_pixel(), 3);
        assert_eq!(BmpBitsPerPixel::Pixel32.bits(), 32);

        let px = Rgba32::from_bytes(10, 20, 30, 40);
        let bpp = BmpBitsPerPixel::Pixel32;
        let mut row = vec![0u8; bpp.bytes_per_pixel()];
        px.to_bytes(&mut row, 0, bpp.component_order()).unwrap();
        assert_eq!(row, [30, 20, 10, 40]);
    }

    #[test]
    fn test_from_encoder_options() {
        let bmp: BmpEncoderOptions = EncoderOptions::default().with_quality(90).into();
        assert_eq!(bmp.encoder.quality, 90);
        assert_eq!(bmp.bits_per_pixel, BmpBitsPerPixel::Pixel24);
        assert!(bmp.with_bits_per_pixel(BmpBitsPerPixel::Pixel32).validate().is_ok());
    }
}
