//! # oxpixel - pixel formats, color spaces and quantization
//!
//! The color core of an image toolkit: packed pixel layouts, device and
//! perceptual color space conversions, and palette reduction for
//! low-bit-depth output.
//!
//! ## Overview
//!
//! - [`Color`]: canonical normalized RGBA, four `f32` lanes
//! - [`packed`]: fixed-width pixel words (`Rgba32`, `Bgr565`, `HalfVector4`, ...)
//!   implementing [`PackedPixel`]
//! - [`color`]: HSL, HSV, CMYK, YCbCr, CIE XYZ, CIE L*u*v* and BGRA32 with
//!   explicit `from_color` / `to_color` conversions
//! - [`quantize`]: Octree, Wu and fixed-palette quantizers producing a
//!   [`QuantizedImage`]
//! - [`simd`]: runtime-dispatched batch loops over color buffers
//!
//! ## Quick Start
//!
//! ```
//! use oxpixel_core::{Color, Hsl, PackedPixel, QuantizerKind, Rgba32};
//!
//! // Pack and unpack
//! let px = Rgba32::pack(Color::new(1.0, 0.5, 0.0, 1.0));
//! assert_eq!(px.packed(), 0xFF00_80FF);
//!
//! // Convert to a cylindrical space
//! let hsl = Hsl::from_color(px.to_color());
//! assert!((hsl.h - 30.0).abs() < 0.5);
//!
//! // Reduce an image to at most 16 colors
//! let pixels = vec![Color::RED, Color::GREEN, Color::BLUE, Color::RED];
//! let image = QuantizerKind::Wu.quantize(&pixels, 16).unwrap();
//! assert_eq!(image.to_pixels(), pixels);
//! ```

pub mod color;
pub mod error;
pub mod math;
pub mod options;
pub mod packed;
pub mod quantize;
pub mod simd;

pub use color::{
    AlmostEq, AnyColorSpace, Bgra32, CieLuv, CieXyz, Cmyk, Color, ColorSpaceKind, Hsl, Hsv,
    WhitePoint, YCbCr,
};
pub use error::{Error, Result};
pub use options::{BmpBitsPerPixel, BmpEncoderOptions, EncoderOptions};
pub use packed::{
    Alpha8, Bgr565, Bgra4444, Bgra5551, ComponentOrder, HalfSingle, HalfVector4,
    NormalizedByte4, PackedPixel, PixelFormat, Rg32, Rgba32, Rgba64, Rgba1010102,
};
pub use quantize::{
    DEFAULT_MAX_COLORS, OctreeQuantizer, PaletteQuantizer, QuantizedImage, Quantizer,
    QuantizerKind, WuQuantizer, quantize,
};

/// Version of oxpixel
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
