//! Color types and color space conversions
//!
//! This module provides:
//! - [`Color`], the canonical normalized RGBA representation
//! - Device spaces: CMYK, HSL, HSV, YCbCr, BGRA32
//! - Perceptual spaces: CIE XYZ and CIE L*u*v*
//! - White point definitions
//!
//! Every space converts explicitly with `from_color` / `to_color` and
//! compares with a shared tolerance ([`EPSILON`]).

mod almost_eq;
pub mod bgra32;
pub mod cmyk;
pub mod hsl;
pub mod hsv;
pub mod luv;
pub mod rgba;
pub mod space;
pub mod white_point;
pub mod xyz;
pub mod ycbcr;

pub use almost_eq::{AlmostEq, EPSILON, almost_equal};
pub use bgra32::Bgra32;
pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use luv::CieLuv;
pub use rgba::Color;
pub use space::{AnyColorSpace, ColorSpaceKind};
pub use white_point::{D50, D65, WhitePoint};
pub use xyz::CieXyz;
pub use ycbcr::YCbCr;
