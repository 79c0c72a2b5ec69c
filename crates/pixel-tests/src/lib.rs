//! # pixel-tests
//!
//! Cross-checking and property testing for oxpixel.
//!
//! This crate provides:
//! - Deterministic pattern generators for color buffers
//! - Quantization error statistics (ΔE*uv, RMSE, PSNR)
//! - Integration tests comparing color space conversions against the
//!   `palette` crate
//! - Property tests for the packed pixel formats and quantizers
//!
//! ## Test Categories
//!
//! 1. **Packed Pixels**: layouts, clamping, byte serialization
//! 2. **Color Spaces**: HSL, HSV and XYZ parity with `palette`
//! 3. **Quantizers**: palette bounds, index validity, exact reproduction

pub mod accuracy;
pub mod patterns;

pub use accuracy::{ErrorStats, compare_color_buffers, delta_e_luv, quantization_error};
pub use patterns::{TestPattern, distinct_colors, generate_pattern, sizes};
