//! Batch sRGB companding over color buffers
//!
//! Alpha is left untouched; only the color lanes are transferred. Color
//! lanes are clamped to [0, 1] first, with NaN reading as 0.

use crate::color::Color;
use crate::color::rgba::clamp_unit;
use multiversion::multiversion;

const EXPAND_THRESHOLD: f32 = 0.04045;
const COMPRESS_THRESHOLD: f32 = 0.0031308;

#[inline(always)]
fn expand(x: f32) -> f32 {
    let x = clamp_unit(x);
    if x <= EXPAND_THRESHOLD {
        x * (1.0 / 12.92)
    } else {
        ((x + 0.055) * (1.0 / 1.055)).powf(2.4)
    }
}

#[inline(always)]
fn compress(x: f32) -> f32 {
    let x = clamp_unit(x);
    if x <= COMPRESS_THRESHOLD {
        x * 12.92
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Decode sRGB-encoded colors to linear light in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn expand_colors(data: &mut [Color]) {
    for color in data.iter_mut() {
        color.r = expand(color.r);
        color.g = expand(color.g);
        color.b = expand(color.b);
    }
}

/// Encode linear-light colors to sRGB in place
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn compress_colors(data: &mut [Color]) {
    for color in data.iter_mut() {
        color.r = compress(color.r);
        color.g = compress(color.g);
        color.b = compress(color.b);
    }
}
