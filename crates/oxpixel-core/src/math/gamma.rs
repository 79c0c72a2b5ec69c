//! sRGB companding
//!
//! Converts between gamma-encoded sRGB channel values and linear light.
//! Both directions use the IEC 61966-2-1 piecewise transfer function.

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light in [0,1].
#[inline]
pub fn srgb_expand(encoded: f32) -> f32 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light in [0,1] to an sRGB-encoded value in [0,1].
#[inline]
pub fn srgb_compress(linear: f32) -> f32 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
