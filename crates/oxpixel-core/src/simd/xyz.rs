//! Batch sRGB to CIE XYZ conversion

use crate::color::{CieXyz, Color};
use crate::math::SRGB_TO_XYZ;
use crate::{Error, Result};
use multiversion::multiversion;

/// Convert gamma-encoded colors to XYZ (Y = 100 for white)
///
/// Equivalent to [`CieXyz::from_color`] per element. `dst` must hold at
/// least as many entries as `src`.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn colors_to_xyz(src: &[Color], dst: &mut [CieXyz]) -> Result<()> {
    if dst.len() < src.len() {
        return Err(Error::BufferSize {
            expected: src.len(),
            actual: dst.len(),
        });
    }

    // Pull the matrix into locals so the loop body stays in registers
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = SRGB_TO_XYZ.m;

    for (color, out) in src.iter().zip(dst.iter_mut()) {
        let linear = color.clamp().expand();
        let (r, g, b) = (linear.r * 100.0, linear.g * 100.0, linear.b * 100.0);
        *out = CieXyz::new(
            m00 * r + m01 * g + m02 * b,
            m10 * r + m11 * g + m12 * b,
            m20 * r + m21 * g + m22 * b,
        );
    }
    Ok(())
}
