//! Quantization error measurement
//!
//! Perceptual error is the Euclidean distance in CIE L*u*v* (ΔE*uv),
//! computed with the library's own XYZ and Luv conversions. RMSE over the
//! four RGBA lanes is reported alongside for a format-level view.

use oxpixel_core::{CieLuv, Color, QuantizedImage};
use rayon::prelude::*;

/// Statistics from comparing two color buffers
#[derive(Debug, Clone)]
pub struct ErrorStats {
    /// Mean ΔE*uv across all samples
    pub mean: f64,
    /// Maximum ΔE*uv
    pub max: f64,
    /// 95th percentile ΔE*uv
    pub p95: f64,
    /// Root mean square error over RGBA lanes, 0 to 1 scale
    pub rmse: f64,
    /// Number of samples
    pub count: usize,
}

impl ErrorStats {
    /// No visible difference anywhere (ΔE < 1.0)
    pub fn is_lossless(&self) -> bool {
        self.max < 1.0
    }

    /// Peak signal-to-noise ratio in dB; infinite for identical buffers
    pub fn psnr(&self) -> f64 {
        if self.rmse == 0.0 {
            f64::INFINITY
        } else {
            -20.0 * self.rmse.log10()
        }
    }
}

/// ΔE*uv between two colors; alpha is ignored
pub fn delta_e_luv(a: &Color, b: &Color) -> f64 {
    let la = CieLuv::from_color(*a);
    let lb = CieLuv::from_color(*b);
    let dl = (la.l - lb.l) as f64;
    let du = (la.u - lb.u) as f64;
    let dv = (la.v - lb.v) as f64;
    (dl * dl + du * du + dv * dv).sqrt()
}

/// Compare two equally sized color buffers
///
/// # Panics
///
/// Panics if the buffers differ in length.
pub fn compare_color_buffers(reference: &[Color], result: &[Color]) -> ErrorStats {
    assert_eq!(reference.len(), result.len());

    let mut delta_es: Vec<f64> = reference
        .par_iter()
        .zip(result.par_iter())
        .map(|(a, b)| delta_e_luv(a, b))
        .collect();
    delta_es.sort_by(|a, b| a.total_cmp(b));

    let squared: f64 = reference
        .iter()
        .zip(result)
        .map(|(a, b)| a.distance_squared(b) as f64)
        .sum();

    let count = reference.len();
    let n = count.max(1) as f64;
    let p95_idx = (count as f64 * 0.95) as usize;

    ErrorStats {
        mean: delta_es.iter().sum::<f64>() / n,
        max: delta_es.last().copied().unwrap_or(0.0),
        p95: delta_es.get(p95_idx).copied().unwrap_or(0.0),
        rmse: (squared / (n * 4.0)).sqrt(),
        count,
    }
}

/// Error of a quantized image against its source pixels
pub fn quantization_error(source: &[Color], image: &QuantizedImage) -> ErrorStats {
    compare_color_buffers(source, &image.to_pixels())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_e_same_color() {
        let c = Color::rgb(0.3, 0.6, 0.2);
        assert!(delta_e_luv(&c, &c) < 1e-6);
    }

    #[test]
    fn test_delta_e_black_white() {
        let de = delta_e_luv(&Color::BLACK, &Color::WHITE);
        assert!((de - 100.0).abs() < 0.1, "deltaE={de}");
    }

    #[test]
    fn test_identical_buffers() {
        let buf = vec![Color::RED, Color::rgb(0.1, 0.2, 0.3)];
        let stats = compare_color_buffers(&buf, &buf);
        assert!(stats.is_lossless());
        assert_eq!(stats.rmse, 0.0);
        assert!(stats.psnr().is_infinite());
    }

    #[test]
    fn test_rmse() {
        let a = vec![Color::new(0.0, 0.0, 0.0, 0.0)];
        let b = vec![Color::new(1.0, 0.0, 0.0, 0.0)];
        let stats = compare_color_buffers(&a, &b);
        assert!((stats.rmse - 0.5).abs() < 1e-9);
        assert!((stats.psnr() - 6.0206).abs() < 1e-3);
    }
}
