//! Nearest palette entry search

use crate::color::Color;
use multiversion::multiversion;

/// Index of the palette entry closest to `color`
///
/// Distance is squared Euclidean over all four lanes. Ties resolve to the
/// lowest index, and a NaN distance never displaces an earlier entry.
/// Returns `None` for an empty palette.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn nearest_index(palette: &[Color], color: Color) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, entry) in palette.iter().enumerate() {
        let dr = entry.r - color.r;
        let dg = entry.g - color.g;
        let db = entry.b - color.b;
        let da = entry.a - color.a;
        let d = dr * dr + dg * dg + db * db + da * da;
        match best {
            None => best = Some((i, d)),
            Some((_, best_d)) if d < best_d => best = Some((i, d)),
            Some(_) => {}
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_hit() {
        let palette = [Color::BLACK, Color::RED, Color::WHITE];
        assert_eq!(nearest_index(&palette, Color::RED), Some(1));
    }

    #[test]
    fn test_tie_takes_first() {
        let palette = [Color::BLACK, Color::WHITE];
        let mid = Color::rgb(0.5, 0.5, 0.5);
        assert_eq!(nearest_index(&palette, mid), Some(0));
    }

    #[test]
    fn test_alpha_counts() {
        let palette = [Color::TRANSPARENT, Color::BLACK];
        assert_eq!(nearest_index(&palette, Color::new(0.0, 0.0, 0.0, 0.1)), Some(0));
        assert_eq!(nearest_index(&palette, Color::new(0.0, 0.0, 0.0, 0.9)), Some(1));
    }

    #[test]
    fn test_nan_keeps_first_entry() {
        let palette = [Color::BLACK, Color::WHITE, Color::RED];
        let nan = Color::new(f32::NAN, 0.0, 0.0, 1.0);
        assert_eq!(nearest_index(&palette, nan), Some(0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(nearest_index(&[], Color::WHITE), None);
    }
}
