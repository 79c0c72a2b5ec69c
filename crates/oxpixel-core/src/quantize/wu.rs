//! Wu's variance-minimizing color quantizer
//!
//! Colors are binned into a 32x32x32 RGB histogram (5 bits per channel).
//! Cumulative moments over a 33x33x33 table give the weight, lane sums and
//! sum of squares of any axis-aligned box in constant time. The box with
//! the largest variance is repeatedly cut at the position that maximizes
//! the variance between the two halves.

use super::{QuantizedImage, Quantizer, check_max_colors, rgb_bytes};
use crate::Result;
use crate::color::Color;
use rayon::prelude::*;
use std::ops::{Add, AddAssign, Sub};
use tracing::{debug, trace};

/// Histogram side including the zero border row
const SIDE: usize = 33;
const TABLE_LEN: usize = SIDE * SIDE * SIDE;

/// Wu quantizer
#[derive(Debug, Clone, Copy, Default)]
pub struct WuQuantizer;

impl Quantizer for WuQuantizer {
    fn quantize(&self, pixels: &[Color], max_colors: usize) -> Result<QuantizedImage> {
        check_max_colors(max_colors)?;
        debug!(pixels = pixels.len(), max_colors, "wu quantize");
        if pixels.is_empty() {
            return Ok(QuantizedImage::default());
        }

        let moments = Moments::build(pixels);
        let boxes = moments.partition(max_colors);

        let palette: Vec<Color> = boxes.iter().map(|b| moments.volume(b).mean()).collect();
        let tags = tag_table(&boxes);
        let indices: Vec<u32> = pixels
            .par_iter()
            .map(|p| tags[cell_of(p)])
            .collect();

        let image = QuantizedImage::new(palette, indices);
        debug!(palette = image.palette().len(), "wu done");
        Ok(image)
    }
}

#[inline]
fn index(r: usize, g: usize, b: usize) -> usize {
    (r * SIDE + g) * SIDE + b
}

/// Histogram cell (1-based per axis) of a color
#[inline]
fn cell_of(color: &Color) -> usize {
    let [r, g, b] = rgb_bytes(color).map(|v| (v >> 3) as usize + 1);
    index(r, g, b)
}

/// Weight and moments of a set of pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Moment {
    weight: f64,
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    /// Sum of r² + g² + b²
    sq: f64,
}

impl Moment {
    fn of(color: &Color) -> Self {
        let c = color.clamp();
        let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);
        Self {
            weight: 1.0,
            r,
            g,
            b,
            a: c.a as f64,
            sq: r * r + g * g + b * b,
        }
    }

    /// Squared length of the color sum divided by weight
    fn distance(&self) -> f64 {
        (self.r * self.r + self.g * self.g + self.b * self.b) / self.weight
    }

    fn variance(&self) -> f64 {
        if self.weight <= 0.0 {
            return 0.0;
        }
        self.sq - self.distance()
    }

    fn mean(&self) -> Color {
        let w = self.weight;
        Color::new(
            (self.r / w) as f32,
            (self.g / w) as f32,
            (self.b / w) as f32,
            (self.a / w) as f32,
        )
    }
}

impl Add for Moment {
    type Output = Self;

    fn add(self, o: Self) -> Self {
        Self {
            weight: self.weight + o.weight,
            r: self.r + o.r,
            g: self.g + o.g,
            b: self.b + o.b,
            a: self.a + o.a,
            sq: self.sq + o.sq,
        }
    }
}

impl AddAssign for Moment {
    fn add_assign(&mut self, o: Self) {
        *self = *self + o;
    }
}

impl Sub for Moment {
    type Output = Self;

    fn sub(self, o: Self) -> Self {
        Self {
            weight: self.weight - o.weight,
            r: self.r - o.r,
            g: self.g - o.g,
            b: self.b - o.b,
            a: self.a - o.a,
            sq: self.sq - o.sq,
        }
    }
}

/// Box in histogram space: `lower` exclusive, `upper` inclusive per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cube {
    lower: [usize; 3],
    upper: [usize; 3],
}

impl Cube {
    const WHOLE: Self = Self {
        lower: [0; 3],
        upper: [SIDE - 1; 3],
    };

    /// Number of histogram cells covered
    fn cells(&self) -> usize {
        (0..3).map(|axis| self.upper[axis] - self.lower[axis]).product()
    }

    fn with_upper(&self, axis: usize, upper: usize) -> Self {
        let mut cube = *self;
        cube.upper[axis] = upper;
        cube
    }
}

/// Cumulative moment table
struct Moments {
    table: Vec<Moment>,
}

impl Moments {
    fn build(pixels: &[Color]) -> Self {
        let mut table = vec![Moment::default(); TABLE_LEN];
        for pixel in pixels {
            table[cell_of(pixel)] += Moment::of(pixel);
        }

        // Running sums along b, then g via `area`, then r via the previous plane
        for r in 1..SIDE {
            let mut area = [Moment::default(); SIDE];
            for g in 1..SIDE {
                let mut line = Moment::default();
                for b in 1..SIDE {
                    let i = index(r, g, b);
                    line += table[i];
                    area[b] += line;
                    table[i] = table[index(r - 1, g, b)] + area[b];
                }
            }
        }
        Self { table }
    }

    #[inline]
    fn at(&self, r: usize, g: usize, b: usize) -> Moment {
        self.table[index(r, g, b)]
    }

    /// Moments of all pixels inside `cube`
    fn volume(&self, cube: &Cube) -> Moment {
        let [r0, g0, b0] = cube.lower;
        let [r1, g1, b1] = cube.upper;
        self.at(r1, g1, b1) - self.at(r1, g1, b0) - self.at(r1, g0, b1) + self.at(r1, g0, b0)
            - self.at(r0, g1, b1)
            + self.at(r0, g1, b0)
            + self.at(r0, g0, b1)
            - self.at(r0, g0, b0)
    }

    /// Best cut of `cube` along `axis`, returning the score and position
    ///
    /// Both halves must hold pixels. The first position wins on ties.
    fn maximize(&self, cube: &Cube, axis: usize, whole: Moment) -> Option<(f64, usize)> {
        let mut best: Option<(f64, usize)> = None;
        let mut max = 0.0;
        for pos in cube.lower[axis] + 1..cube.upper[axis] {
            let half = self.volume(&cube.with_upper(axis, pos));
            if half.weight <= 0.0 {
                continue;
            }
            let rest = whole - half;
            if rest.weight <= 0.0 {
                continue;
            }
            let score = half.distance() + rest.distance();
            if score > max {
                max = score;
                best = Some((score, pos));
            }
        }
        best
    }

    /// Split `cube` in place, returning the upper half
    fn cut(&self, cube: &mut Cube) -> Option<Cube> {
        let whole = self.volume(cube);
        let mut choice: Option<(f64, usize, usize)> = None;
        for axis in 0..3 {
            if let Some((score, pos)) = self.maximize(cube, axis, whole) {
                // Earlier axis (R, then G, then B) wins on equal scores
                if choice.is_none_or(|(best, _, _)| score > best) {
                    choice = Some((score, axis, pos));
                }
            }
        }

        let (_, axis, pos) = choice?;
        let mut upper = *cube;
        cube.upper[axis] = pos;
        upper.lower[axis] = pos;
        trace!(axis, pos, "wu cut");
        Some(upper)
    }

    fn box_variance(&self, cube: &Cube) -> f64 {
        if cube.cells() > 1 {
            self.volume(cube).variance()
        } else {
            0.0
        }
    }

    /// Partition the histogram into at most `max_colors` non-empty boxes
    fn partition(&self, max_colors: usize) -> Vec<Cube> {
        let mut boxes = vec![Cube::WHOLE];
        let mut variance = vec![0.0f64];
        let mut next = 0;

        while boxes.len() < max_colors {
            match self.cut(&mut boxes[next]) {
                Some(upper) => {
                    variance[next] = self.box_variance(&boxes[next]);
                    variance.push(self.box_variance(&upper));
                    boxes.push(upper);
                }
                None => variance[next] = 0.0,
            }

            // Largest variance next; the earliest box wins ties
            let mut best = 0;
            for (i, &v) in variance.iter().enumerate() {
                if v > variance[best] {
                    best = i;
                }
            }
            if variance[best] <= 0.0 {
                break;
            }
            next = best;
        }
        boxes
    }
}

/// Map every histogram cell to the box containing it
fn tag_table(boxes: &[Cube]) -> Vec<u32> {
    let mut tags = vec![0u32; TABLE_LEN];
    for (k, cube) in boxes.iter().enumerate() {
        for r in cube.lower[0] + 1..=cube.upper[0] {
            for g in cube.lower[1] + 1..=cube.upper[1] {
                for b in cube.lower[2] + 1..=cube.upper[2] {
                    tags[index(r, g, b)] = k as u32;
                }
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(r: u8, g: u8, b: u8) -> Color {
        Color::from_bytes(r, g, b, 255)
    }

    #[test]
    fn test_whole_volume() {
        let pixels = vec![bytes(0, 0, 0), bytes(255, 255, 255), bytes(255, 0, 0)];
        let moments = Moments::build(&pixels);
        let whole = moments.volume(&Cube::WHOLE);
        assert_eq!(whole.weight, 3.0);
        assert!((whole.r - 2.0).abs() < 1e-9);
        assert!((whole.g - 1.0).abs() < 1e-9);
        assert!((whole.sq - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_volume() {
        let pixels = vec![bytes(0, 0, 0), bytes(255, 0, 0)];
        let moments = Moments::build(&pixels);
        let low_red = Cube {
            lower: [0, 0, 0],
            upper: [16, 32, 32],
        };
        assert_eq!(moments.volume(&low_red).weight, 1.0);
        assert_eq!(moments.volume(&low_red).r, 0.0);
    }

    #[test]
    fn test_cut_separates() {
        let pixels = vec![bytes(0, 0, 0), bytes(255, 0, 0)];
        let moments = Moments::build(&pixels);
        let mut cube = Cube::WHOLE;
        let upper = moments.cut(&mut cube).unwrap();
        assert_eq!(moments.volume(&cube).weight, 1.0);
        assert_eq!(moments.volume(&upper).weight, 1.0);
        // Only the red axis can split these two pixels
        assert_eq!(cube.upper[1], SIDE - 1);
        assert_eq!(cube.upper[2], SIDE - 1);
    }

    #[test]
    fn test_single_cell_cannot_cut() {
        let pixels = vec![bytes(8, 8, 8), bytes(9, 9, 9)];
        let moments = Moments::build(&pixels);
        assert_eq!(moments.partition(16).len(), 1);
    }

    #[test]
    fn test_exact_when_under_limit() {
        let pixels = vec![
            bytes(255, 0, 0),
            bytes(0, 255, 0),
            bytes(0, 0, 255),
            bytes(255, 255, 255),
            bytes(0, 255, 0),
        ];
        let image = WuQuantizer.quantize(&pixels, 16).unwrap();
        assert_eq!(image.palette().len(), 4);
        assert_eq!(image.to_pixels(), pixels);
    }

    #[test]
    fn test_bound_respected() {
        let pixels: Vec<Color> = (0..=255u8).map(|v| bytes(v, v / 2, 255 - v)).collect();
        for max in [1, 2, 5, 32] {
            let image = WuQuantizer.quantize(&pixels, max).unwrap();
            assert!(image.palette().len() <= max, "max={max}");
            assert!(
                image
                    .indices()
                    .iter()
                    .all(|&i| (i as usize) < image.palette().len())
            );
        }
    }

    #[test]
    fn test_one_color_is_mean() {
        let pixels = vec![bytes(0, 0, 0), bytes(255, 255, 255)];
        let image = WuQuantizer.quantize(&pixels, 1).unwrap();
        assert_eq!(image.palette().len(), 1);
        assert!(image.palette()[0].approx_eq(&Color::rgb(0.5, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn test_two_clusters() {
        let mut pixels = vec![bytes(10, 10, 10); 20];
        pixels.extend([bytes(12, 14, 10); 20]);
        pixels.extend([bytes(240, 240, 240); 20]);
        let image = WuQuantizer.quantize(&pixels, 2).unwrap();
        assert_eq!(image.palette().len(), 2);
        assert_eq!(image.indices()[0], image.indices()[20]);
        assert_ne!(image.indices()[0], image.indices()[40]);
    }
}
