//! Octree color quantizer
//!
//! Pixels are inserted into an 8-level tree addressed by the bits of their
//! 8-bit R, G and B values, most significant bit first. Leaves accumulate
//! color sums and pixel counts. While there are more leaves than allowed,
//! the tree folds a reducible node (one whose children are all leaves) into
//! a single leaf. The node chosen is the deepest one, then the one covering
//! the fewest pixels, then the one created first.
//!
//! Alpha does not address the tree; it is averaged within each leaf.

use super::{QuantizedImage, Quantizer, check_max_colors, rgb_bytes};
use crate::Result;
use crate::color::Color;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

const MAX_DEPTH: u8 = 8;

/// Octree quantizer
#[derive(Debug, Clone, Copy, Default)]
pub struct OctreeQuantizer;

impl Quantizer for OctreeQuantizer {
    fn quantize(&self, pixels: &[Color], max_colors: usize) -> Result<QuantizedImage> {
        check_max_colors(max_colors)?;
        debug!(pixels = pixels.len(), max_colors, "octree quantize");
        if pixels.is_empty() {
            return Ok(QuantizedImage::default());
        }

        let mut tree = Octree::new();
        for pixel in pixels {
            tree.insert(pixel);
        }
        tree.reduce(max_colors);
        let palette = tree.build_palette();

        let indices: Vec<u32> = pixels.par_iter().map(|p| tree.index_of(p)).collect();
        let image = QuantizedImage::new(palette, indices);
        debug!(palette = image.palette().len(), "octree done");
        Ok(image)
    }
}

#[derive(Debug, Default)]
struct Node {
    children: [Option<u32>; 8],
    depth: u8,
    /// Pixels in this subtree
    count: u64,
    /// Lane sums, populated on leaves only
    sum: [f64; 4],
    leaf: bool,
    parent: Option<u32>,
    palette_index: u32,
}

impl Node {
    fn child_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.children.iter().flatten().copied()
    }
}

/// Heap key for a reducible node; the greatest key is merged first
#[derive(Debug, PartialEq, Eq)]
struct Reducible {
    depth: u8,
    weight: u64,
    id: u32,
}

impl Ord for Reducible {
    fn cmp(&self, other: &Self) -> Ordering {
        self.depth
            .cmp(&other.depth)
            .then_with(|| other.weight.cmp(&self.weight))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Reducible {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Arena-backed octree; node ids are arena positions in creation order
struct Octree {
    nodes: Vec<Node>,
    leaves: usize,
}

#[inline]
fn child_slot(rgb: [u8; 3], depth: u8) -> usize {
    let shift = 7 - depth;
    let bit = |v: u8| ((v >> shift) & 1) as usize;
    bit(rgb[0]) << 2 | bit(rgb[1]) << 1 | bit(rgb[2])
}

impl Octree {
    fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            leaves: 0,
        }
    }

    fn alloc(&mut self, depth: u8, parent: u32) -> u32 {
        let id = self.nodes.len() as u32;
        self.nodes.push(Node {
            depth,
            leaf: depth == MAX_DEPTH,
            parent: Some(parent),
            ..Node::default()
        });
        if depth == MAX_DEPTH {
            self.leaves += 1;
        }
        id
    }

    fn insert(&mut self, color: &Color) {
        let rgb = rgb_bytes(color);
        let lanes = color.clamp().to_array();
        let mut id = 0u32;
        loop {
            let node = &mut self.nodes[id as usize];
            node.count += 1;
            if node.leaf {
                for (sum, lane) in node.sum.iter_mut().zip(lanes) {
                    *sum += lane as f64;
                }
                return;
            }
            let depth = node.depth;
            let slot = child_slot(rgb, depth);
            let existing = node.children[slot];
            id = match existing {
                Some(child) => child,
                None => {
                    let child = self.alloc(depth + 1, id);
                    self.nodes[id as usize].children[slot] = Some(child);
                    child
                }
            };
        }
    }

    fn is_reducible(&self, id: u32) -> bool {
        let node = &self.nodes[id as usize];
        !node.leaf && node.child_ids().all(|c| self.nodes[c as usize].leaf)
    }

    fn key(&self, id: u32) -> Reducible {
        let node = &self.nodes[id as usize];
        Reducible {
            depth: node.depth,
            weight: node.count,
            id,
        }
    }

    /// Fold reducible nodes until at most `max_leaves` leaves remain
    fn reduce(&mut self, max_leaves: usize) {
        if self.leaves <= max_leaves {
            return;
        }

        let mut heap: BinaryHeap<Reducible> = (0..self.nodes.len() as u32)
            .filter(|&id| self.is_reducible(id))
            .map(|id| self.key(id))
            .collect();

        while self.leaves > max_leaves {
            let Some(Reducible { id, .. }) = heap.pop() else {
                break;
            };
            self.merge(id);
            if let Some(parent) = self.nodes[id as usize].parent {
                if self.is_reducible(parent) {
                    heap.push(self.key(parent));
                }
            }
        }
    }

    /// Turn a reducible node into a leaf holding its children's sums
    fn merge(&mut self, id: u32) {
        let children: Vec<u32> = self.nodes[id as usize].child_ids().collect();
        let mut sum = [0.0f64; 4];
        for &child in &children {
            for (acc, lane) in sum.iter_mut().zip(self.nodes[child as usize].sum) {
                *acc += lane;
            }
        }

        let node = &mut self.nodes[id as usize];
        node.sum = sum;
        node.children = [None; 8];
        node.leaf = true;
        self.leaves = self.leaves + 1 - children.len();
        trace!(
            node = id,
            depth = node.depth,
            weight = node.count,
            merged = children.len(),
            leaves = self.leaves,
            "octree merge"
        );
    }

    /// Assign palette indices to leaves in depth-first child order and
    /// return the mean color of each
    fn build_palette(&mut self) -> Vec<Color> {
        let mut palette = Vec::with_capacity(self.leaves);
        let mut stack = vec![0u32];
        while let Some(id) = stack.pop() {
            let node = &mut self.nodes[id as usize];
            if node.leaf {
                node.palette_index = palette.len() as u32;
                let n = node.count as f64;
                palette.push(Color::from_array(node.sum.map(|s| (s / n) as f32)));
            } else {
                // Reverse so slot 0 is visited first
                stack.extend(node.children.iter().rev().flatten());
            }
        }
        palette
    }

    fn index_of(&self, color: &Color) -> u32 {
        let rgb = rgb_bytes(color);
        let mut node = &self.nodes[0];
        while !node.leaf {
            // Every inserted color has a path down to a leaf
            match node.children[child_slot(rgb, node.depth)] {
                Some(child) => node = &self.nodes[child as usize],
                None => break,
            }
        }
        node.palette_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn bytes(r: u8, g: u8, b: u8) -> Color {
        Color::from_bytes(r, g, b, 255)
    }

    #[test]
    fn test_child_slot() {
        assert_eq!(child_slot([0x80, 0x00, 0x00], 0), 4);
        assert_eq!(child_slot([0x00, 0x80, 0x00], 0), 2);
        assert_eq!(child_slot([0x00, 0x00, 0x80], 0), 1);
        assert_eq!(child_slot([0x01, 0x01, 0x01], 7), 7);
    }

    #[test]
    fn test_reducible_ordering() {
        let deep = Reducible { depth: 7, weight: 100, id: 9 };
        let shallow = Reducible { depth: 6, weight: 1, id: 1 };
        assert!(deep > shallow);
        let light = Reducible { depth: 7, weight: 1, id: 9 };
        assert!(light > deep);
        let early = Reducible { depth: 7, weight: 1, id: 3 };
        assert!(early > light);
    }

    #[test]
    fn test_exact_when_under_limit() {
        let pixels = vec![bytes(255, 0, 0), bytes(0, 255, 0), bytes(0, 0, 255), bytes(255, 0, 0)];
        let image = OctreeQuantizer.quantize(&pixels, 8).unwrap();
        assert_eq!(image.palette().len(), 3);
        assert_eq!(image.to_pixels(), pixels);
    }

    #[test]
    fn test_palette_in_tree_order() {
        // Blue sorts before red at the top level: slot 1 versus slot 4
        let pixels = vec![bytes(255, 0, 0), bytes(0, 0, 255)];
        let image = OctreeQuantizer.quantize(&pixels, 4).unwrap();
        assert_eq!(image.palette(), &[bytes(0, 0, 255), bytes(255, 0, 0)]);
        assert_eq!(image.indices(), &[1, 0]);
    }

    #[test]
    fn test_lightest_sibling_merged_first() {
        // Two near-identical colors differ only in the last bit; the pair
        // that covers fewer pixels folds first
        let mut pixels = vec![bytes(10, 10, 10); 5];
        pixels.extend([bytes(10, 10, 11); 5]);
        pixels.push(bytes(200, 200, 200));
        pixels.push(bytes(200, 200, 201));

        let image = OctreeQuantizer.quantize(&pixels, 3).unwrap();
        assert_eq!(image.palette().len(), 3);
        let merged = image.palette()[image.indices()[10] as usize];
        assert_eq!(image.indices()[10], image.indices()[11]);
        assert!((merged.b - 200.5 / 255.0).abs() < 1e-6);
        assert_ne!(image.indices()[0], image.indices()[5]);
    }

    #[test]
    fn test_single_entry() {
        let pixels = vec![bytes(0, 0, 0), bytes(255, 255, 255)];
        let image = OctreeQuantizer.quantize(&pixels, 1).unwrap();
        assert_eq!(image.palette().len(), 1);
        let c = image.palette()[0];
        assert!((c.r - 0.5).abs() < 1e-6);
        assert_eq!(image.indices(), &[0, 0]);
    }

    #[test]
    fn test_bound_respected() {
        let pixels: Vec<Color> = (0..=255u8).map(|v| bytes(v, 255 - v, v / 3)).collect();
        for max in [1, 2, 7, 16, 100] {
            let image = OctreeQuantizer.quantize(&pixels, max).unwrap();
            assert!(image.palette().len() <= max, "max={max}");
            assert_eq!(image.len(), pixels.len());
            assert!(
                image
                    .indices()
                    .iter()
                    .all(|&i| (i as usize) < image.palette().len())
            );
        }
    }

    #[test]
    fn test_alpha_averaged() {
        let pixels = vec![Color::new(1.0, 1.0, 1.0, 0.0), Color::new(1.0, 1.0, 1.0, 1.0)];
        let image = OctreeQuantizer.quantize(&pixels, 4).unwrap();
        assert_eq!(image.palette(), &[Color::new(1.0, 1.0, 1.0, 0.5)]);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            OctreeQuantizer.quantize(&[Color::BLACK], 0),
            Err(Error::InvalidMaxColors(0))
        );
    }
}
