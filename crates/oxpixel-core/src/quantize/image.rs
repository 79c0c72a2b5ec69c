//! Quantizer output

use crate::color::Color;
use crate::{Error, Result};
use std::collections::HashMap;

/// A palette plus one palette index per source pixel
///
/// Palette entries are unique and every index is in `[0, palette.len())`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuantizedImage {
    palette: Vec<Color>,
    indices: Vec<u32>,
    width: Option<u32>,
    height: Option<u32>,
}

impl QuantizedImage {
    /// Build from a raw palette and indices into it
    ///
    /// Bitwise-identical palette entries are merged and indices remapped to
    /// the surviving entry. Entry order follows first occurrence.
    pub(crate) fn new(palette: Vec<Color>, indices: Vec<u32>) -> Self {
        let mut seen: HashMap<[u32; 4], u32> = HashMap::with_capacity(palette.len());
        let mut unique = Vec::with_capacity(palette.len());
        let remap: Vec<u32> = palette
            .iter()
            .map(|&color| {
                *seen.entry(bytemuck::cast(color)).or_insert_with(|| {
                    unique.push(color);
                    (unique.len() - 1) as u32
                })
            })
            .collect();

        let indices = if unique.len() == palette.len() {
            indices
        } else {
            indices.into_iter().map(|i| remap[i as usize]).collect()
        };

        Self {
            palette: unique,
            indices,
            width: None,
            height: None,
        }
    }

    /// Attach image dimensions
    ///
    /// `width * height` must equal the number of indices.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if expected != self.indices.len() {
            return Err(Error::BufferSize {
                expected,
                actual: self.indices.len(),
            });
        }
        self.width = Some(width);
        self.height = Some(height);
        Ok(self)
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index of the first fully transparent palette entry, if any
    pub fn transparent_index(&self) -> Option<usize> {
        self.palette.iter().position(|c| c.a == 0.0)
    }

    /// Reconstruct the pixel buffer by palette lookup
    pub fn to_pixels(&self) -> Vec<Color> {
        self.indices
            .iter()
            .map(|&i| self.palette[i as usize])
            .collect()
    }

    /// Take the palette and indices
    pub fn into_parts(self) -> (Vec<Color>, Vec<u32>) {
        (self.palette, self.indices)
    }
}
