//! Sparse output canvas storing only explicitly painted pixels
//!
//! The canvas reports fixed bounds chosen at construction time, independent of
//! what has been painted. Writes are never clipped: coordinates outside the
//! bounds are kept in the override map and only dropped when the canvas is
//! rendered to a concrete image by the exporter.

use crate::io::configuration::BACKGROUND_COLOR;
use image::Rgba;
use std::collections::HashMap;

/// Width and height of an output frame in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputBounds {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

impl OutputBounds {
    /// Create bounds from explicit dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check if a coordinate falls inside `[0, width) × [0, height)`
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize
    }
}

/// Minimal raster capability set needed by the compositor and the PNG exporter
pub trait Raster {
    /// Nominal extent of the raster
    fn bounds(&self) -> OutputBounds;

    /// Color at `(x, y)`
    fn pixel(&self, x: usize, y: usize) -> Rgba<u8>;

    /// Overwrite the color at `(x, y)`
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgba<u8>);
}

/// Output accumulator backed by a coordinate → color map
///
/// Any coordinate without an override renders as opaque black.
#[derive(Debug, Clone)]
pub struct SparseCanvas {
    bounds: OutputBounds,
    overrides: HashMap<(usize, usize), Rgba<u8>>,
}

impl SparseCanvas {
    /// Create an empty canvas with the given output bounds
    pub fn new(bounds: OutputBounds) -> Self {
        Self {
            bounds,
            overrides: HashMap::new(),
        }
    }

    /// Number of explicitly painted coordinates, including any outside the bounds
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Test if nothing has been painted
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Test if `(x, y)` carries an explicit override
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.overrides.contains_key(&(x, y))
    }

    /// Iterate over painted coordinates in arbitrary order
    pub fn painted(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.overrides.keys().copied()
    }
}

impl Raster for SparseCanvas {
    fn bounds(&self) -> OutputBounds {
        self.bounds
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba<u8> {
        self.overrides
            .get(&(x, y))
            .copied()
            .unwrap_or(Rgba(BACKGROUND_COLOR))
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgba<u8>) {
        self.overrides.insert((x, y), color);
    }
}
