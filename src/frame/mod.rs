//! Per-frame transform
//!
//! This module contains the frame-level functionality:
//! - Thresholding a reference frame into a binary mask
//! - Compositing a tile into every on cell of the mask
//! - The sparse canvas accumulating the result

/// Sparse output canvas and the raster capability trait
pub mod canvas;
/// Tile stamping driven by a binary mask
pub mod compositor;
/// Brightness thresholding into binary masks
pub mod threshold;

pub use canvas::{OutputBounds, Raster, SparseCanvas};
pub use threshold::BinaryMask;
