//! Recursive frame compositor for "fractal" video effects
//!
//! Each bright pixel of a large reference frame is replaced by a miniature copy
//! of a small frame, tiling the picture with smaller pictures of itself. Frames
//! are thresholded into binary masks, tiles are stamped into a sparse canvas,
//! and the canvas is exported as a numbered PNG.

#![forbid(unsafe_code)]

/// Per-frame thresholding, compositing and the sparse canvas
pub mod frame;
/// Command-line interface, file naming, image I/O and error handling
pub mod io;

pub use io::error::{FractalError, Result};
