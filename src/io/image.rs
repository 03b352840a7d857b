//! PNG decoding of input frames and export of composited rasters

use crate::frame::canvas::Raster;
use crate::io::error::{FractalError, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Open and decode an input frame
///
/// # Errors
///
/// Returns `FractalError::ImageLoad` if the file is missing, unreadable or
/// not a decodable image
pub fn load_frame(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| FractalError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Render a raster into a dense image covering exactly its bounds
///
/// Pixels painted outside the bounds are dropped here.
pub fn render<R: Raster + ?Sized>(raster: &R) -> RgbaImage {
    let bounds = raster.bounds();
    RgbaImage::from_fn(bounds.width, bounds.height, |x, y| {
        raster.pixel(x as usize, y as usize)
    })
}

/// Export a raster as a PNG file, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_raster_as_png<R: Raster + ?Sized>(raster: &R, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FractalError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render(raster)
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| FractalError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
