//! Command-line interface and the sequential frame batch driver

use crate::frame::canvas::{OutputBounds, SparseCanvas};
use crate::frame::compositor::composite;
use crate::frame::threshold::threshold_bitmap;
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_FRAMES_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_RESOLUTION,
    DEFAULT_SMALL_FRAMES_DIR,
};
use crate::io::error::Result;
use crate::io::image::{export_raster_as_png, load_frame};
use crate::io::progress::ProgressManager;
use crate::io::resolution::parse_resolution;
use crate::io::sequence::{frame_file_name, frame_path};
use clap::Parser;
use image::DynamicImage;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "fractalframes")]
#[command(
    author,
    version,
    about = "Tile every bright pixel of each video frame with a miniature of the frame"
)]
/// Command-line arguments for the frame compositor
pub struct Cli {
    /// Number of frames the video was split into
    #[arg(short = 'f', long = "frames", default_value_t = DEFAULT_FRAME_COUNT)]
    pub frame_count: u32,

    /// Directory of large frames that form the mask
    #[arg(long, visible_alias = "fp", default_value = DEFAULT_FRAMES_DIR)]
    pub frames_path: PathBuf,

    /// Directory of small frames stamped into the mask
    #[arg(long, visible_alias = "sfp", default_value = DEFAULT_SMALL_FRAMES_DIR)]
    pub small_frames_path: PathBuf,

    /// Directory receiving the output frames
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Resolution of output frames as WIDTHxHEIGHT
    #[arg(short, long, default_value = DEFAULT_RESOLUTION)]
    pub resolution: String,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Parse the requested output resolution
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the resolution string is malformed
    pub fn output_bounds(&self) -> Result<OutputBounds> {
        parse_resolution(&self.resolution)
    }
}

/// Frame and tile dimensions fixed by the first frame of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Width of the large reference frame, used as the mask width
    pub reference_width: u32,
    /// Height of the large reference frame, used as the mask height
    pub reference_height: u32,
    /// Width of the small tile frame, used as the stamp width for every frame
    pub tile_width: u32,
    /// Height of the small tile frame, used as the stamp height for every frame
    pub tile_height: u32,
}

impl FrameGeometry {
    /// Read the geometry from a decoded reference/tile pair
    pub fn detect(reference: &DynamicImage, tile: &DynamicImage) -> Self {
        Self {
            reference_width: reference.width(),
            reference_height: reference.height(),
            tile_width: tile.width(),
            tile_height: tile.height(),
        }
    }

    /// Check if the reference frame is strictly larger than the tile on both axes
    pub const fn tile_fits(&self) -> bool {
        self.reference_width > self.tile_width && self.reference_height > self.tile_height
    }
}

/// Drives the per-frame transform over a numbered frame sequence
///
/// Frames are processed strictly in order and the first failure aborts the
/// whole batch.
pub struct FrameProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    geometry: Option<FrameGeometry>,
}

impl FrameProcessor {
    /// Create a new frame processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            geometry: None,
        }
    }

    /// Geometry detected on the first frame, once it has been read
    pub const fn geometry(&self) -> Option<FrameGeometry> {
        self.geometry
    }

    /// Process every frame from 1 to the configured frame count
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The resolution string is malformed (no frame is touched)
    /// - Any input frame is missing or cannot be decoded
    /// - Any output frame cannot be written
    pub fn process(&mut self) -> Result<()> {
        let output_bounds = self.cli.output_bounds()?;

        info!(
            frames = self.cli.frame_count,
            width = output_bounds.width,
            height = output_bounds.height,
            "Starting frame batch"
        );

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(self.cli.frame_count);
        }

        for index in 1..=self.cli.frame_count {
            self.process_frame(index, output_bounds)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        info!(
            frames = self.cli.frame_count,
            output = %self.cli.output.display(),
            "Frame batch complete"
        );
        Ok(())
    }

    fn process_frame(&mut self, index: u32, output_bounds: OutputBounds) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_frame(&frame_file_name(index));
        }

        let reference = load_frame(&frame_path(&self.cli.frames_path, index))?;
        let tile = load_frame(&frame_path(&self.cli.small_frames_path, index))?;
        let geometry = self.geometry_for(&reference, &tile);

        let mask = threshold_bitmap(
            &reference,
            geometry.reference_width,
            geometry.reference_height,
        );
        let mut canvas = SparseCanvas::new(output_bounds);
        let writes = composite(
            &mask,
            &tile.to_rgba8(),
            geometry.tile_width,
            geometry.tile_height,
            &mut canvas,
        );

        let output_path = frame_path(&self.cli.output, index);
        export_raster_as_png(&canvas, &output_path)?;

        debug!(
            frame = index,
            on_cells = mask.count_on(),
            writes,
            elapsed_ms = start_time.elapsed().as_millis(),
            "Frame written"
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_frame(start_time.elapsed());
        }

        Ok(())
    }

    fn geometry_for(&mut self, reference: &DynamicImage, tile: &DynamicImage) -> FrameGeometry {
        if let Some(geometry) = self.geometry {
            return geometry;
        }

        let geometry = FrameGeometry::detect(reference, tile);
        if !geometry.tile_fits() {
            warn!(
                reference = %format!("{}x{}", geometry.reference_width, geometry.reference_height),
                tile = %format!("{}x{}", geometry.tile_width, geometry.tile_height),
                "Small frames are not smaller than the large frames. Did you point to the correct frame directories?"
            );
        }
        self.geometry = Some(geometry);
        geometry
    }
}
