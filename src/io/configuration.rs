//! Fixed constants and command-line defaults

// Thresholding
/// Minimum 3-channel average (on the 16-bit premultiplied scale) for a pixel to count as on
///
/// Deliberately not rescaled from its 8-bit origin: almost any non-black pixel passes.
pub const BRIGHTNESS_THRESHOLD: u32 = 128;

/// Color of any canvas coordinate without an explicit override
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Color returned when the tile is read outside its own extent
pub const OUT_OF_TILE_COLOR: [u8; 4] = [0, 0, 0, 0];

// Frame naming
/// Number of digits in zero-padded frame file names
pub const FRAME_INDEX_WIDTH: usize = 4;
/// Extension shared by input and output frames
pub const FRAME_EXTENSION: &str = "png";

// Default values for configurable parameters
/// Number of frames in the source video
pub const DEFAULT_FRAME_COUNT: u32 = 6572;
/// Directory holding the large reference frames
pub const DEFAULT_FRAMES_DIR: &str = "frames";
/// Directory holding the small tile frames
pub const DEFAULT_SMALL_FRAMES_DIR: &str = "smallframes";
/// Directory receiving the composited frames
pub const DEFAULT_OUTPUT_DIR: &str = "finalframes";
/// Output resolution as `WIDTHxHEIGHT`
pub const DEFAULT_RESOLUTION: &str = "1200x900";

/// Separator between width and height in a resolution string
pub const RESOLUTION_SEPARATOR: char = 'x';

// Logging
/// Filter directive used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// Progress bar display settings
/// Width of the frame progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
