//! Sequential frame file naming

use crate::io::configuration::{FRAME_EXTENSION, FRAME_INDEX_WIDTH};
use std::path::{Path, PathBuf};

/// File name for a frame index, e.g. `0042.png`
pub fn frame_file_name(index: u32) -> String {
    format!(
        "{index:0width$}.{FRAME_EXTENSION}",
        width = FRAME_INDEX_WIDTH
    )
}

/// Full path of a frame inside `dir`
pub fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(frame_file_name(index))
}
