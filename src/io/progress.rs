//! Frame-level progress display for batch runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Frames: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many frames of a batch have been written
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(FRAME_STYLE.clone());
        Self { bar }
    }

    /// Set the number of frames the batch will process
    pub fn initialize(&self, frame_count: u32) {
        self.bar.set_length(u64::from(frame_count));
        self.bar.set_position(0);
    }

    /// Show which frame is currently being composited
    pub fn start_frame(&self, file_name: &str) {
        self.bar.set_message(file_name.to_owned());
    }

    /// Mark one frame as written
    pub fn complete_frame(&self, elapsed: Duration) {
        self.bar.inc(1);
        self.bar
            .set_message(format!("last frame {}ms", elapsed.as_millis()));
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
