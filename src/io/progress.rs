//! Terminal progress display for the load and composite stages

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:<24} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Reports build progress on the terminal
///
/// Shows a bar across the image load stage and a message while the canvas
/// is composited and written. The builder itself never logs; progress
/// lives entirely in this CLI layer.
pub struct ProgressManager {
    load_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no active display
    pub const fn new() -> Self {
        Self { load_bar: None }
    }

    /// Begin the load stage with one bar tick per image
    pub fn start_loading(&mut self, image_count: usize) {
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(LOAD_STYLE.clone());
        bar.set_message("Loading images");
        self.load_bar = Some(bar);
    }

    /// Record one decoded image
    pub fn image_loaded(&self, path: &Path) {
        if let Some(ref bar) = self.load_bar {
            bar.inc(1);
            bar.set_message(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }
    }

    /// Switch the display to the composite stage
    pub fn start_compositing(&self) {
        if let Some(ref bar) = self.load_bar {
            bar.set_message("Compositing tiles");
        }
    }

    /// Clear the display
    pub fn finish(&mut self) {
        if let Some(bar) = self.load_bar.take() {
            bar.finish_and_clear();
        }
    }
}
