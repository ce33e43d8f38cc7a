//! Progress display for multi-layout runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static LAYOUT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Layouts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks finished layouts and failed fill passes
///
/// Single-layout runs stay silent; there is nothing to track.
pub struct LayoutProgress {
    bar: Option<ProgressBar>,
    failed_passes: usize,
}

impl LayoutProgress {
    /// Create a tracker for `layouts` layouts
    pub fn new(layouts: usize, visible: bool) -> Self {
        let bar = (visible && layouts > 1).then(|| {
            let bar = ProgressBar::new(layouts as u64);
            bar.set_style(LAYOUT_STYLE.clone());
            bar
        });
        Self {
            bar,
            failed_passes: 0,
        }
    }

    /// Whether a bar is drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record a fill pass that ran out of candidates
    pub fn record_failed_pass(&mut self) {
        self.failed_passes += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("({} retried)", self.failed_passes));
        }
    }

    /// Record a finished layout
    pub fn complete_layout(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Fill passes that had to be retried so far
    pub const fn failed_passes(&self) -> usize {
        self.failed_passes
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message(format!("done ({} retried)", self.failed_passes));
        }
    }
}
