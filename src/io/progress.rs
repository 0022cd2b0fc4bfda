//! Per-stage progress bars counting part files

use crate::io::configuration::{PROGRESS_BAR_WIDTH, STAGE_LABEL_WIDTH};
use crate::pipeline::runner::{Stage, StageObserver};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{wide_msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows one bar per running stage, advanced once per visited part file
///
/// A hidden manager goes through the same motions without drawing, so callers do not
/// need to special-case quiet runs.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    visible: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager drawing to stderr
    pub const fn new() -> Self {
        Self {
            bar: None,
            visible: true,
        }
    }

    /// Create a manager that never draws
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            visible: false,
        }
    }

    /// Files visited so far in the running stage, if one is running
    pub fn position(&self) -> Option<u64> {
        self.bar.as_ref().map(ProgressBar::position)
    }

    /// Files expected in the running stage, if one is running
    pub fn length(&self) -> Option<u64> {
        self.bar.as_ref().and_then(ProgressBar::length)
    }
}

impl StageObserver for ProgressManager {
    fn stage_started(&mut self, stage: Stage, total: usize) {
        if let Some(previous) = self.bar.take() {
            previous.finish_and_clear();
        }

        let bar = ProgressBar::new(total as u64);
        if !self.visible {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(STAGE_STYLE.clone());
        bar.set_prefix(format!("{:<STAGE_LABEL_WIDTH$}", stage.label()));
        self.bar = Some(bar);
    }

    fn file_visited(&mut self, _stage: Stage, path: &Path) {
        if let Some(ref bar) = self.bar {
            bar.set_message(path.display().to_string());
            bar.inc(1);
        }
    }

    fn stage_finished(&mut self, _stage: Stage) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
