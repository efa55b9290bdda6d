use std::ops::{ControlFlow, Range};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use lumen_renderer::{FrameSink, Framebuffer};

use crate::cli::ImageFormat;

/// `file_<DDMMYYYYHHMMSS>.<ext>` for the given local time.
pub fn timestamped_name(time: &DateTime<Local>, extension: &str) -> String {
    format!("file_{}.{}", time.format("%d%m%Y%H%M%S"), extension)
}

pub fn output_path(dir: &Path, format: ImageFormat) -> PathBuf {
    dir.join(timestamped_name(&Local::now(), format.extension()))
}

/// Reports row progress on a terminal bar and stops the render once the
/// shared cancel flag is raised.
pub struct ProgressSink {
    bar: ProgressBar,
    cancel: Arc<AtomicBool>,
}

impl ProgressSink {
    pub fn new(rows: u32, cancel: Arc<AtomicBool>) -> Self {
        let bar = ProgressBar::new(rows as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows ({eta}) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self::with_bar(bar, cancel)
    }

    pub fn with_bar(bar: ProgressBar, cancel: Arc<AtomicBool>) -> Self {
        Self { bar, cancel }
    }

    pub fn finish(&self, message: &'static str) {
        self.bar.finish_with_message(message);
    }
}

impl FrameSink for ProgressSink {
    fn present(&mut self, _frame: &Framebuffer, rows: Range<u32>) -> ControlFlow<()> {
        self.bar.inc((rows.end - rows.start) as u64);
        if self.cancel.load(Ordering::Relaxed) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}
