//! Result types returned by a split run.

use std::path::PathBuf;
use std::time::Duration;

/// Outcome of a successful split: which files were written and how long the
/// conversion call took.
///
/// The elapsed duration covers the rasterisation call only — argument
/// parsing, input validation, and directory preparation happen before the
/// clock starts.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// Written image files, in page order (`<prefix>_1.png` first).
    pub files: Vec<PathBuf>,

    /// Number of pages rendered. Equals `files.len()`.
    pub page_count: usize,

    /// Wall-clock duration of the rasterisation call.
    pub elapsed: Duration,
}

impl SplitOutcome {
    /// Elapsed wall-clock time in seconds, for the two-decimal report.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
