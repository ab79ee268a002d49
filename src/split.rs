//! Top-level split entry points.
//!
//! Control flow is strictly linear: resolve the input, prepare the output
//! directory, make one blocking rasterisation call, report how long it took.
//! The wall clock starts immediately before the rasterisation call and stops
//! immediately after, so the reported time excludes validation and setup.

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::output::SplitOutcome;
use crate::pipeline::render::{PdfiumRasterizer, Rasterizer};
use crate::pipeline::{input, prepare, render};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Split a PDF into per-page image files using the pdfium backend.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `pdf` — path to an existing PDF file
/// * `output_dir` — destination directory, created if absent
/// * `config` — validated invocation parameters
///
/// # Errors
/// Any [`SplitError`]; every failure is terminal. A failure partway through
/// rendering leaves already-written page images on disk.
///
/// # Example
/// ```rust,no_run
/// use splitpdf::{split, SplitConfig};
///
/// # fn main() -> Result<(), splitpdf::SplitError> {
/// let outcome = split("document.pdf", "images/", &SplitConfig::default())?;
/// println!("{} pages in {:.2}s", outcome.page_count, outcome.elapsed_secs());
/// # Ok(())
/// # }
/// ```
pub fn split(
    pdf: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &SplitConfig,
) -> Result<SplitOutcome, SplitError> {
    split_with(&PdfiumRasterizer::new(), pdf, output_dir, config)
}

/// [`split`] with an explicit rasterisation backend.
///
/// The backend owns all page rendering and work-splitting; this function
/// makes at most one call into it per run.
pub fn split_with(
    rasterizer: &dyn Rasterizer,
    pdf: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &SplitConfig,
) -> Result<SplitOutcome, SplitError> {
    let pdf = input::resolve_pdf(pdf.as_ref())?;
    let output_dir = output_dir.as_ref();
    prepare::prepare_output_dir(output_dir)?;

    info!(
        "Splitting '{}' into '{}' with {} thread(s) at {} DPI",
        pdf.display(),
        output_dir.display(),
        config.threads,
        config.dpi
    );

    let start = Instant::now();
    let files = rasterizer.rasterize(&pdf, output_dir, config)?;
    let elapsed = start.elapsed();

    let page_count = files.len();
    info!(
        "{} page image(s) saved in '{}' in {:.2}s",
        page_count,
        output_dir.display(),
        elapsed.as_secs_f64()
    );

    Ok(SplitOutcome {
        files,
        page_count,
        elapsed,
    })
}

/// Count the pages of a PDF without rendering anything.
///
/// Validates the input the same way [`split`] does, then asks the engine for
/// the page count only.
pub fn page_count(pdf: impl AsRef<Path>) -> Result<usize, SplitError> {
    let pdf = input::resolve_pdf(pdf.as_ref())?;
    render::page_count(&pdf)
}
