//! # splitpdf
//!
//! Split a PDF document into per-page PNG images.
//!
//! Given an input PDF and an output directory, every page is rasterised at
//! 300 DPI and written as `page_1.png`, `page_2.png`, … so a numeric-suffix
//! sort of the directory recovers page order. All PDF decoding and rendering
//! is delegated to the pdfium engine via [`pdfium-render`]; this crate owns
//! input validation, output-directory preparation, the single call into the
//! engine, and elapsed-time reporting.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path, readability, %PDF magic bytes
//!  ├─ 2. Prepare  create the output directory if absent (idempotent)
//!  ├─ 3. Render   rasterise every page via pdfium, 1..=20 worker threads
//!  └─ 4. Report   wall-clock elapsed time of the render call
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splitpdf::{split, SplitConfig};
//!
//! fn main() -> Result<(), splitpdf::SplitError> {
//!     let config = SplitConfig::builder().threads(4).build()?;
//!     let outcome = split("document.pdf", "images/", &config)?;
//!     println!(
//!         "{} pages converted in {:.2} seconds",
//!         outcome.page_count,
//!         outcome.elapsed_secs()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `splitpdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! splitpdf = { version = "0.1", default-features = false }
//! ```
//!
//! ## The pdfium engine
//!
//! The pdfium shared library is resolved at runtime: the directory named by
//! `PDFIUM_LIB_PATH`, then the working directory, then the system library.
//! If none is found, every operation fails with [`SplitError::EngineMissing`].
//!
//! [`pdfium-render`]: https://crates.io/crates/pdfium-render

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod split;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{SplitConfig, SplitConfigBuilder, DEFAULT_DPI, DEFAULT_PREFIX, MAX_THREADS};
pub use error::SplitError;
pub use output::SplitOutcome;
pub use pipeline::render::{PdfiumRasterizer, Rasterizer};
pub use split::{page_count, split, split_with};
