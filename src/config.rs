//! Configuration for a split run.
//!
//! All behaviour is controlled through [`SplitConfig`], built via its
//! [`SplitConfigBuilder`]. The record is constructed once from CLI input (or
//! library callers), validated at build time, and never mutated afterwards —
//! one immutable config drives exactly one conversion call.
//!
//! The thread ceiling and default resolution are named constants rather than
//! ambient globals, so their values show up in error messages and docs
//! instead of being buried in control flow.

use crate::error::SplitError;
use image::ImageFormat;

/// Hard ceiling on requested rasterisation parallelism.
///
/// pdfium serialises FFI access internally (the `thread_safe` feature), so
/// extra workers past a handful buy little; 20 is a generous upper bound that
/// keeps absurd requests (`-m 5000`) from spawning a thread per page.
pub const MAX_THREADS: usize = 20;

/// Default rendering resolution in dots per inch.
///
/// 300 DPI is print quality: small fonts stay legible in the output PNGs
/// while file sizes remain manageable for typical letter/A4 pages.
pub const DEFAULT_DPI: u32 = 300;

/// Default filename prefix for page images (`page_1.png`, `page_2.png`, …).
pub const DEFAULT_PREFIX: &str = "page";

/// Configuration for splitting one PDF into per-page images.
///
/// Built via [`SplitConfig::builder()`] or [`SplitConfig::default()`].
///
/// # Example
/// ```rust
/// use splitpdf::SplitConfig;
///
/// let config = SplitConfig::builder()
///     .threads(4)
///     .prefix("slide")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Rendering DPI. Default: [`DEFAULT_DPI`] (300).
    ///
    /// Not exposed on the CLI; library callers can tune it. pdfium's native
    /// unit is the point (1/72 inch), so the render scale is `dpi / 72`.
    pub dpi: u32,

    /// Number of rasterisation worker threads. Default: 1.
    ///
    /// Always in `1..=MAX_THREADS`; validated at build time. The value is
    /// passed through to the rasterisation backend, which owns all
    /// work-splitting — callers see a single blocking call either way.
    pub threads: usize,

    /// Filename prefix for page images. Default: [`DEFAULT_PREFIX`].
    ///
    /// Pages are written as `<prefix>_<N>.<ext>` with N 1-based, so a
    /// numeric-suffix sort of the directory recovers page order.
    pub prefix: String,

    /// Output image format. Default: PNG.
    ///
    /// PNG is lossless — compression artefacts on rendered text defeat the
    /// point of a 300 DPI render.
    pub format: ImageFormat,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            threads: 1,
            prefix: DEFAULT_PREFIX.to_string(),
            format: ImageFormat::Png,
        }
    }
}

impl SplitConfig {
    /// Create a new builder for `SplitConfig`.
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder {
            config: Self::default(),
        }
    }

    /// File extension for the configured output format.
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("img")
    }
}

/// Builder for [`SplitConfig`].
#[derive(Debug)]
pub struct SplitConfigBuilder {
    config: SplitConfig,
}

impl SplitConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi;
        self
    }

    pub fn threads(mut self, n: usize) -> Self {
        self.config.threads = n;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<SplitConfig, SplitError> {
        let c = &self.config;
        if c.threads < 1 || c.threads > MAX_THREADS {
            return Err(SplitError::InvalidConfig(format!(
                "thread count must be 1–{MAX_THREADS}, got {}",
                c.threads
            )));
        }
        if c.dpi < 72 || c.dpi > 600 {
            return Err(SplitError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.prefix.is_empty() {
            return Err(SplitError::InvalidConfig(
                "filename prefix must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}
