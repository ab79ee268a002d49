//! Page rasterisation: render every page to an image file via pdfium.
//!
//! The backend sits behind the [`Rasterizer`] trait — one method, taking the
//! validated parameters — so a different native engine can be swapped in
//! without touching the rest of the program, and so the pipeline can be
//! tested against a stub.
//!
//! ## Threading
//!
//! The caller sees a single blocking call; all work-splitting happens here.
//! pdfium handles are not `Send`, so each worker thread binds its own engine
//! handle and loads its own copy of the document, then renders a striped
//! subset of pages (worker *w* of *W* renders pages *w*, *w+W*, *w+2W*, …).
//! The `thread_safe` crate feature serialises the raw FFI calls underneath,
//! which keeps this safe at the cost of contention on the pdfium mutex.

use crate::config::SplitConfig;
use crate::error::SplitError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The rasterisation capability: convert a PDF at a path into one image file
/// per page, written to `output_dir`, returning the written paths in page
/// order.
pub trait Rasterizer: Send + Sync {
    fn rasterize(
        &self,
        pdf: &Path,
        output_dir: &Path,
        config: &SplitConfig,
    ) -> Result<Vec<PathBuf>, SplitError>;
}

/// Production [`Rasterizer`] backed by the pdfium library.
#[derive(Debug, Default)]
pub struct PdfiumRasterizer;

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for PdfiumRasterizer {
    fn rasterize(
        &self,
        pdf: &Path,
        output_dir: &Path,
        config: &SplitConfig,
    ) -> Result<Vec<PathBuf>, SplitError> {
        let engine = bind_engine()?;
        let document = load_document(&engine, pdf)?;
        let page_count = document.pages().len() as usize;
        info!("PDF loaded: {} pages", page_count);

        if page_count == 0 {
            return Ok(Vec::new());
        }

        if config.threads <= 1 || page_count == 1 {
            render_sequential(&document, output_dir, config)
        } else {
            // Workers reload the document themselves; this handle is not Send.
            drop(document);
            render_striped(pdf, output_dir, config, page_count)
        }
    }
}

/// Count the pages of a PDF without rendering anything.
pub fn page_count(pdf: &Path) -> Result<usize, SplitError> {
    let engine = bind_engine()?;
    let document = load_document(&engine, pdf)?;
    Ok(document.pages().len() as usize)
}

// ── Engine binding ────────────────────────────────────────────────────────

/// Bind to the pdfium shared library.
///
/// Resolution order: the directory named by `PDFIUM_LIB_PATH`, then the
/// platform library in the working directory, then the system library.
fn bind_engine() -> Result<Pdfium, SplitError> {
    let lib_dir = std::env::var("PDFIUM_LIB_PATH").unwrap_or_else(|_| "./".to_string());

    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&lib_dir))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| SplitError::EngineMissing(e.to_string()))?;

    Ok(Pdfium::new(bindings))
}

fn load_document<'a>(engine: &'a Pdfium, pdf: &Path) -> Result<PdfDocument<'a>, SplitError> {
    engine
        .load_pdf_from_file(pdf, None)
        .map_err(|e| SplitError::PageCountFailed {
            path: pdf.to_path_buf(),
            detail: format!("{e:?}"),
        })
}

/// Render settings shared by all pages. pdfium's native unit is the point
/// (1/72 inch), so 300 DPI is a 300/72 scale factor.
fn render_settings(config: &SplitConfig) -> PdfRenderConfig {
    PdfRenderConfig::new().scale_page_by_factor(config.dpi as f32 / 72.0)
}

// ── Rendering paths ───────────────────────────────────────────────────────

fn render_sequential(
    document: &PdfDocument<'_>,
    output_dir: &Path,
    config: &SplitConfig,
) -> Result<Vec<PathBuf>, SplitError> {
    let settings = render_settings(config);
    let mut files = Vec::with_capacity(document.pages().len() as usize);

    for (index, page) in document.pages().iter().enumerate() {
        files.push(save_page(&page, index, &settings, output_dir, config)?);
    }

    Ok(files)
}

fn render_striped(
    pdf: &Path,
    output_dir: &Path,
    config: &SplitConfig,
    page_count: usize,
) -> Result<Vec<PathBuf>, SplitError> {
    let workers = config.threads.min(page_count);
    debug!("Rendering {} pages across {} workers", page_count, workers);

    let buckets: Vec<Result<Vec<(usize, PathBuf)>, SplitError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    let engine = bind_engine()?;
                    let document = load_document(&engine, pdf)?;
                    let pages = document.pages();
                    let settings = render_settings(config);
                    let mut written = Vec::new();

                    for index in (worker..page_count).step_by(workers) {
                        let page =
                            pages
                                .get(index as u16)
                                .map_err(|e| SplitError::PageRenderFailed {
                                    page: index + 1,
                                    detail: format!("{e:?}"),
                                })?;
                        written.push((index, save_page(&page, index, &settings, output_dir, config)?));
                    }

                    Ok(written)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| {
                h.join()
                    .unwrap_or_else(|_| Err(SplitError::Internal("render worker panicked".into())))
            })
            .collect()
    });

    let mut indexed = Vec::with_capacity(page_count);
    for bucket in buckets {
        indexed.extend(bucket?);
    }
    indexed.sort_unstable_by_key(|(index, _)| *index);

    Ok(indexed.into_iter().map(|(_, path)| path).collect())
}

/// Render one page and write it to `<output_dir>/<prefix>_<N>.<ext>`,
/// where N is the 1-based page number.
fn save_page(
    page: &PdfPage<'_>,
    index: usize,
    settings: &PdfRenderConfig,
    output_dir: &Path,
    config: &SplitConfig,
) -> Result<PathBuf, SplitError> {
    let page_num = index + 1;

    let image: DynamicImage = page
        .render_with_config(settings)
        .map_err(|e| SplitError::PageRenderFailed {
            page: page_num,
            detail: format!("{e:?}"),
        })?
        .as_image();

    let path = output_dir.join(page_file_name(&config.prefix, page_num, config.extension()));

    image
        .save_with_format(&path, config.format)
        .map_err(|e| SplitError::ImageWriteFailed {
            page: page_num,
            path: path.clone(),
            source: e,
        })?;

    debug!(
        "Rendered page {} → {}x{} px → {}",
        page_num,
        image.width(),
        image.height(),
        path.display()
    );

    Ok(path)
}

/// Filename for a page image: `<prefix>_<N>.<ext>`, N 1-based.
pub fn page_file_name(prefix: &str, page_num: usize, ext: &str) -> String {
    format!("{prefix}_{page_num}.{ext}")
}
