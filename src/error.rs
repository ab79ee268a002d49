//! Error types for the splitpdf library.
//!
//! Every failure here is terminal for the current run: nothing is retried and
//! nothing is recovered locally. Each variant carries the offending path or
//! page number so the message alone is enough to diagnose a failed run.
//! The CLI decides per-variant whether the failure warrants reprinting the
//! usage text (bad inputs do; a mid-render pdfium error does not).

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the splitpdf library.
#[derive(Debug, Error)]
pub enum SplitError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Output directory could not be created (anything other than
    /// already-exists, which is treated as success).
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing a rendered page image failed.
    #[error("Failed to write image for page {page} to '{path}': {source}")]
    ImageWriteFailed {
        page: usize,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── Engine errors ─────────────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\n\
The pdfium shared library must be discoverable at runtime.\n\
  • Set PDFIUM_LIB_PATH=/path/to/dir containing libpdfium.\n\
  • Or place the platform library in the working directory.\n\
  • Or install pdfium as a system library.\n"
    )]
    EngineMissing(String),

    /// The document failed to load, so its page count cannot be determined
    /// (corrupt header, truncated file, unsupported encryption).
    #[error("Cannot determine page count of '{path}': {detail}")]
    PageCountFailed { path: PathBuf, detail: String },

    /// pdfium returned an error while rendering a specific page.
    #[error("Rasterisation failed for page {page}: {detail}")]
    PageRenderFailed { page: usize, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SplitError {
    /// True for failures caused by bad invocation inputs, i.e. the class of
    /// errors where the CLI reprints the usage text so the user can
    /// self-correct. Engine and per-page failures are not in this class.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SplitError::FileNotFound { .. }
                | SplitError::PermissionDenied { .. }
                | SplitError::NotAPdf { .. }
                | SplitError::OutputDirFailed { .. }
                | SplitError::InvalidConfig(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let e = SplitError::FileNotFound {
            path: PathBuf::from("/tmp/nope.pdf"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/nope.pdf"), "got: {msg}");
    }

    #[test]
    fn page_render_failed_display() {
        let e = SplitError::PageRenderFailed {
            page: 7,
            detail: "malformed content stream".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("page 7"));
        assert!(msg.contains("malformed content stream"));
    }

    #[test]
    fn not_a_pdf_display() {
        let e = SplitError::NotAPdf {
            path: PathBuf::from("notes.txt"),
            magic: *b"hell",
        };
        assert!(e.to_string().contains("notes.txt"));
    }

    #[test]
    fn invalid_argument_classification() {
        assert!(SplitError::InvalidConfig("threads".into()).is_invalid_argument());
        assert!(SplitError::FileNotFound {
            path: PathBuf::from("x.pdf")
        }
        .is_invalid_argument());
        assert!(!SplitError::EngineMissing("no library".into()).is_invalid_argument());
        assert!(!SplitError::PageRenderFailed {
            page: 1,
            detail: "boom".into()
        }
        .is_invalid_argument());
    }
}
