//! Input resolution: validate the user-supplied PDF path.
//!
//! We check the `%PDF` magic bytes up front so callers get a meaningful
//! error rather than a pdfium load failure on an obviously wrong file.
//! This runs before any directory creation, so a bad input path leaves no
//! filesystem side effects.

use crate::error::SplitError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve and validate a local PDF path.
///
/// The file must exist, be openable, and start with the `%PDF` magic bytes.
/// A file shorter than four bytes cannot be a PDF and is rejected too.
pub fn resolve_pdf(path: &Path) -> Result<PathBuf, SplitError> {
    if !path.exists() {
        return Err(SplitError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(SplitError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(SplitError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    };

    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) if &magic == b"%PDF" => {}
        _ => {
            return Err(SplitError::NotAPdf {
                path: path.to_path_buf(),
                magic,
            });
        }
    }

    debug!("Resolved input PDF: {}", path.display());
    Ok(path.to_path_buf())
}
