//! Output preparation: ensure the destination directory exists.
//!
//! Idempotent create-if-absent. An already-existing directory is the fast
//! path, not an error, and a creation race lost to a concurrent creator is
//! treated the same way. Never deletes or modifies existing content.

use crate::error::SplitError;
use std::path::Path;
use tracing::info;

/// Ensure `dir` exists, creating it (and any missing parents) if absent.
///
/// # Errors
/// [`SplitError::OutputDirFailed`] when the path exists but is not a
/// directory, or when creation fails for any reason other than
/// already-exists (permissions, invalid path, disk full).
pub fn prepare_output_dir(dir: &Path) -> Result<(), SplitError> {
    if dir.is_dir() {
        info!("Output directory '{}' already exists", dir.display());
        return Ok(());
    }

    if dir.exists() {
        // Present but not a directory; create_dir_all would report a
        // confusing AlreadyExists here, so fail explicitly.
        return Err(SplitError::OutputDirFailed {
            path: dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                "path exists but is not a directory",
            ),
        });
    }

    match std::fs::create_dir_all(dir) {
        Ok(()) => {
            info!("Output directory '{}' created", dir.display());
            Ok(())
        }
        // Lost a creation race to a concurrent creator: the directory is
        // there now, which is all we wanted.
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(SplitError::OutputDirFailed {
            path: dir.to_path_buf(),
            source: e,
        }),
    }
}
