//! Plain file reads and directory creation

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Ensure `path` exists as a directory, creating it and any missing parents.
///
/// Returns the path unchanged. Calling this on an existing directory is a
/// no-op. A regular file sitting at `path` is reported as `Error::CreateDir`.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }

    tracing::debug!(?path, "Creating directory");
    fs::create_dir_all(path).map_err(|e| Error::create_dir(path, e))?;

    Ok(path.to_path_buf())
}
