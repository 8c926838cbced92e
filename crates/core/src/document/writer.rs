//! Writing rewritten documents back to disk.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::types::DocumentError;

/// Overwrite `path` with `content` directly.
///
/// A failure part way through can leave the file truncated.
pub fn write_in_place(path: &Path, content: &str) -> Result<(), DocumentError> {
    let write_err = |source| DocumentError::Write { path: path.to_path_buf(), source };

    ensure_writable(path).map_err(write_err)?;
    fs::write(path, content).map_err(write_err)
}

/// Replace `path` with `content` through a temporary file next to the real
/// file, keeping the original file's permissions.
///
/// Symlinks are followed: the file they point at is replaced and the link
/// itself stays in place.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), DocumentError> {
    let write_err = |source| DocumentError::Write { path: path.to_path_buf(), source };

    ensure_writable(path).map_err(write_err)?;

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file().set_permissions(meta.permissions()).map_err(write_err)?;
    }

    tmp.persist(&target).map_err(|e| DocumentError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Refuse to replace an existing file whose permissions forbid writing.
///
/// A rename only needs write access to the directory, so the atomic path
/// would otherwise replace read-only files silently.
fn ensure_writable(path: &Path) -> io::Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.permissions().readonly() => Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "file is read-only",
        )),
        _ => Ok(()),
    }
}
