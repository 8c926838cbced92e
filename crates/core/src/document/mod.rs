//! Whole-document rewriting: read, normalize author metadata, write back.

pub mod rewrite;
pub mod types;
pub mod writer;

pub use rewrite::rewrite;
pub use types::{DocumentError, Outcome, Rewrite, RunOptions};

use std::fs;
use std::path::Path;

/// Rewrite the document at `path` so its front matter names `author`.
///
/// The file is read completely before anything is written. Nothing is
/// written when `options.dry_run` is set or when the rewritten text equals
/// what is already on disk.
pub fn run(path: &Path, author: &str, options: &RunOptions) -> Result<Outcome, DocumentError> {
    let original = fs::read_to_string(path)
        .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;

    let Rewrite { content, byline_inserted } = rewrite(&original, author, options.insert_byline);
    let changed = content != original;

    let written = if options.dry_run {
        tracing::info!(path = %path.display(), changed, "dry run, leaving document untouched");
        false
    } else if !changed {
        tracing::info!(path = %path.display(), "document already up to date");
        false
    } else {
        if options.atomic {
            writer::write_atomic(path, &content)?;
        } else {
            writer::write_in_place(path, &content)?;
        }
        tracing::info!(path = %path.display(), byline_inserted, "wrote document");
        true
    };

    Ok(Outcome { content, changed, byline_inserted, written })
}
