//! Types shared by the document rewriting operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to replace {} with rewritten copy: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a document run should behave.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Insert a byline at the top of the body when none is present.
    pub insert_byline: bool,
    /// Compute the result without touching the file.
    pub dry_run: bool,
    /// Write through a temporary file renamed over the target.
    pub atomic: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { insert_byline: false, dry_run: false, atomic: true }
    }
}

/// Rewritten text plus what the rewrite did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub byline_inserted: bool,
}

/// Result of a document run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The rewritten document.
    pub content: String,
    /// Whether the rewritten document differs from the original.
    pub changed: bool,
    pub byline_inserted: bool,
    /// Whether the file on disk was replaced.
    pub written: bool,
}
