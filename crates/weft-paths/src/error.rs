//! Error types for project root discovery.

use std::path::PathBuf;

use thiserror::Error;

use crate::locate::MARKER_FILE;

pub type Result<T> = std::result::Result<T, PathError>;

#[derive(Debug, Error)]
pub enum PathError {
    /// Walked up to the filesystem root without seeing the marker file.
    #[error("no {} found in {} or any of its parent directories", MARKER_FILE, .start.display())]
    NotFound { start: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
