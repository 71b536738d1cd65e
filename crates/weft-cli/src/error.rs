//! Error handling for the weft CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`; `main` turns
//! the result into a `miette` report. A missing project root is the one
//! failure handled before that: see [`crate::exit_outside_project`].

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod miette;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Project root discovery failed
    #[error(transparent)]
    Paths(#[from] weft_paths::PathError),

    /// `weft.toml` could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] weft_config::ConfigError),

    /// Writing output failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from terminal output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// True when the command was run outside any weft project.
    pub fn is_outside_project(&self) -> bool {
        matches!(self, CliError::Paths(weft_paths::PathError::NotFound { .. }))
    }
}

/// Convenience type alias for CLI results.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attaches the offending path to I/O failures.
pub trait ResultExt<T> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| CliError::Write {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
