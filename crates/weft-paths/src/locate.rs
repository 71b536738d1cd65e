//! Upward search for the project marker file.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use crate::error::{PathError, Result};

/// File whose presence marks a directory as a weft project root.
pub const MARKER_FILE: &str = "weft.toml";

/// Result of a successful root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMatch {
    /// Directory containing the marker file.
    pub root: PathBuf,
    /// Number of parent hops taken from the starting directory.
    pub steps: usize,
}

/// Walks up from `start` until a directory containing [`MARKER_FILE`] is found.
///
/// Relative starting points are resolved against the process working
/// directory first. The walk ends at the filesystem root: `Path::parent`
/// returns `None` there, so the loop cannot spin on `/` or a drive prefix.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] when no ancestor holds the marker file.
pub fn find_root(start: &Path) -> Result<RootMatch> {
    let start = absolutize(start)?;
    let mut current = start.as_path();
    let mut steps = 0;

    loop {
        if current.join(MARKER_FILE).is_file() {
            debug!(root = %current.display(), steps, "found project marker");
            return Ok(RootMatch {
                root: current.to_path_buf(),
                steps,
            });
        }

        match current.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                current = parent;
                steps += 1;
            }
            _ => return Err(PathError::NotFound { start }),
        }
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(absolute.clean())
}
