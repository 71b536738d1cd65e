//! Project root discovery and the directory layout derived from it.
//!
//! The root of a weft project is the nearest directory (walking upward from
//! the working directory) that contains a `weft.toml` marker file. Every other
//! directory the build needs is derived from that root once and then treated
//! as read-only for the rest of the process.
//!
//! # Example
//!
//! ```no_run
//! use weft_paths::ProjectLayout;
//!
//! let layout = ProjectLayout::locate()?;
//! println!("sources live in {}", layout.src_dir.display());
//! # Ok::<(), weft_paths::PathError>(())
//! ```

pub mod error;
mod layout;
mod locate;

pub use error::{PathError, Result};
pub use layout::{Overlay, ProjectLayout, StoreKind, install_dir};
pub use locate::{MARKER_FILE, RootMatch, find_root};
