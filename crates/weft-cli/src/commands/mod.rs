//! Command implementations for the weft CLI.
//!
//! - [`inspect`] - Assemble and print the bundler configuration
//! - [`paths`] - Print the resolved project layout

pub mod inspect;
pub mod paths;
pub(crate) mod utils;

pub use inspect::execute as inspect_execute;
pub use paths::execute as paths_execute;
