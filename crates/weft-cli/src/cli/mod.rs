//! Command-line interface definition for weft.
//!
//! # Command Structure
//!
//! - `weft inspect` - Assemble the bundler configuration and print it as JSON
//! - `weft paths` - Print the resolved project layout

mod commands;
pub mod enums;
#[cfg(test)]
mod tests;

use clap::Parser;

pub use commands::{Command, InspectArgs, PathsArgs};
pub use enums::*;

/// weft - context-driven bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "weft",
    version,
    about = "Assembles bundler configuration for a weft project",
    long_about = "weft turns a project's weft.toml, a build mode and a deployment target\n\
                  into the complete, ordered configuration handed to the bundling engine."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Logs every assembly step and the resolved project layout.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
