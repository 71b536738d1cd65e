use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available weft subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled bundler configuration
    ///
    /// Locates the project, loads weft.toml, applies environment and
    /// command-line overrides and writes the resulting graph as JSON.
    Inspect(InspectArgs),

    /// Print the resolved project layout
    ///
    /// Shows the project root, the derived source directories and which
    /// package store (project-local or shared) dependencies resolve from.
    Paths(PathsArgs),
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Build mode
    #[arg(short, long, value_enum, default_value_t = ModeArg::Dev)]
    pub mode: ModeArg,

    /// Deployment target
    ///
    /// Examples:
    ///   weft inspect --target spa
    ///   weft inspect --mode prod --target cordova
    #[arg(short, long, value_enum, default_value_t = TargetArg::Spa)]
    pub target: TargetArg,

    /// Theme variant, overriding `theme` from weft.toml
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Keep output readable by disabling the script minimizer
    #[arg(long)]
    pub debug: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Write the graph to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the paths command
#[derive(Args, Debug)]
pub struct PathsArgs {
    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}
