//! weft CLI - inspect the bundler configuration assembled for a project.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `inspect` and `paths`
//! - [`error`] - [`CliError`] and its miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};

/// Tells the user the command needs a project, then exits with status 1.
///
/// Nothing has been scheduled when the root lookup fails, so exiting here
/// leaves no work half done.
pub fn exit_outside_project() -> ! {
    ui::warning("Error. This command must be executed inside a weft project folder.");
    ui::warning("Create a weft.toml in the project root, or run weft from a directory below one.");
    ui::warning("");
    std::process::exit(1)
}

/// Runs the parsed command.
pub fn run(args: cli::Cli) -> Result<()> {
    match args.command {
        cli::Command::Inspect(inspect_args) => commands::inspect_execute(inspect_args),
        cli::Command::Paths(paths_args) => commands::paths_execute(paths_args),
    }
}
