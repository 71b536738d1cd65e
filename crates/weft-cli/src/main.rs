//! weft CLI entry point: argument parsing, logging initialization and
//! command dispatch.

use clap::Parser;
use miette::Result;
use weft_cli::{cli, error, exit_outside_project, logger, run, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    match run(args) {
        Ok(()) => Ok(()),
        Err(err) if err.is_outside_project() => exit_outside_project(),
        Err(err) => Err(error::cli_error_to_miette(err)),
    }
}
