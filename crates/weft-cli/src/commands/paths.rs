//! `weft paths`: print the resolved project layout.

use std::io::Write;

use weft_paths::ProjectLayout;

use crate::cli::PathsArgs;
use crate::commands::utils::to_json;
use crate::error::Result;

pub fn execute(args: PathsArgs) -> Result<()> {
    let layout = ProjectLayout::global()?;
    let json = to_json(layout, args.compact)?;
    writeln!(std::io::stdout().lock(), "{json}")?;
    Ok(())
}
