//! `weft inspect`: assemble the bundler configuration and print it.

use std::fs;
use std::io::Write;

use serde_json::{Map, Value};
use tracing::{debug, info};
use weft_chain::assemble;
use weft_config::{BuildContext, ConfigLoader};
use weft_paths::ProjectLayout;

use crate::cli::InspectArgs;
use crate::commands::utils::to_json;
use crate::error::{Result, ResultExt};
use crate::ui;

pub fn execute(args: InspectArgs) -> Result<()> {
    let layout = ProjectLayout::global()?;
    let ctx = load_context(layout, &args)?;
    debug!(?ctx, "build context");

    let graph = assemble(&ctx, layout);
    let json = to_json(&graph, args.compact)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n")).with_path(path)?;
            info!(path = %path.display(), "graph written");
            ui::success(&format!(
                "Wrote {} graph for {} to {}",
                ctx.mode,
                ctx.target,
                path.display()
            ));
        }
        None => writeln!(std::io::stdout().lock(), "{json}")?,
    }
    Ok(())
}

/// Loads `weft.toml` with environment and command-line overrides applied.
///
/// Priority: CLI args > `WEFT_*` environment > weft.toml > defaults
pub fn load_context(layout: &ProjectLayout, args: &InspectArgs) -> Result<BuildContext> {
    let config = ConfigLoader::for_project(&layout.root)?
        .with_env()
        .with_overrides(cli_overrides(args))
        .load()?;

    Ok(config.into_context(args.mode.into(), args.target.into(), args.debug))
}

fn cli_overrides(args: &InspectArgs) -> Value {
    let mut overrides = Map::new();
    if let Some(theme) = &args.theme {
        overrides.insert("theme".to_string(), Value::String(theme.clone()));
    }
    Value::Object(overrides)
}
