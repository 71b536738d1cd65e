//! Stages every build registers, plus performance hints.

use indexmap::IndexMap;
use serde_json::Value;

use crate::assemble::Assembly;
use crate::graph::{BuildGraph, Performance};
use crate::stage::{PipelineStage, StageParams};

/// Largest asset, in bytes, before the engine would warn.
pub(crate) const MAX_ASSET_SIZE: u64 = 500_000;

/// Stages present in every build.
pub(super) fn stages(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    graph.add_stage(PipelineStage::new(StageParams::ComponentSupport));
    graph.add_stage(PipelineStage::new(StageParams::Define {
        definitions: definitions(asm),
    }));

    if asm.ctx.build.show_progress {
        graph.add_stage(PipelineStage::new(StageParams::Progress {
            name: asm.ctx.config_name().to_string(),
        }));
    }
    graph
}

pub(super) fn performance(mut graph: BuildGraph, _asm: &Assembly<'_>) -> BuildGraph {
    graph.performance = Performance {
        hints: false,
        max_asset_size: Some(MAX_ASSET_SIZE),
    };
    graph
}

/// `process.env.*` replacements: the built-in variables followed by the
/// user's `[env]` table. Values are JS source, so strings are quoted.
fn definitions(asm: &Assembly<'_>) -> IndexMap<String, String> {
    let ctx = asm.ctx;
    let quoted = |value: &str| Value::String(value.to_string()).to_string();

    let builtins = [
        ("NODE_ENV", quoted(ctx.mode.as_str())),
        ("DEV", ctx.mode.is_dev().to_string()),
        ("PROD", ctx.mode.is_prod().to_string()),
        ("THEME", quoted(&ctx.theme)),
        ("MODE", quoted(ctx.target.short_name())),
    ];

    builtins
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .chain(ctx.env.iter().map(|(key, value)| (key.clone(), quoted(value))))
        .map(|(key, value)| (format!("process.env.{key}"), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::fixture;
    use weft_config::{BuildContext, Mode, Target};

    fn run(ctx: &BuildContext) -> BuildGraph {
        let layout = fixture::layout();
        let asm = Assembly::new(ctx, &layout);
        performance(stages(BuildGraph::new(), &asm), &asm)
    }

    fn definitions_of(graph: &BuildGraph) -> IndexMap<String, String> {
        match &graph.stage("define").unwrap().params {
            StageParams::Define { definitions } => definitions.clone(),
            other => panic!("unexpected params {other:?}"),
        }
    }

    #[test]
    fn base_stage_order() {
        let graph = run(&fixture::ctx(Mode::Development, Target::WebApp));
        assert_eq!(graph.stage_names(), ["vue-loader", "define", "progress"]);
    }

    #[test]
    fn progress_is_optional_and_named_after_config() {
        let mut ctx = fixture::ctx(Mode::Production, Target::ServerRendered);
        let graph = run(&ctx);
        assert_eq!(
            graph.stage("progress").unwrap().params,
            StageParams::Progress {
                name: "Server".to_string()
            }
        );

        ctx.build.show_progress = false;
        assert!(!run(&ctx).has_stage("progress"));
    }

    #[test]
    fn builtin_definitions_are_json_encoded() {
        let graph = run(&fixture::ctx(Mode::Production, Target::EmbeddedMobile).with_theme("ios"));
        let defs = definitions_of(&graph);
        assert_eq!(defs["process.env.NODE_ENV"], "\"production\"");
        assert_eq!(defs["process.env.DEV"], "false");
        assert_eq!(defs["process.env.PROD"], "true");
        assert_eq!(defs["process.env.THEME"], "\"ios\"");
        assert_eq!(defs["process.env.MODE"], "\"cordova\"");
    }

    #[test]
    fn user_variables_follow_builtins() {
        let mut ctx = fixture::ctx(Mode::Development, Target::WebApp);
        ctx.env.insert("API".to_string(), "https://api.test/\"v1\"".to_string());
        let defs = definitions_of(&run(&ctx));
        assert_eq!(defs.keys().last().map(String::as_str), Some("process.env.API"));
        assert_eq!(defs["process.env.API"], r#""https://api.test/\"v1\"""#);
    }

    #[test]
    fn performance_hints_are_off() {
        let graph = run(&fixture::ctx(Mode::Production, Target::WebApp));
        assert!(!graph.performance.hints);
        assert_eq!(graph.performance.max_asset_size, Some(MAX_ASSET_SIZE));
    }
}
