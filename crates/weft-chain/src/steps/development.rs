//! Development-only error handling and console feedback.

use crate::assemble::Assembly;
use crate::graph::BuildGraph;
use crate::stage::{FriendlyErrorsOptions, PipelineStage, StageParams};

pub(super) fn development(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let ctx = asm.ctx;
    if !ctx.mode.is_dev() {
        return graph;
    }

    // A failed rebuild keeps the last good bundle live.
    graph.optimization.emit_on_errors = false;

    let compilation_success_info = ctx.target.has_dev_banner().then(|| vec![banner(asm)]);
    graph.add_stage(PipelineStage::new(StageParams::FriendlyErrors(
        FriendlyErrorsOptions {
            clear_console: true,
            compilation_success_info,
        },
    )));
    graph
}

fn banner(asm: &Assembly<'_>) -> String {
    let ctx = asm.ctx;
    let what = format!(
        "App [{} with \"{}\" theme] compiled successfully",
        ctx.target, ctx.theme
    );
    match &ctx.build.app_url {
        Some(url) => format!("{what}, listening at {url}"),
        None => what,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::fixture;
    use weft_config::{BuildContext, Mode, Target};

    fn run(ctx: &BuildContext) -> BuildGraph {
        let layout = fixture::layout();
        development(BuildGraph::new(), &Assembly::new(ctx, &layout))
    }

    fn friendly(graph: &BuildGraph) -> FriendlyErrorsOptions {
        match &graph.stage("friendly-errors").unwrap().params {
            StageParams::FriendlyErrors(options) => options.clone(),
            other => panic!("unexpected params {other:?}"),
        }
    }

    #[test]
    fn production_is_untouched() {
        let graph = run(&fixture::ctx(Mode::Production, Target::WebApp));
        assert_eq!(graph, BuildGraph::new());
    }

    #[test]
    fn broken_bundles_are_not_emitted() {
        let graph = run(&fixture::ctx(Mode::Development, Target::EmbeddedDesktop));
        assert!(!graph.optimization.emit_on_errors);
        assert!(friendly(&graph).clear_console);
    }

    #[test]
    fn banner_only_for_served_targets() {
        for target in Target::ALL {
            let graph = run(&fixture::ctx(Mode::Development, target));
            assert_eq!(
                friendly(&graph).compilation_success_info.is_some(),
                target.has_dev_banner(),
                "{target}"
            );
        }
    }

    #[test]
    fn banner_mentions_app_url() {
        let mut ctx = fixture::ctx(Mode::Development, Target::InstallableWebApp);
        ctx.build.app_url = Some("http://localhost:8080".to_string());
        let notes = friendly(&run(&ctx)).compilation_success_info.unwrap();
        assert_eq!(
            notes,
            ["App [pwa with \"mat\" theme] compiled successfully, listening at http://localhost:8080"]
        );
    }
}
