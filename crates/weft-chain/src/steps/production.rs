//! Production-only steps. Each one is a no-op in development.

use indexmap::IndexMap;

use crate::assemble::Assembly;
use crate::graph::BuildGraph;
use crate::split::{CacheGroup, ChunkSelection, SplitChunks, VendorTest};
use crate::stage::{CopyPattern, Minimizer, PipelineStage, StageParams, StyleOptimizeOptions};

pub(crate) const EXTRACTED_STYLE_NAME: &str = "css/[name].[contenthash:8].css";

/// Production steps that also apply to server-rendered builds.
fn production(asm: &Assembly<'_>) -> bool {
    asm.ctx.mode.is_prod()
}

/// Production steps that only make sense for a client bundle.
fn client_production(asm: &Assembly<'_>) -> bool {
    production(asm) && !asm.ctx.target.is_server_rendered()
}

/// Module and chunk ids that survive unrelated changes, so long-term
/// caching of unchanged chunks keeps working.
pub(super) fn stable_ids(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    if !production(asm) {
        return graph;
    }
    graph.optimization.module_id_stability = true;
    graph.add_stage(PipelineStage::new(StageParams::HashedModuleIds {
        hash_digest: "hex".to_string(),
    }));
    graph.add_stage(PipelineStage::new(StageParams::NamedChunks));
    graph
}

pub(super) fn code_splitting(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    if !client_production(asm) {
        return graph;
    }
    let ctx = asm.ctx;

    let mut cache_groups = IndexMap::new();
    cache_groups.insert(
        "vendors".to_string(),
        CacheGroup {
            name: "vendor".to_string(),
            chunks: ChunkSelection::Initial,
            priority: -10,
            test: Some(VendorTest::new(ctx.vendor.add.clone(), ctx.vendor.remove.clone())),
            min_chunks: None,
            reuse_existing_chunk: false,
        },
    );
    cache_groups.insert(
        "common".to_string(),
        CacheGroup {
            name: "chunk-common".to_string(),
            chunks: ChunkSelection::Initial,
            priority: -20,
            test: None,
            min_chunks: Some(2),
            reuse_existing_chunk: true,
        },
    );
    graph.optimization.split_chunks = Some(SplitChunks { cache_groups });

    // Keeps the vendor hash stable when only application code changes.
    graph.optimization.runtime_isolation = ctx.build.runtime_chunk;

    graph.add_stage(PipelineStage::new(StageParams::Copy {
        patterns: vec![CopyPattern {
            from: asm.layout.src("statics"),
            to: "statics".to_string(),
            ignore: vec![".*".to_string()],
        }],
    }));
    graph
}

pub(super) fn scope_hoisting(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    if production(asm) && asm.ctx.build.scope_hoisting {
        graph.optimization.concatenate_modules = true;
    }
    graph
}

pub(super) fn minimizer(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    if !production(asm) {
        return graph;
    }
    let ctx = asm.ctx;

    if ctx.debug {
        graph.optimization.minimizer = Some(Vec::new());
    } else if ctx.build.minify {
        graph.optimization.minimizer = Some(vec![Minimizer::Uglify {
            options: ctx.build.minifier_options.clone(),
            cache: true,
            parallel: true,
            source_map: ctx.build.source_map,
        }]);
    }
    graph
}

/// Extraction must be registered before the optimizer that consumes its files.
pub(super) fn style_extraction(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let ctx = asm.ctx;
    if !ctx.extract_css() {
        return graph;
    }

    graph.add_stage(PipelineStage::new(StageParams::StyleExtract {
        filename: EXTRACTED_STYLE_NAME.to_string(),
    }));

    if ctx.minify() {
        graph.add_stage(PipelineStage::new(StageParams::StyleOptimize(
            StyleOptimizeOptions {
                can_print: false,
                processor: "cssnano".to_string(),
                safe_parser: true,
                autoprefixer: false,
                merge_longhand: false,
                map_inline: ctx.build.source_map.then_some(false),
            },
        )));
    }
    graph
}

/// Optional compression and bundle analysis of the client output.
pub(super) fn delivery(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    if !client_production(asm) {
        return graph;
    }
    let build = &asm.ctx.build;

    if let Some(options) = build.gzip.options() {
        graph.add_stage(PipelineStage::new(StageParams::Compression(options)));
    }
    if let Some(options) = build.analyze.options() {
        graph.add_stage(PipelineStage::new(StageParams::BundleAnalyzer(options)));
    }
    graph
}
