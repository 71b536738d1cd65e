//! Entry point of the assembler.

use std::path::PathBuf;

use tracing::{debug, info};
use weft_config::BuildContext;
use weft_paths::ProjectLayout;

use crate::graph::BuildGraph;
use crate::steps::PIPELINE;

/// Inputs shared by every pipeline step.
#[derive(Debug, Clone, Copy)]
pub struct Assembly<'a> {
    pub ctx: &'a BuildContext,
    pub layout: &'a ProjectLayout,
}

impl<'a> Assembly<'a> {
    pub fn new(ctx: &'a BuildContext, layout: &'a ProjectLayout) -> Self {
        Self { ctx, layout }
    }

    /// Build-hash fragment for entry scripts and copied assets.
    pub fn file_hash(&self) -> &'static str {
        if self.ctx.needs_hash() { ".[hash:8]" } else { "" }
    }

    /// Content-hash fragment for split chunks.
    pub fn chunk_hash(&self) -> &'static str {
        if self.ctx.needs_hash() {
            ".[contenthash:8]"
        } else {
            ""
        }
    }

    /// Absolute output directory.
    pub fn dist_dir(&self) -> PathBuf {
        self.layout.app(self.ctx.dist_dir())
    }

    /// Module search directories, shared by module and loader resolution.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from("node_modules"),
            self.layout.dependency_store.clone(),
            self.layout.cli("node_modules"),
        ]
    }
}

/// Builds the configuration graph for one build.
///
/// Deterministic: identical inputs yield identical graphs, down to the order
/// of rules and stages.
pub fn assemble(ctx: &BuildContext, layout: &ProjectLayout) -> BuildGraph {
    let assembly = Assembly::new(ctx, layout);

    let graph = PIPELINE
        .iter()
        .fold(BuildGraph::new(), |graph, &(name, step)| {
            debug!(step = name, "applying");
            step(graph, &assembly)
        });

    info!(
        mode = %ctx.mode,
        target = %ctx.target,
        rules = graph.rules.len(),
        stages = graph.plugins.len(),
        "assembled build graph"
    );
    graph
}
