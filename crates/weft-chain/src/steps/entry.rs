//! Entry point, source-map style and output file naming.

use crate::assemble::Assembly;
use crate::graph::{BuildGraph, Entry, Output};

/// Generated bootstrap file, relative to the project root.
pub(crate) const CLIENT_ENTRY: &str = ".weft/client-entry.js";

pub(super) fn entry(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    graph.mode = asm.ctx.mode;
    graph.devtool = asm.ctx.devtool();
    graph.entries.push(Entry {
        name: "app".to_string(),
        import: asm.layout.app(CLIENT_ENTRY),
    });
    graph
}

/// Output is left to the engine's in-memory defaults unless files are written.
pub(super) fn output(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    if !asm.ctx.writes_output() {
        return graph;
    }

    let dist = asm.dist_dir();
    let path = if asm.ctx.target.is_server_rendered() {
        dist.join("www")
    } else {
        dist
    };

    graph.output = Output {
        path: Some(path),
        public_path: Some(asm.ctx.build.public_path.clone()),
        filename: Some(format!("js/[name]{}.js", asm.file_hash())),
        chunk_filename: Some(format!("js/[name]{}.js", asm.chunk_hash())),
    };
    graph
}
