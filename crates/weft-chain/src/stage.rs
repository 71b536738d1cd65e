//! Pipeline stages (engine plugins) and minimizers.
//!
//! Every stage kind carries its own parameter type, so the parameters a stage
//! needs are visible in its variant rather than assembled ad hoc.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use weft_config::{AnalyzerOptions, CompressionOptions};

/// A named, parametrized extension point run by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineStage {
    /// Unique within a graph
    pub name: String,
    /// Engine-side implementation to instantiate
    pub implementation: String,
    pub params: StageParams,
}

impl PipelineStage {
    /// Stage registered under its conventional name.
    pub fn new(params: StageParams) -> Self {
        Self::named(params.default_name(), params)
    }

    pub fn named(name: impl Into<String>, params: StageParams) -> Self {
        Self {
            name: name.into(),
            implementation: params.implementation().to_string(),
            params,
        }
    }
}

/// Stage parameters, one variant per stage kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "kebab-case")]
pub enum StageParams {
    /// Companion of the single-file-component transformer
    ComponentSupport,
    /// Compile-time replacement of environment expressions
    Define { definitions: IndexMap<String, String> },
    Progress { name: String },
    FriendlyErrors(FriendlyErrorsOptions),
    /// Module ids derived from a hash of the module path
    HashedModuleIds { hash_digest: String },
    /// Chunk ids from the chunk name, or a hash of its module ids (see [`crate::chunk_id`])
    NamedChunks,
    Copy { patterns: Vec<CopyPattern> },
    StyleExtract { filename: String },
    StyleOptimize(StyleOptimizeOptions),
    Compression(CompressionOptions),
    BundleAnalyzer(AnalyzerOptions),
}

impl StageParams {
    pub fn default_name(&self) -> &'static str {
        match self {
            StageParams::ComponentSupport => "vue-loader",
            StageParams::Define { .. } => "define",
            StageParams::Progress { .. } => "progress",
            StageParams::FriendlyErrors(_) => "friendly-errors",
            StageParams::HashedModuleIds { .. } => "hashed-module-ids",
            StageParams::NamedChunks => "named-chunks",
            StageParams::Copy { .. } => "copy-webpack",
            StageParams::StyleExtract { .. } => "mini-css-extract",
            StageParams::StyleOptimize(_) => "optimize-css",
            StageParams::Compression(_) => "compress-webpack",
            StageParams::BundleAnalyzer(_) => "bundle-analyzer",
        }
    }

    pub fn implementation(&self) -> &'static str {
        match self {
            StageParams::ComponentSupport => "vue-loader/lib/plugin",
            StageParams::Define { .. } => "webpack.DefinePlugin",
            StageParams::Progress { .. } => "weft/progress",
            StageParams::FriendlyErrors(_) => "friendly-errors-webpack-plugin",
            StageParams::HashedModuleIds { .. } => "webpack.HashedModuleIdsPlugin",
            StageParams::NamedChunks => "webpack.NamedChunksPlugin",
            StageParams::Copy { .. } => "copy-webpack-plugin",
            StageParams::StyleExtract { .. } => "mini-css-extract-plugin",
            StageParams::StyleOptimize(_) => "optimize-css-assets-webpack-plugin",
            StageParams::Compression(_) => "compression-webpack-plugin",
            StageParams::BundleAnalyzer(_) => "webpack-bundle-analyzer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FriendlyErrorsOptions {
    pub clear_console: bool,
    /// Notes printed after a successful compilation; `None` prints no banner
    pub compilation_success_info: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: String,
    /// Globs skipped while copying
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleOptimizeOptions {
    pub can_print: bool,
    pub processor: String,
    pub safe_parser: bool,
    pub autoprefixer: bool,
    pub merge_longhand: bool,
    /// Write maps to separate files; `None` when source maps are off
    pub map_inline: Option<bool>,
}

/// Script minimizers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Minimizer {
    Uglify {
        /// Passed through to the minifier untouched
        options: Value,
        cache: bool,
        parallel: bool,
        source_map: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_takes_name_and_implementation_from_params() {
        let stage = PipelineStage::new(StageParams::NamedChunks);
        assert_eq!(stage.name, "named-chunks");
        assert_eq!(stage.implementation, "webpack.NamedChunksPlugin");
    }

    #[test]
    fn params_serialize_with_kind_tag() {
        let stage = PipelineStage::new(StageParams::Progress {
            name: "Client".into(),
        });
        let value = serde_json::to_value(&stage).unwrap();
        assert_eq!(value["params"]["kind"], "progress");
        assert_eq!(value["params"]["options"]["name"], "Client");
    }
}
