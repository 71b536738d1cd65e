//! The configuration graph handed to the bundling engine.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use weft_config::{Mode, Pattern};

use crate::rule::TransformRule;
use crate::split::SplitChunks;
use crate::stage::{Minimizer, PipelineStage};

/// Complete, ordered bundler configuration for one build.
///
/// Rule and stage order is significant: later stages may consume artifacts
/// registered by earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildGraph {
    pub mode: Mode,

    /// Source map style; `None` disables source maps
    pub devtool: Option<String>,

    pub entries: Vec<Entry>,

    pub output: Output,

    pub resolve: Resolve,

    /// Search directories for transformer packages
    pub resolve_loader: Vec<PathBuf>,

    /// Modules the engine copies verbatim without parsing
    pub no_parse: Option<Pattern>,

    pub rules: Vec<TransformRule>,

    pub plugins: Vec<PipelineStage>,

    pub optimization: Optimization,

    pub performance: Performance,
}

impl BuildGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stage, replacing any stage already registered under the
    /// same name in its original position.
    pub fn add_stage(&mut self, stage: PipelineStage) {
        match self.plugins.iter_mut().find(|s| s.name == stage.name) {
            Some(existing) => *existing = stage,
            None => self.plugins.push(stage),
        }
    }

    pub fn stage(&self, name: &str) -> Option<&PipelineStage> {
        self.plugins.iter().find(|s| s.name == name)
    }

    pub fn has_stage(&self, name: &str) -> bool {
        self.stage(name).is_some()
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|s| s.name.as_str()).collect()
    }

    /// Registers a rule, replacing any rule already registered under the same name.
    pub fn add_rule(&mut self, rule: TransformRule) {
        match self.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn rule(&self, name: &str) -> Option<&TransformRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }
}

/// A named entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub import: PathBuf,
}

/// Where and how emitted files are written.
///
/// All fields stay `None` for in-memory dev serving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Output {
    pub path: Option<PathBuf>,
    pub public_path: Option<String>,
    pub filename: Option<String>,
    pub chunk_filename: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolve {
    /// Tried in order; themed variants come first
    pub extensions: Vec<String>,
    /// Module search directories, in order
    pub modules: Vec<PathBuf>,
    /// Symbolic import name to path or bare package request
    pub alias: IndexMap<String, PathBuf>,
    pub symlinks: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Optimization {
    pub split_chunks: Option<SplitChunks>,
    /// `None` leaves the engine default; `Some(vec![])` disables minification
    pub minimizer: Option<Vec<Minimizer>>,
    /// Extract the module runtime into one shared chunk
    pub runtime_isolation: bool,
    pub module_id_stability: bool,
    pub concatenate_modules: bool,
    /// When false, a failed compilation emits nothing and the last good bundle stays live
    pub emit_on_errors: bool,
}

impl Default for Optimization {
    fn default() -> Self {
        Self {
            split_chunks: None,
            minimizer: None,
            runtime_isolation: false,
            module_id_stability: false,
            concatenate_modules: false,
            emit_on_errors: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Performance {
    pub hints: bool,
    pub max_asset_size: Option<u64>,
}
