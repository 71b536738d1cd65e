//! Option tables of `weft.toml`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::helpers::{
    default_compression_algorithm, default_compression_test, default_compression_threshold,
    default_framework_package, default_min_ratio, default_minifier_options, default_public_path,
    default_true,
};
use crate::pattern::Pattern;

/// A feature that is either a plain on/off flag or a table of options.
///
/// ```toml
/// [build]
/// gzip = true                       # default options
/// analyze = { analyzer_mode = "static" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Switch<T> {
    Flag(bool),
    Options(T),
}

impl<T> Default for Switch<T> {
    fn default() -> Self {
        Switch::Flag(false)
    }
}

impl<T: Clone + Default> Switch<T> {
    /// Effective options, or `None` when the feature is off.
    pub fn options(&self) -> Option<T> {
        match self {
            Switch::Flag(true) => Some(T::default()),
            Switch::Flag(false) => None,
            Switch::Options(options) => Some(options.clone()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Switch::Flag(false))
    }
}

/// The `[build]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Emit source maps
    #[serde(default = "default_true")]
    pub source_map: bool,

    /// Source map style override; the mode decides when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default = "default_true")]
    pub minify: bool,

    /// Extract styles into their own files instead of injecting them at runtime
    #[serde(default = "default_true")]
    pub extract_css: bool,

    /// Embed a content hash in emitted file names
    #[serde(default = "default_true")]
    pub hash_assets: bool,

    #[serde(default = "default_true")]
    pub scope_hoisting: bool,

    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Extract the module runtime and manifest into a single shared chunk
    #[serde(default = "default_true")]
    pub runtime_chunk: bool,

    #[serde(default)]
    pub gzip: Switch<CompressionOptions>,

    #[serde(default)]
    pub analyze: Switch<AnalyzerOptions>,

    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Output directory, relative to the project root (`dist/<target>-<theme>` when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<PathBuf>,

    /// Dependencies that must be transpiled even though they live in the package store
    #[serde(default)]
    pub transpile_dependencies: Vec<Pattern>,

    /// Passed verbatim to the script minifier
    #[serde(default = "default_minifier_options")]
    pub minifier_options: Value,

    /// Alias the runtime package to its template-compiler build
    #[serde(default)]
    pub vue_compiler: bool,

    /// Right-to-left style post-processing
    #[serde(default)]
    pub rtl: bool,

    /// URL announced in the development success banner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_url: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source_map: true,
            devtool: None,
            minify: true,
            extract_css: true,
            hash_assets: true,
            scope_hoisting: true,
            show_progress: true,
            runtime_chunk: true,
            gzip: Switch::default(),
            analyze: Switch::default(),
            public_path: default_public_path(),
            dist_dir: None,
            transpile_dependencies: Vec::new(),
            minifier_options: default_minifier_options(),
            vue_compiler: false,
            rtl: false,
            app_url: None,
        }
    }
}

/// Parameters for the pre-compression stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressionOptions {
    #[serde(default = "default_compression_algorithm")]
    pub algorithm: String,

    /// Regex over emitted asset names
    #[serde(default = "default_compression_test")]
    pub test: String,

    /// Only assets larger than this many bytes are compressed
    #[serde(default = "default_compression_threshold")]
    pub threshold: u64,

    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            algorithm: default_compression_algorithm(),
            test: default_compression_test(),
            threshold: default_compression_threshold(),
            min_ratio: default_min_ratio(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    #[default]
    Server,
    Static,
    Disabled,
}

/// Parameters for the bundle-size analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    #[serde(default)]
    pub analyzer_mode: AnalyzerMode,

    #[serde(default = "default_true")]
    pub open_analyzer: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_filename: Option<String>,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            analyzer_mode: AnalyzerMode::Server,
            open_analyzer: true,
            report_filename: None,
        }
    }
}

/// The `[framework]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkOptions {
    /// Import the whole pre-themed framework bundle instead of per-component imports
    #[serde(default)]
    pub all: bool,

    /// Include the flex CSS addon
    #[serde(default)]
    pub css_addon: bool,

    /// Package name of the UI framework
    #[serde(default = "default_framework_package")]
    pub package: String,
}

impl Default for FrameworkOptions {
    fn default() -> Self {
        Self {
            all: false,
            css_addon: false,
            package: default_framework_package(),
        }
    }
}

/// The `[vendor]` table: overrides for the vendor chunk membership test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorOptions {
    /// Modules matching this are always placed in the vendor chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add: Option<Pattern>,

    /// Modules matching this are kept out of the vendor chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove: Option<Pattern>,
}

/// Environment variables injected at build time, in declaration order.
pub type EnvMap = IndexMap<String, String>;
