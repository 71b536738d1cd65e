//! File transformation rules and their transformer chains.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::path::PathBuf;
use weft_config::Pattern;

/// Any path inside a package store directory.
pub(crate) static STORE_SEGMENT: Lazy<Pattern> =
    Lazy::new(|| Pattern::literal(r"[\\/]node_modules[\\/]"));

/// Script blocks extracted from single-file components.
static COMPONENT_SCRIPT: Lazy<Pattern> = Lazy::new(|| Pattern::literal(r"\.vue\.jsx?$"));

/// A (match, exclude, transformer chain) triple evaluated by the engine
/// against every file it touches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRule {
    /// Unique rule name
    pub name: String,
    pub test: Pattern,
    pub exclude: Option<StoreExclusion>,
    /// Applied last to first by the engine, listed in registration order
    #[serde(rename = "use")]
    pub uses: Vec<Loader>,
}

impl TransformRule {
    pub fn new(name: impl Into<String>, test: Pattern) -> Self {
        Self {
            name: name.into(),
            test,
            exclude: None,
            uses: Vec::new(),
        }
    }

    pub fn exclude(mut self, exclusion: StoreExclusion) -> Self {
        self.exclude = Some(exclusion);
        self
    }

    pub fn using(mut self, loader: impl Into<String>, options: LoaderOptions) -> Self {
        self.uses.push(Loader {
            loader: loader.into(),
            options,
        });
        self
    }

    /// Whether the engine would apply this rule to `path`.
    pub fn applies_to(&self, path: &str) -> bool {
        self.test.is_match(path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclusion| exclusion.excludes(path))
    }

    pub fn loader_names(&self) -> Vec<&str> {
        self.uses.iter().map(|l| l.loader.as_str()).collect()
    }
}

/// Keeps package-store files out of a rule, with two escape hatches.
///
/// A path is let through when it is a component's embedded script or when
/// it matches any allow-list pattern. Both checks run before the store check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreExclusion {
    pub allow: Vec<Pattern>,
}

impl StoreExclusion {
    pub fn new(allow: Vec<Pattern>) -> Self {
        Self { allow }
    }

    pub fn excludes(&self, path: &str) -> bool {
        if COMPONENT_SCRIPT.is_match(path) {
            return false;
        }
        if self.allow.iter().any(|p| p.is_match(path)) {
            return false;
        }
        STORE_SEGMENT.is_match(path)
    }
}

/// One transformer in a rule's chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loader {
    pub loader: String,
    pub options: LoaderOptions,
}

/// Per-transformer parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LoaderOptions {
    Component(ComponentOptions),
    Transpile(TranspileOptions),
    Inline(InlineOptions),
    /// Runtime style injection
    StyleInject { source_map: bool },
    /// Hand styles over to the extraction stage
    StyleExtract,
    Css(CssOptions),
    Postcss { source_map: bool, rtl: bool },
    Preprocess(PreprocessOptions),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentOptions {
    pub production_mode: bool,
    pub preserve_whitespace: bool,
    /// Element name to the attribute holding an asset URL
    pub transform_asset_urls: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranspileOptions {
    /// Project transpiler config this chain extends
    pub extends: PathBuf,
    pub plugins: Vec<TranspilePlugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TranspilePlugin {
    /// Rewrites `import { X } from '<package>'` into per-component imports
    TransformImports {
        package: String,
        transform: String,
        prevent_full_import: bool,
    },
}

/// Inline small files as data URLs, copy the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineOptions {
    /// Byte size below which files are inlined
    pub limit: u64,
    /// Name template for copied files
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssOptions {
    pub import_loaders: u8,
    pub source_map: bool,
    pub minimize: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreprocessOptions {
    pub source_map: bool,
    /// Indentation-based syntax (`.sass`)
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub indented_syntax: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_files_are_excluded() {
        let exclusion = StoreExclusion::default();
        assert!(exclusion.excludes("/app/node_modules/lodash/index.js"));
        assert!(exclusion.excludes(r"C:\app\node_modules\lodash\index.js"));
        assert!(!exclusion.excludes("/app/src/main.js"));
    }

    #[test]
    fn component_scripts_are_always_transpiled() {
        let exclusion = StoreExclusion::default();
        assert!(!exclusion.excludes("/app/node_modules/widget/Button.vue.js"));
        assert!(!exclusion.excludes("/app/node_modules/widget/Button.vue.jsx"));
    }

    #[test]
    fn allow_list_overrides_store_exclusion() {
        let exclusion = StoreExclusion::new(vec![Pattern::new("[\\\\/]my-lib[\\\\/]").unwrap()]);
        assert!(!exclusion.excludes("/app/node_modules/my-lib/index.js"));
        assert!(exclusion.excludes("/app/node_modules/other-lib/index.js"));
    }

    #[test]
    fn applies_to_combines_test_and_exclusion() {
        let rule = TransformRule::new("scripts", Pattern::literal(r"\.jsx?$"))
            .exclude(StoreExclusion::default());
        assert!(rule.applies_to("/app/src/a.js"));
        assert!(!rule.applies_to("/app/src/a.ts"));
        assert!(!rule.applies_to("/app/node_modules/x/a.js"));
    }
}
