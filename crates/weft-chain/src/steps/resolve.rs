//! Module resolution: extensions, search directories and aliases.

use std::path::PathBuf;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use weft_config::Pattern;

use crate::assemble::Assembly;
use crate::graph::{BuildGraph, Resolve};

/// Prebuilt runtime libraries the engine does not need to parse.
static PREBUILT_RUNTIME: Lazy<Pattern> =
    Lazy::new(|| Pattern::literal("^(vue|vue-router|vuex|vuex-router-sync)$"));

pub(super) fn resolve(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let theme = &asm.ctx.theme;

    graph.resolve = Resolve {
        extensions: vec![format!(".{theme}.js"), ".js".to_string(), ".vue".to_string()],
        modules: asm.search_dirs(),
        alias: aliases(asm),
        symlinks: false,
    };
    graph.resolve_loader = asm.search_dirs();
    graph.no_parse = Some(PREBUILT_RUNTIME.clone());
    graph
}

fn aliases(asm: &Assembly<'_>) -> IndexMap<String, PathBuf> {
    let layout = asm.layout;
    let theme = &asm.ctx.theme;
    let framework = &asm.ctx.framework;
    let package = &framework.package;

    // Without the full bundle the bare package name is left for the
    // import transform to rewrite per component.
    let framework_root = if framework.all {
        layout.store(format!("{package}/dist/quasar.{theme}.esm.js"))
    } else {
        PathBuf::from(package)
    };

    let addon_styl = if framework.css_addon {
        PathBuf::from(format!("{package}/src/css/flex-addon.styl"))
    } else {
        layout.app(".weft/empty.styl")
    };

    let mut alias = IndexMap::new();
    alias.insert("quasar".to_string(), framework_root);
    alias.insert("src".to_string(), layout.src_dir.clone());
    alias.insert("app".to_string(), layout.root.clone());
    for dir in ["components", "layouts", "pages", "assets", "plugins"] {
        alias.insert(dir.to_string(), layout.src(dir));
    }
    alias.insert("variables".to_string(), layout.app(".weft/variables.styl"));
    alias.insert("quasar-app-styl".to_string(), layout.app(".weft/app.styl"));
    alias.insert(
        "quasar-app-variables".to_string(),
        layout.src(format!("css/themes/variables.{theme}.styl")),
    );
    alias.insert(
        "quasar-styl".to_string(),
        PathBuf::from(format!("{package}/dist/quasar.{theme}.styl")),
    );
    alias.insert("quasar-addon-styl".to_string(), addon_styl);

    if asm.ctx.build.vue_compiler {
        alias.insert("vue$".to_string(), PathBuf::from("vue/dist/vue.esm.js"));
    }
    alias
}
