//! Transform rules for components, scripts and static assets.

use indexmap::IndexMap;
use weft_config::Pattern;

use crate::assemble::Assembly;
use crate::graph::BuildGraph;
use crate::rule::{
    ComponentOptions, InlineOptions, LoaderOptions, StoreExclusion, TransformRule,
    TranspileOptions, TranspilePlugin,
};

/// Files below this many bytes are inlined as data URLs.
pub(crate) const INLINE_LIMIT: u64 = 10_000;

pub(super) fn component(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let transform_asset_urls: IndexMap<String, String> = [
        ("video", "src"),
        ("source", "src"),
        ("img", "src"),
        ("image", "xlink:href"),
    ]
    .into_iter()
    .map(|(tag, attr)| (tag.to_string(), attr.to_string()))
    .collect();

    graph.add_rule(
        TransformRule::new("vue", Pattern::literal(r"\.vue$")).using(
            "vue-loader",
            LoaderOptions::Component(ComponentOptions {
                production_mode: asm.ctx.mode.is_prod(),
                preserve_whitespace: false,
                transform_asset_urls,
            }),
        ),
    );
    graph
}

pub(super) fn transpile(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let ctx = asm.ctx;
    let plugins = if ctx.framework.all {
        Vec::new()
    } else {
        vec![TranspilePlugin::TransformImports {
            package: "quasar".to_string(),
            transform: format!(
                "{}/dist/babel-transforms/imports.{}.js",
                ctx.framework.package, ctx.theme
            ),
            prevent_full_import: true,
        }]
    };

    graph.add_rule(
        TransformRule::new("babel", Pattern::literal(r"\.jsx?$"))
            .exclude(StoreExclusion::new(ctx.build.transpile_dependencies.clone()))
            .using(
                "babel-loader",
                LoaderOptions::Transpile(TranspileOptions {
                    extends: asm.layout.app(".babelrc"),
                    plugins,
                }),
            ),
    );
    graph
}

/// Image, font and media rules, in that order.
pub(super) fn assets(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let assets = [
        ("images", "img", Pattern::literal(r"\.(png|jpe?g|gif|svg)(\?.*)?$")),
        ("fonts", "fonts", Pattern::literal(r"\.(woff2?|eot|ttf|otf)(\?.*)?$")),
        (
            "media",
            "media",
            Pattern::literal(r"\.(mp4|webm|ogg|mp3|wav|flac|aac)(\?.*)?$"),
        ),
    ];

    for (name, dir, test) in assets {
        graph.add_rule(TransformRule::new(name, test).using(
            "url-loader",
            LoaderOptions::Inline(InlineOptions {
                limit: INLINE_LIMIT,
                name: format!("{dir}/[name]{}.[ext]", asm.file_hash()),
            }),
        ));
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::fixture;
    use std::path::PathBuf;
    use weft_config::{BuildContext, Mode, Target};

    fn run(ctx: &BuildContext) -> BuildGraph {
        let layout = fixture::layout();
        let asm = Assembly::new(ctx, &layout);
        let graph = component(BuildGraph::new(), &asm);
        let graph = transpile(graph, &asm);
        assets(graph, &asm)
    }

    #[test]
    fn rules_are_registered_in_fixed_order() {
        let graph = run(&fixture::ctx(Mode::Development, Target::WebApp));
        assert_eq!(graph.rule_names(), ["vue", "babel", "images", "fonts", "media"]);
    }

    #[test]
    fn component_rule_tracks_mode() {
        let graph = run(&fixture::ctx(Mode::Production, Target::WebApp));
        let LoaderOptions::Component(options) = &graph.rule("vue").unwrap().uses[0].options else {
            panic!("vue rule should use component options");
        };
        assert!(options.production_mode);
        assert_eq!(options.transform_asset_urls["image"], "xlink:href");
    }

    #[test]
    fn transpile_rule_honours_allow_list() {
        let mut ctx = fixture::ctx(Mode::Production, Target::WebApp);
        ctx.build.transpile_dependencies = vec![Pattern::new("my-lib").unwrap()];
        let graph = run(&ctx);
        let babel = graph.rule("babel").unwrap();

        assert!(babel.applies_to("/work/group/app/src/main.js"));
        assert!(babel.applies_to("/work/group/app/node_modules/my-lib/index.js"));
        assert!(babel.applies_to("/work/group/app/node_modules/ui/Card.vue.js"));
        assert!(!babel.applies_to("/work/group/app/node_modules/lodash/index.js"));
    }

    #[test]
    fn import_transform_only_without_full_bundle() {
        let mut ctx = fixture::ctx(Mode::Production, Target::WebApp);
        let graph = run(&ctx);
        let LoaderOptions::Transpile(options) = &graph.rule("babel").unwrap().uses[0].options else {
            panic!("babel rule should use transpile options");
        };
        assert_eq!(options.extends, PathBuf::from("/work/group/app/.babelrc"));
        assert_eq!(
            options.plugins,
            [TranspilePlugin::TransformImports {
                package: "quasar".to_string(),
                transform: "quasar-framework/dist/babel-transforms/imports.mat.js".to_string(),
                prevent_full_import: true,
            }]
        );

        ctx.framework.all = true;
        let graph = run(&ctx);
        let LoaderOptions::Transpile(options) = &graph.rule("babel").unwrap().uses[0].options else {
            panic!("babel rule should use transpile options");
        };
        assert!(options.plugins.is_empty());
    }

    #[test]
    fn asset_names_follow_hashing() {
        let hashed = run(&fixture::ctx(Mode::Production, Target::WebApp));
        let plain = run(&fixture::ctx(Mode::Production, Target::EmbeddedMobile));

        let name = |graph: &BuildGraph, rule: &str| match &graph.rule(rule).unwrap().uses[0].options {
            LoaderOptions::Inline(options) => {
                assert_eq!(options.limit, INLINE_LIMIT);
                options.name.clone()
            }
            other => panic!("unexpected options {other:?}"),
        };

        assert_eq!(name(&hashed, "images"), "img/[name].[hash:8].[ext]");
        assert_eq!(name(&hashed, "fonts"), "fonts/[name].[hash:8].[ext]");
        assert_eq!(name(&plain, "media"), "media/[name].[ext]");
    }
}
