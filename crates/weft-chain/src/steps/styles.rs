//! One style rule per stylesheet language.

use weft_config::Pattern;

use crate::assemble::Assembly;
use crate::graph::BuildGraph;
use crate::rule::{CssOptions, LoaderOptions, PreprocessOptions, TransformRule};

/// Loader handing style modules over to the extraction stage.
pub(crate) const EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

struct StyleLang {
    rule: &'static str,
    test: &'static str,
    /// Preprocessor loader and whether it reads indentation-based syntax
    preprocessor: Option<(&'static str, bool)>,
}

const LANGS: [StyleLang; 5] = [
    StyleLang {
        rule: "css",
        test: r"\.css$",
        preprocessor: None,
    },
    StyleLang {
        rule: "stylus",
        test: r"\.styl(us)?$",
        preprocessor: Some(("stylus-loader", false)),
    },
    StyleLang {
        rule: "scss",
        test: r"\.scss$",
        preprocessor: Some(("sass-loader", false)),
    },
    StyleLang {
        rule: "sass",
        test: r"\.sass$",
        preprocessor: Some(("sass-loader", true)),
    },
    StyleLang {
        rule: "less",
        test: r"\.less$",
        preprocessor: Some(("less-loader", false)),
    },
];

/// One rule per style language: inject or extract, then css, postcss and the
/// language's preprocessor.
pub(super) fn style_rules(mut graph: BuildGraph, asm: &Assembly<'_>) -> BuildGraph {
    let ctx = asm.ctx;
    let source_map = ctx.build.source_map;
    let extract = ctx.extract_css();
    // Extracted styles are minified by the optimize stage instead.
    let minimize = ctx.minify() && !extract;

    for lang in &LANGS {
        let mut rule = TransformRule::new(lang.rule, Pattern::literal(lang.test));

        rule = if extract {
            rule.using(EXTRACT_LOADER, LoaderOptions::StyleExtract)
        } else {
            rule.using("vue-style-loader", LoaderOptions::StyleInject { source_map })
        };

        rule = rule
            .using(
                "css-loader",
                LoaderOptions::Css(CssOptions {
                    import_loaders: if lang.preprocessor.is_some() { 2 } else { 1 },
                    source_map,
                    minimize,
                }),
            )
            .using(
                "postcss-loader",
                LoaderOptions::Postcss {
                    source_map,
                    rtl: ctx.build.rtl,
                },
            );

        if let Some((loader, indented_syntax)) = lang.preprocessor {
            rule = rule.using(
                loader,
                LoaderOptions::Preprocess(PreprocessOptions {
                    source_map,
                    indented_syntax,
                }),
            );
        }

        graph.add_rule(rule);
    }
    graph
}
