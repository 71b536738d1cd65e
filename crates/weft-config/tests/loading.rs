//! Tests for loading weft.toml into a build context.

use std::fs;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;
use weft_config::{
    AnalyzerMode, BuildContext, ConfigError, ConfigLoader, Mode, Switch, Target, WeftConfig,
};

fn write_config(content: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("weft.toml"), content).unwrap();
    dir
}

#[test]
fn missing_marker_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = ConfigLoader::for_project(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(path) if path.ends_with("weft.toml")));
}

#[test]
fn empty_file_yields_defaults() {
    let dir = write_config("");
    let config = ConfigLoader::for_project(dir.path()).unwrap().load().unwrap();
    assert_eq!(config, WeftConfig::default());
    assert_eq!(config.theme, "mat");
    assert_eq!(config.build.public_path, "/");
    assert!(config.build.minify);
    assert!(config.build.extract_css);
    assert!(!config.build.gzip.is_enabled());
}

#[test]
fn loads_all_sections() {
    let dir = write_config(
        r#"
theme = "ios"

[build]
minify = false
public_path = "/app/"
dist_dir = "out"
transpile_dependencies = ["[\\/]node_modules[\\/]my-lib[\\/]"]
gzip = true
analyze = { analyzer_mode = "static", open_analyzer = false }
app_url = "http://localhost:8080"

[framework]
all = true
css_addon = true

[vendor]
add = "[\\/]lodash-es[\\/]"
remove = "[\\/]moment[\\/]"

[env]
API_URL = "https://api.example.com"
FEATURE = "on"
"#,
    );

    let config = ConfigLoader::for_project(dir.path()).unwrap().load().unwrap();

    assert_eq!(config.theme, "ios");
    assert!(!config.build.minify);
    assert_eq!(config.build.public_path, "/app/");
    assert_eq!(config.build.dist_dir, Some(PathBuf::from("out")));
    assert_eq!(config.build.transpile_dependencies.len(), 1);
    assert!(config.build.transpile_dependencies[0].is_match("/x/node_modules/my-lib/a.js"));
    assert!(config.build.gzip.options().is_some());

    let analyze = config.build.analyze.options().unwrap();
    assert_eq!(analyze.analyzer_mode, AnalyzerMode::Static);
    assert!(!analyze.open_analyzer);

    assert!(config.framework.all);
    assert!(config.framework.css_addon);
    assert!(config.vendor.add.unwrap().is_match("/node_modules/lodash-es/x.js"));
    assert!(config.vendor.remove.is_some());

    let keys: Vec<_> = config.env.keys().cloned().collect();
    assert_eq!(keys, vec!["API_URL", "FEATURE"]);
}

#[test]
fn invalid_vendor_pattern_fails_to_load() {
    let dir = write_config("[vendor]\nadd = \"(unclosed\"\n");
    let result = ConfigLoader::for_project(dir.path()).unwrap().load();
    assert!(matches!(result, Err(ConfigError::Extract(_))));
}

#[test]
fn wrong_type_fails_to_load() {
    let dir = write_config("[build]\nminify = \"sometimes\"\n");
    let err = ConfigLoader::for_project(dir.path())
        .unwrap()
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("invalid configuration"));
}

#[test]
fn gzip_table_overrides_default_flag() {
    let dir = write_config("[build.gzip]\nthreshold = 2048\n");
    let config = ConfigLoader::for_project(dir.path()).unwrap().load().unwrap();
    match config.build.gzip {
        Switch::Options(options) => {
            assert_eq!(options.threshold, 2048);
            assert_eq!(options.algorithm, "gzip");
        }
        other => panic!("expected options table, got {other:?}"),
    }
}

#[test]
fn into_context_keeps_sections() {
    let dir = write_config("theme = \"ios\"\n[build]\nscope_hoisting = false\n");
    let ctx = ConfigLoader::for_project(dir.path())
        .unwrap()
        .load()
        .unwrap()
        .into_context(Mode::Production, Target::EmbeddedDesktop, true);

    assert_eq!(ctx.theme, "ios");
    assert!(ctx.debug);
    assert!(!ctx.build.scope_hoisting);
    assert!(!ctx.needs_hash());
    assert_eq!(ctx.dist_dir(), PathBuf::from("dist/electron-ios"));
}

#[test]
fn context_new_matches_default_config() {
    let ctx = BuildContext::new(Mode::Development, Target::WebApp);
    assert_eq!(ctx, WeftConfig::default().into_context(Mode::Development, Target::WebApp, false));
}

fn with_vars<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    for (key, value) in vars {
        unsafe { std::env::set_var(key, value) };
    }
    let result = f();
    for (key, _) in vars {
        unsafe { std::env::remove_var(key) };
    }
    result
}

#[test]
#[serial]
fn env_table_keeps_variable_case() {
    let dir = write_config("[env]\nFEATURE = \"on\"\n");
    let config = with_vars(&[("WEFT_ENV__API_URL", "https://staging.example.com")], || {
        ConfigLoader::for_project(dir.path()).unwrap().with_env().load().unwrap()
    });

    assert_eq!(config.env.len(), 2);
    assert_eq!(config.env["FEATURE"], "on");
    assert_eq!(config.env["API_URL"], "https://staging.example.com");
    assert!(!config.env.contains_key("api_url"));
}

#[test]
#[serial]
fn env_table_values_stay_strings() {
    let config = with_vars(
        &[("WEFT_ENV__BUILD_NUMBER", "42"), ("WEFT_ENV__DEBUG_PANEL", "true")],
        || ConfigLoader::new().with_env().load().unwrap(),
    );

    assert_eq!(config.env["BUILD_NUMBER"], "42");
    assert_eq!(config.env["DEBUG_PANEL"], "true");
}

#[test]
#[serial]
fn env_table_overrides_file_entry() {
    let dir = write_config("[env]\nAPI_URL = \"http://localhost\"\n");
    let config = with_vars(&[("WEFT_ENV__API_URL", "https://prod.example.com")], || {
        ConfigLoader::for_project(dir.path()).unwrap().with_env().load().unwrap()
    });

    assert_eq!(config.env.len(), 1);
    assert_eq!(config.env["API_URL"], "https://prod.example.com");
}

#[test]
#[serial]
fn section_variables_are_still_typed() {
    let config = with_vars(
        &[("WEFT_BUILD__MINIFY", "false"), ("WEFT_ENV__MODE_LABEL", "beta")],
        || ConfigLoader::new().with_env().load().unwrap(),
    );

    assert!(!config.build.minify);
    assert_eq!(config.env["MODE_LABEL"], "beta");
}
