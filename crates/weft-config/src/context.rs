//! The build context: what is being built, and how.
//!
//! `WeftConfig` mirrors the on-disk `weft.toml`. A caller combines it with the
//! mode, target and debug switch chosen for one invocation to obtain an
//! immutable [`BuildContext`], which is everything the assembler reads.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::helpers::default_theme;
use crate::options::{BuildOptions, EnvMap, FrameworkOptions, VendorOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl Mode {
    pub fn is_dev(self) -> bool {
        self == Mode::Development
    }

    pub fn is_prod(self) -> bool {
        self == Mode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(ConfigError::UnknownVariant {
                kind: "mode",
                value: other.to_string(),
                expected: "development, production",
            }),
        }
    }
}

/// Deployment target of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Single-page application served from a web server
    #[default]
    #[serde(alias = "spa")]
    WebApp,
    /// Progressive web app with a service worker
    #[serde(alias = "pwa")]
    InstallableWebApp,
    /// Rendered on the server, hydrated on the client
    #[serde(alias = "ssr")]
    ServerRendered,
    /// Desktop shell loading files from disk
    #[serde(alias = "electron")]
    EmbeddedDesktop,
    /// Mobile shell loading files from disk
    #[serde(alias = "cordova")]
    EmbeddedMobile,
}

impl Target {
    pub const ALL: [Target; 5] = [
        Target::WebApp,
        Target::InstallableWebApp,
        Target::ServerRendered,
        Target::EmbeddedDesktop,
        Target::EmbeddedMobile,
    ];

    /// Short name used in directory names and the injected `MODE` variable.
    pub fn short_name(self) -> &'static str {
        match self {
            Target::WebApp => "spa",
            Target::InstallableWebApp => "pwa",
            Target::ServerRendered => "ssr",
            Target::EmbeddedDesktop => "electron",
            Target::EmbeddedMobile => "cordova",
        }
    }

    /// Embedded shells load files by name and need stable file names.
    pub fn is_embedded(self) -> bool {
        matches!(self, Target::EmbeddedDesktop | Target::EmbeddedMobile)
    }

    pub fn is_server_rendered(self) -> bool {
        self == Target::ServerRendered
    }

    /// Targets whose dev server announces a URL once compilation succeeds.
    pub fn has_dev_banner(self) -> bool {
        matches!(
            self,
            Target::WebApp | Target::InstallableWebApp | Target::ServerRendered
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Target {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web-app" | "spa" => Ok(Target::WebApp),
            "installable-web-app" | "pwa" => Ok(Target::InstallableWebApp),
            "server-rendered" | "ssr" => Ok(Target::ServerRendered),
            "embedded-desktop" | "electron" => Ok(Target::EmbeddedDesktop),
            "embedded-mobile" | "cordova" => Ok(Target::EmbeddedMobile),
            other => Err(ConfigError::UnknownVariant {
                kind: "target",
                value: other.to_string(),
                expected: "web-app, installable-web-app, server-rendered, embedded-desktop, embedded-mobile",
            }),
        }
    }
}

/// Contents of `weft.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeftConfig {
    /// Visual theme variant
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub build: BuildOptions,

    #[serde(default)]
    pub framework: FrameworkOptions,

    #[serde(default)]
    pub vendor: VendorOptions,

    /// Variables injected into the bundle
    #[serde(default)]
    pub env: EnvMap,
}

impl Default for WeftConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            build: BuildOptions::default(),
            framework: FrameworkOptions::default(),
            vendor: VendorOptions::default(),
            env: EnvMap::new(),
        }
    }
}

impl WeftConfig {
    /// Freezes the configuration for one invocation.
    pub fn into_context(self, mode: Mode, target: Target, debug: bool) -> BuildContext {
        BuildContext {
            mode,
            target,
            theme: self.theme,
            debug,
            build: self.build,
            framework: self.framework,
            vendor: self.vendor,
            env: self.env,
        }
    }
}

/// Everything the assembler needs to know about one build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildContext {
    pub mode: Mode,
    pub target: Target,
    pub theme: String,
    /// Keep output readable: the minimizer list is emptied
    pub debug: bool,
    pub build: BuildOptions,
    pub framework: FrameworkOptions,
    pub vendor: VendorOptions,
    pub env: EnvMap,
}

impl BuildContext {
    /// Context with every option at its default.
    pub fn new(mode: Mode, target: Target) -> Self {
        WeftConfig::default().into_context(mode, target, false)
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Whether emitted file names carry a hash fragment.
    pub fn needs_hash(&self) -> bool {
        self.build.hash_assets && self.mode.is_prod() && !self.target.is_embedded()
    }

    /// Script and style minification; only production builds minify.
    pub fn minify(&self) -> bool {
        self.build.minify && self.mode.is_prod()
    }

    /// Style extraction; only production builds register the extraction stage.
    pub fn extract_css(&self) -> bool {
        self.build.extract_css && self.mode.is_prod()
    }

    /// Whether output goes to disk (otherwise the dev server serves from memory).
    pub fn writes_output(&self) -> bool {
        self.mode.is_prod() || self.target.is_server_rendered()
    }

    /// Output directory relative to the project root.
    pub fn dist_dir(&self) -> PathBuf {
        self.build.dist_dir.clone().unwrap_or_else(|| {
            PathBuf::from("dist").join(format!("{}-{}", self.target.short_name(), self.theme))
        })
    }

    /// Name of the configuration as reported by the progress stage.
    pub fn config_name(&self) -> &'static str {
        if self.target.is_server_rendered() {
            "Server"
        } else {
            "Client"
        }
    }

    /// Source map style, or `None` when source maps are off.
    pub fn devtool(&self) -> Option<String> {
        if !self.build.source_map {
            return None;
        }
        Some(self.build.devtool.clone().unwrap_or_else(|| {
            match self.mode {
                Mode::Development => "cheap-module-eval-source-map",
                Mode::Production => "source-map",
            }
            .to_string()
        }))
    }
}
