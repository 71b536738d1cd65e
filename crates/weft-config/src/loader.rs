//! Layered loading of `weft.toml`.
//!
//! Priority: overrides > environment variables > config file > defaults

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use serde::Serialize;
use tracing::debug;
use weft_paths::MARKER_FILE;

use crate::context::WeftConfig;
use crate::options::EnvMap;
use crate::error::{ConfigError, Result};

/// Prefix for environment overrides; nested keys are separated by `__`.
///
/// `WEFT_BUILD__MINIFY=false` sets `build.minify`.
pub const ENV_PREFIX: &str = "WEFT_";

/// Prefix for entries of the `[env]` table.
///
/// Names keep their case and values stay strings: `WEFT_ENV__API_URL=42`
/// defines `process.env.API_URL` as `"42"`.
pub const ENV_TABLE_PREFIX: &str = "WEFT_ENV__";

/// Builds a [`WeftConfig`] from defaults, a config file, the environment and
/// caller-supplied overrides, merged in that order.
///
/// # Example
///
/// ```no_run
/// use weft_config::ConfigLoader;
///
/// let config = ConfigLoader::for_project("/path/to/app")?
///     .with_env()
///     .load()?;
/// # Ok::<(), weft_config::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Loader holding only the built-in defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::from(Serialized::defaults(WeftConfig::default())),
        }
    }

    /// Loader for the marker file of a project root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the root has no marker file.
    pub fn for_project(root: impl AsRef<Path>) -> Result<Self> {
        let path = root.as_ref().join(MARKER_FILE);
        if !path.is_file() {
            return Err(ConfigError::NotFound(path));
        }
        Ok(Self::new().with_file(path))
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!(path = %path.display(), "merging config file");
        self.figment = self.figment.merge(Toml::file(path));
        self
    }

    /// Merges an inline TOML document.
    pub fn with_toml_str(mut self, source: &str) -> Self {
        self.figment = self.figment.merge(Toml::string(source));
        self
    }

    pub fn with_env(mut self) -> Self {
        let sections = Env::prefixed(ENV_PREFIX)
            .split("__")
            .filter(|key| !key.as_str().to_ascii_lowercase().starts_with("env."));
        let table: EnvMap = Env::prefixed(ENV_TABLE_PREFIX)
            .lowercase(false)
            .iter()
            .map(|(key, value)| (key.as_str().to_string(), value))
            .collect();

        self.figment = self
            .figment
            .merge(sections)
            .merge(Serialized::default("env", table));
        self
    }

    /// Merges any serializable value on top of what is loaded so far.
    pub fn with_overrides<T: Serialize>(mut self, overrides: T) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(overrides));
        self
    }

    pub fn load(self) -> Result<WeftConfig> {
        let config: WeftConfig = self.figment.extract()?;
        debug!(theme = %config.theme, "configuration loaded");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_only() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, WeftConfig::default());
    }

    #[test]
    fn overrides_win_over_file_contents() {
        let config = ConfigLoader::new()
            .with_toml_str("theme = \"ios\"\n[build]\nminify = false\n")
            .with_overrides(json!({ "theme": "mat" }))
            .load()
            .unwrap();

        assert_eq!(config.theme, "mat");
        assert!(!config.build.minify);
    }
}
