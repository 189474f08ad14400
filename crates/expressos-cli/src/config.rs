//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, e.g. `EXPRESSOS_DEFAULTS__AUTHOR`
//! 3. Config file (`--config`, or the per-user default path)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use expressos_core::domain::{DEFAULT_AUTHOR, DEFAULT_DESCRIPTION};

const ENV_PREFIX: &str = "EXPRESSOS";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used by `create` when the matching flag is absent.
    pub defaults: Defaults,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: String,
    pub description: String,
    pub typescript: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.into(),
            description: DEFAULT_DESCRIPTION.into(),
            typescript: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Layer defaults, the config file and the environment.
    ///
    /// An explicit `--config` path must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.expressos.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "expressos", "expressos")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".expressos.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use super::*;

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_match_core_constants() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.author, DEFAULT_AUTHOR);
        assert_eq!(cfg.defaults.description, DEFAULT_DESCRIPTION);
        assert!(!cfg.defaults.typescript);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&tmp.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg.defaults.author, DEFAULT_AUTHOR);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&tmp.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_overrides_only_the_keys_it_sets() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[defaults]\nauthor = \"Jane Doe\"\ntypescript = true\n").unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.defaults.author, "Jane Doe");
        assert!(cfg.defaults.typescript);
        assert_eq!(cfg.defaults.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn environment_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[defaults]\nauthor = \"Jane Doe\"\n").unwrap();

        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([(
            "EXPRESSOS_DEFAULTS__AUTHOR".to_string(),
            "Env Author".to_string(),
        )])));
        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.defaults.author, "Env Author");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
