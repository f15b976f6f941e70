//! Configuration file and environment resolution.
//!
//! Precedence for each setting: command-line flag, then environment
//! variable, then `finclusion.toml`, then the built-in default.
//!
//! The config file itself is found via `--config`, then
//! `FINCLUSION_CONFIG`, then `finclusion.toml` in the working directory.
//! An explicitly named config must exist; the implicit one is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "FINCLUSION_CONFIG";
/// Environment variable overriding the model artifact path.
pub const MODEL_ENV_VAR: &str = "FINCLUSION_MODEL";
/// Environment variable overriding the expected artifact digest.
pub const MODEL_SHA256_ENV_VAR: &str = "FINCLUSION_MODEL_SHA256";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "finclusion.toml";
/// Model artifact used when nothing else is configured.
pub const DEFAULT_MODEL_PATH: &str = "financialinclusionmodel.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `finclusion.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Model artifact path. Relative paths resolve against the config file's directory.
    pub model_path: Option<PathBuf>,
    /// Expected SHA-256 of the model artifact.
    pub model_sha256: Option<String>,
}

impl AppConfig {
    /// Parses a config file, resolving relative paths against its directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(model_path), Some(base)) = (&config.model_path, path.parent())
            && model_path.is_relative()
        {
            config.model_path = Some(base.join(model_path));
        }
        Ok(config)
    }

    /// Loads the config using the process environment and working directory.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(explicit, |key| std::env::var(key).ok(), Path::new("."))
    }

    /// Loads the config with an injected environment lookup and working directory.
    pub fn load_with<F>(explicit: Option<&Path>, env: F, cwd: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        if let Some(path) = env(CONFIG_ENV_VAR) {
            info!(path = %path, source = CONFIG_ENV_VAR, "loading config");
            return Self::from_file(Path::new(&path));
        }
        let implicit = cwd.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            info!(path = %implicit.display(), "loading config");
            return Self::from_file(&implicit);
        }
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }
}

/// Where to load the model artifact from, and how to verify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    pub path: PathBuf,
    pub sha256: Option<String>,
}

impl ModelSource {
    /// Resolves the model source using the process environment.
    pub fn resolve(
        cli_path: Option<&Path>,
        cli_sha256: Option<&str>,
        config: &AppConfig,
    ) -> Self {
        Self::resolve_with(cli_path, cli_sha256, config, |key| std::env::var(key).ok())
    }

    /// Resolves the model source with an injected environment lookup.
    pub fn resolve_with<F>(
        cli_path: Option<&Path>,
        cli_sha256: Option<&str>,
        config: &AppConfig,
        env: F,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = cli_path
            .map(Path::to_path_buf)
            .or_else(|| env(MODEL_ENV_VAR).map(PathBuf::from))
            .or_else(|| config.model_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));
        let sha256 = cli_sha256
            .map(str::to_string)
            .or_else(|| env(MODEL_SHA256_ENV_VAR))
            .or_else(|| config.model_sha256.clone());
        Self { path, sha256 }
    }
}
