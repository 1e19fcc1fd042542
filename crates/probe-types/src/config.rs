//! Configuration loading for embedding-probes.
//!
//! Layered config: defaults -> user config file -> explicit config file ->
//! env vars (PROBES_*) -> CLI flags (applied by the caller).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Default Ollama-compatible embeddings endpoint.
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "http://localhost:11434/api/embeddings";

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Ordered list of model identifiers to evaluate
    #[serde(default)]
    pub models: Vec<String>,

    /// URL the embedding requests are POSTed to
    #[serde(default = "default_embedding_endpoint")]
    pub embedding_endpoint: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_embedding_endpoint() -> String {
    DEFAULT_EMBEDDING_ENDPOINT.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            models: Vec::new(),
            embedding_endpoint: default_embedding_endpoint(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. User config file (e.g. ~/.config/embedding-probes/config.json)
    /// 3. `config_path` if given, otherwise `./config.json` when it exists
    /// 4. Environment variables (PROBES_MODELS, PROBES_EMBEDDING_ENDPOINT, PROBES_LOG_LEVEL)
    pub fn load(config_path: Option<&Path>) -> Result<Self, SettingsError> {
        Self::load_layered(config_path, Path::new(DEFAULT_CONFIG_FILE))
    }

    /// `fallback` is read, if present, only when no `config_path` is given.
    fn load_layered(config_path: Option<&Path>, fallback: &Path) -> Result<Self, SettingsError> {
        let user_config = ProjectDirs::from("", "", "embedding-probes")
            .map(|p| p.config_dir().join("config"))
            .unwrap_or_else(|| PathBuf::from("embedding-probes"));

        let project_config = match config_path {
            Some(path) => File::from(path).required(true),
            None => File::from(fallback).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("embedding_endpoint", default_embedding_endpoint())?
            .set_default("log_level", default_log_level())?
            .add_source(File::with_name(&user_config.to_string_lossy()).required(false))
            .add_source(project_config)
            .add_source(
                Environment::with_prefix("PROBES")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("models"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Validate settings needed to start a run.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.models.is_empty() {
            return Err(SettingsError::Invalid("at least one model must be configured".to_string()));
        }
        if self.embedding_endpoint.trim().is_empty() {
            return Err(SettingsError::Invalid("embedding_endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}
