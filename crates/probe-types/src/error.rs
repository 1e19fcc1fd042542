//! Error types shared across the probe workspace.

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Config source could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Settings loaded but unusable for a run
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
