//! # probe-types
//!
//! Shared domain types for the embedding-probes harness.
//!
//! - Results: per-model scores, winner marks and the per-run result table
//! - Settings: layered configuration (models, embedding endpoint, log level)

pub mod config;
pub mod error;
pub mod result;

pub use crate::config::{Settings, DEFAULT_CONFIG_FILE, DEFAULT_EMBEDDING_ENDPOINT};
pub use error::SettingsError;
pub use result::{
    EvaluationResult, MetricDirection, ModelEntry, ModelResults, ProbeRow, ResultTable,
};
