//! # probe-orchestrator
//!
//! Runs every registered probe against the configured models and assembles
//! the [`ResultTable`].
//!
//! Probes run one after another in registration order. The first probe
//! failure aborts the run: no partial table is returned and the remaining
//! probes are not attempted.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{error, info};

use probe_embeddings::EmbeddingClient;
use probe_suite::{ProbeError, ProbeRegistry};
use probe_types::{ProbeRow, ResultTable};

/// Errors that abort an orchestration run.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// A probe failed; `ordinal` is its 1-based position in the registry
    #[error("Probe {ordinal} ({probe}) failed: {source}")]
    ProbeFailed {
        ordinal: usize,
        probe: String,
        #[source]
        source: ProbeError,
    },
}

/// Sequential, fail-fast probe runner.
pub struct Orchestrator {
    client: Arc<dyn EmbeddingClient>,
}

impl Orchestrator {
    pub fn new(client: Arc<dyn EmbeddingClient>) -> Self {
        Self { client }
    }

    /// Run every probe in `registry` over `models`.
    ///
    /// Rows are keyed by the probe's 1-based registration ordinal.
    pub async fn run(
        &self,
        registry: &ProbeRegistry,
        models: &[String],
    ) -> Result<ResultTable, OrchestratorError> {
        let run_start = Instant::now();
        let mut table = ResultTable::new();
        info!(
            probes = registry.len(),
            models = models.len(),
            "Starting probe run"
        );

        for (index, probe) in registry.iter().enumerate() {
            let ordinal = index + 1;
            let probe_start = Instant::now();
            info!(ordinal, probe = probe.name(), "Probe started");

            let results = match probe.evaluate(self.client.as_ref(), models).await {
                Ok(results) => results,
                Err(source) => {
                    error!(
                        ordinal,
                        probe = probe.name(),
                        error = %source,
                        "Probe failed, aborting run"
                    );
                    return Err(OrchestratorError::ProbeFailed {
                        ordinal,
                        probe: probe.name().to_string(),
                        source,
                    });
                }
            };

            info!(
                ordinal,
                probe = probe.name(),
                winner = results.winner().unwrap_or("none"),
                duration_ms = probe_start.elapsed().as_millis() as u64,
                "Probe completed"
            );

            table.insert(
                ordinal,
                ProbeRow {
                    name: probe.name().to_string(),
                    metric_label: probe.metric_label().to_string(),
                    direction: probe.direction(),
                    results,
                },
            );
        }

        info!(
            probes = table.len(),
            duration_ms = run_start.elapsed().as_millis() as u64,
            "Probe run complete"
        );
        Ok(table)
    }
}
