//! Command implementations.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use probe_embeddings::{EmbeddingClient, HashEmbeddingClient, OllamaClient};
use probe_orchestrator::Orchestrator;
use probe_suite::ProbeRegistry;
use probe_types::Settings;

use crate::cli::OutputFormat;
use crate::report::{render_json, render_text};

/// CLI flags that take precedence over every config source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_level: Option<String>,
    pub endpoint: Option<String>,
    pub models: Option<Vec<String>>,
}

/// Load layered settings and apply CLI overrides on top.
pub fn load_settings(config_path: Option<&str>, overrides: &Overrides) -> Result<Settings> {
    let mut settings =
        Settings::load(config_path.map(Path::new)).context("Failed to load configuration")?;

    if let Some(log_level) = &overrides.log_level {
        settings.log_level = log_level.clone();
    }
    if let Some(endpoint) = &overrides.endpoint {
        settings.embedding_endpoint = endpoint.clone();
    }
    if let Some(models) = &overrides.models {
        settings.models = models.clone();
    }

    Ok(settings)
}

/// Install the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Run the standard battery with `client` and render the report.
pub async fn execute_run(
    settings: &Settings,
    client: Arc<dyn EmbeddingClient>,
    format: OutputFormat,
) -> Result<String> {
    settings.validate().context("Invalid configuration")?;

    let registry = ProbeRegistry::standard();
    let table = Orchestrator::new(client)
        .run(&registry, &settings.models)
        .await
        .context("Probe run failed")?;

    match format {
        OutputFormat::Text => Ok(render_text(&table, &settings.models)),
        OutputFormat::Json => {
            render_json(&table, &settings.models).context("Failed to serialize report")
        }
    }
}

/// Embedding client for a run.
///
/// A dry run uses local hash vectors and never contacts the endpoint.
pub fn build_client(settings: &Settings, dry_run: bool) -> Result<Arc<dyn EmbeddingClient>> {
    if dry_run {
        info!("Dry run, using local hash embeddings");
        return Ok(Arc::new(HashEmbeddingClient::default()));
    }
    let client = OllamaClient::new(&settings.embedding_endpoint)
        .context("Failed to create embedding client")?;
    Ok(Arc::new(client))
}

/// `run`: evaluate every probe and print the report to stdout.
pub async fn run_probes(
    config_path: Option<&str>,
    overrides: &Overrides,
    format: OutputFormat,
    dry_run: bool,
) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    init_logging(&settings.log_level)?;

    info!(
        models = ?settings.models,
        endpoint = %settings.embedding_endpoint,
        "Embedding probes starting"
    );

    let client = build_client(&settings, dry_run)?;
    let report = execute_run(&settings, client, format).await?;
    print!("{report}");
    Ok(())
}

/// Registered probes as `Task N: name (metric)` lines.
pub fn describe_probes(registry: &ProbeRegistry) -> String {
    let mut out = format!("Registered tasks: {}\n", registry.len());
    for (i, probe) in registry.iter().enumerate() {
        out.push_str(&format!(
            "Task {}: {} ({})\n",
            i + 1,
            probe.name(),
            probe.metric_label()
        ));
    }
    out
}

/// `list`: print the standard battery in run order.
pub fn list_probes() -> Result<()> {
    print!("{}", describe_probes(&ProbeRegistry::standard()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe_embeddings::StaticEmbeddingClient;
    use std::io::Write;

    fn settings(models: &[&str]) -> Settings {
        Settings {
            models: models.iter().map(|m| m.to_string()).collect(),
            ..Settings::default()
        }
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".json").unwrap();
        file.write_all(br#"{"models": ["a", "b"], "log_level": "warn"}"#).unwrap();

        let overrides = Overrides {
            log_level: Some("debug".to_string()),
            endpoint: Some("http://127.0.0.1:9/api/embeddings".to_string()),
            models: None,
        };
        let settings = load_settings(file.path().to_str(), &overrides).unwrap();

        assert_eq!(settings.models, vec!["a", "b"]);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(
            settings.embedding_endpoint,
            "http://127.0.0.1:9/api/embeddings"
        );
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let result = load_settings(
            Some("/nonexistent/embedding-probes.json"),
            &Overrides::default(),
        );
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_dry_run_ignores_endpoint() {
        let mut settings = settings(&["alpha", "beta"]);
        settings.embedding_endpoint = "not a url".to_string();

        let client = build_client(&settings, true).unwrap();
        let report = execute_run(&settings, client, OutputFormat::Text)
            .await
            .unwrap();
        assert!(report.contains("alpha wins: "));
    }

    #[test]
    fn test_build_client_rejects_bad_endpoint() {
        let mut settings = settings(&["alpha"]);
        settings.embedding_endpoint = "not a url".to_string();

        let err = build_client(&settings, false).err().unwrap();
        assert!(format!("{err:#}").contains("Failed to create embedding client"));
    }

    #[tokio::test]
    async fn test_execute_run_text_report() {
        let client = Arc::new(HashEmbeddingClient::new(32));
        let report = execute_run(&settings(&["alpha", "beta"]), client, OutputFormat::Text)
            .await
            .unwrap();

        assert!(report.starts_with("Final Results Table:\n"));
        assert!(report.contains("| Analogy Task "));
        assert!(report.contains("| Spanish Cross-Language Metric Evidence Task "));
        assert!(report.contains("alpha wins: "));
        assert!(report.contains("beta wins: "));
    }

    #[tokio::test]
    async fn test_execute_run_json_report() {
        let client = Arc::new(HashEmbeddingClient::new(32));
        let report = execute_run(&settings(&["alpha"]), client, OutputFormat::Json)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["results"]["rows"].as_object().unwrap().len(), 8);
        assert_eq!(value["tallies"][0]["model"], "alpha");
    }

    #[tokio::test]
    async fn test_execute_run_requires_models() {
        let client = Arc::new(HashEmbeddingClient::new(32));
        let err = execute_run(&settings(&[]), client, OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[tokio::test]
    async fn test_execute_run_failure_yields_no_report() {
        let client = Arc::new(StaticEmbeddingClient::new());
        let err = execute_run(&settings(&["m"]), client, OutputFormat::Text)
            .await
            .unwrap_err();

        let chain = format!("{err:#}");
        assert!(chain.contains("Probe run failed"));
        assert!(chain.contains("Probe 1 (Analogy Task) failed"));
    }

    #[test]
    fn test_describe_probes() {
        let listing = describe_probes(&ProbeRegistry::standard());
        assert!(listing.starts_with("Registered tasks: 8\n"));
        assert!(listing.contains("Task 1: Analogy Task (Euclidean Distance)\n"));
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines[6],
            "Task 6: Semantic Metric Evidence Task (Weighted Similarity)"
        );
    }
}
