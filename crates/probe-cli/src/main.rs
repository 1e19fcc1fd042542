//! Embedding Probes
//!
//! Compares embedding models on a battery of semantic probes and reports
//! which model wins each one.
//!
//! # Usage
//!
//! ```bash
//! embedding-probes [run] [--format text|json] [--dry-run]
//! embedding-probes list
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. User config file (~/.config/embedding-probes/config.json)
//! 3. `--config` file, or ./config.json when present
//! 4. Environment variables (PROBES_*)
//! 5. CLI flags

use anyhow::Result;
use clap::Parser;

use probe_cli::{list_probes, run_probes, Cli, Commands, Overrides};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = Overrides {
        log_level: cli.log_level.clone(),
        endpoint: cli.endpoint.clone(),
        models: cli.models.clone(),
    };

    match cli.command() {
        Commands::Run { format, dry_run } => {
            run_probes(cli.config.as_deref(), &overrides, format, dry_run).await?;
        }
        Commands::List => {
            list_probes()?;
        }
    }

    Ok(())
}
