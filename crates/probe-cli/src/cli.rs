//! CLI argument parsing for embedding-probes.
//!
//! CLI flags override every other config source.

use clap::{Parser, Subcommand, ValueEnum};

/// Embedding Probes
///
/// Compares embedding models on a fixed battery of semantic probes.
#[derive(Parser, Debug)]
#[command(name = "embedding-probes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (default: ./config.json when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Override the embeddings endpoint URL
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Override the models to compare (comma-separated, in report order)
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub models: Option<Vec<String>>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The requested command, `run` with text output when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Run {
            format: OutputFormat::Text,
            dry_run: false,
        })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run every probe against the configured models (default)
    Run {
        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Use deterministic local vectors instead of the embeddings service
        #[arg(long)]
        dry_run: bool,
    },

    /// List the registered probes in run order
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
