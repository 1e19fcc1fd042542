//! embedding-probes library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (run, list)
//! - `report`: Text and JSON rendering of the result table

pub mod cli;
pub mod commands;
pub mod report;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::{
    build_client, describe_probes, execute_run, init_logging, list_probes, load_settings,
    run_probes, Overrides,
};
pub use report::{render_json, render_text, tally_wins, verdict, WinTally, TIE_LABEL};
