//! Command implementations for the ev CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod completions;
pub mod config;
pub mod events;
pub mod list;
pub mod locations;

use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Event source error.
    #[error("event source error: {0}")]
    Source(#[from] eventlist_core::SourceError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors (before the config file is consulted).
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// Events file given on the command line or via `EV_EVENTS_FILE`.
    pub events_file: Option<PathBuf>,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are off when `--no-color` is passed or `NO_COLOR` is set.
    pub fn from_cli(cli: &Cli) -> Self {
        let no_color_env = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env,
            quiet: cli.quiet,
            verbose: cli.verbose,
            events_file: cli.events.clone(),
        }
    }
}
