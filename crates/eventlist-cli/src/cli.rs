//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the ev CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// ev - Browse, search and filter a list of events
#[derive(Parser, Debug)]
#[command(name = "ev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Events file to load (default: from config, then the data directory, then built-in samples)
    #[arg(long, global = true, env = "EV_EVENTS_FILE", value_name = "PATH")]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List events matching the given filters
    #[command(alias = "l")]
    List {
        /// Search text matched against event names (case-insensitive)
        query: Option<String>,

        /// Only events at this exact location
        #[arg(short, long)]
        location: Option<String>,

        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, value_name = "DATE")]
        from: Option<NaiveDate>,

        /// Latest date to include (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date, value_name = "DATE")]
        to: Option<NaiveDate>,

        /// Only events in the current calendar month
        #[arg(long, conflicts_with_all = ["from", "to"])]
        this_month: bool,

        /// Sort order: date-asc, date-desc, name-asc, name-desc
        #[arg(short, long, value_name = "KEY")]
        sort: Option<String>,

        /// Ignore configured defaults (clear all filters, sort by date)
        #[arg(long)]
        clear: bool,
    },

    /// List the distinct event locations
    #[command(alias = "loc")]
    Locations,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Open config in $EDITOR
    Edit,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}

/// Parses a `YYYY-MM-DD` calendar date.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{s}' ({e}); expected YYYY-MM-DD"))
}
