//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/ev/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use directories::BaseDirs;
use eventlist_core::query::SortKey;
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};
use crate::output::helpers::DateFormat;

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# ev - Event listing configuration

# Config schema version (do not modify)
version = 1

# Events file to load (can also use --events or EV_EVENTS_FILE)
# events_file = "/path/to/events.json"

# Output preferences
[output]
# color = true              # Enable colors (respects NO_COLOR env)
# date_format = "medium"    # "medium", "long", "iso"

# Defaults applied to `ev list` unless --clear is given
[defaults]
# sort = "date-asc"         # "date-asc", "date-desc", "name-asc", "name-desc"
# location = ""
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Events file to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events_file: Option<PathBuf>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Default list settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            events_file: None,
            output: OutputConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,

    /// Date format for the date pill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

/// Defaults applied to the list command.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Default exact location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/ev/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("EV_CONFIG") {
        let path = PathBuf::from(path);
        if let Some(parent) = path.parent() {
            return Ok(parent.to_path_buf());
        }
    }

    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/ev
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("ev"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("ev"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    // Check for override env var first
    if let Ok(path) = env::var("EV_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config file version {} is newer than supported version {}. Please upgrade ev.",
            config.version, CONFIG_VERSION
        )));
    }

    // Version 1 is the initial schema; later versions add steps here.
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref events_file) = config.events_file {
                println!("  events_file: {}", events_file.display());
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
            if let Some(ref format) = config.output.date_format {
                println!("  date_format: {}", format);
            }

            println!("\n[defaults]");
            if let Some(ref sort) = config.defaults.sort {
                println!("  sort: {}", sort);
            }
            if let Some(ref location) = config.defaults.location {
                println!("  location: {}", location);
            }
        } else {
            println!("(No config file exists. Run 'ev config edit' to create one.)");
        }
    }

    Ok(())
}

/// Executes the config edit command.
pub fn execute_edit(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    // Create default config if it doesn't exist
    if !path.exists() {
        fs::write(&path, DEFAULT_CONFIG)
            .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;

        if !ctx.quiet && !ctx.json_output {
            eprintln!("Created default config at: {}", path.display());
        }
    }

    let editor = env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string());

    tracing::debug!(path = %path.display(), editor = %editor, "opening config in editor");

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| CommandError::Config(format!("Failed to open editor '{}': {}", editor, e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": if status.success() { "success" } else { "error" },
            "editor": editor,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if status.success() {
            println!("Config saved.");
        } else {
            eprintln!("Editor exited with error");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies a single `key = value` assignment to `config`.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let (section, field) = match key.split_once('.') {
        Some((section, field)) => (Some(section), field),
        None => (None, key),
    };

    match (section, field) {
        (None, "events_file") => {
            config.events_file = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            };
        }
        (Some("output"), "color") => {
            config.output.color = Some(parse_bool(value)?);
        }
        (Some("output"), "date_format") => {
            if DateFormat::parse(value).is_none() {
                return Err(CommandError::Config(format!(
                    "Invalid date_format value '{}'. Valid values: {}",
                    value,
                    DateFormat::NAMES.join(", ")
                )));
            }
            config.output.date_format = Some(value.to_string());
        }
        (Some("defaults"), "sort") => {
            if SortKey::recognize(value).is_none() {
                let valid: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_str()).collect();
                return Err(CommandError::Config(format!(
                    "Invalid sort value '{}'. Valid values: {}",
                    value,
                    valid.join(", ")
                )));
            }
            config.defaults.sort = Some(value.to_string());
        }
        (Some("defaults"), "location") => {
            config.defaults.location = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
        }
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: events_file, output.color, output.date_format, defaults.sort, defaults.location",
                key
            )));
        }
    }

    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
