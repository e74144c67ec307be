//! CLI-focused end-to-end tests for the `ev` binary.
//!
//! Each test runs the real binary inside a sandbox: config, data and events
//! files all live in a temporary directory, and colors are disabled.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const SCENARIO_EVENTS: &str = r#"[
  {"id": "a", "name": "Party A", "date": "2025-12-20", "location": "X"},
  {"id": "b", "name": "Gala", "date": "2025-12-22", "location": "Y"}
]"#;

fn resolve_ev_binary_path() -> PathBuf {
    if let Some(path) = option_env!("CARGO_BIN_EXE_ev") {
        return PathBuf::from(path);
    }

    // Fallback for environments where Cargo doesn't export CARGO_BIN_EXE_ev
    // for this integration test binary.
    let test_binary = env::current_exe().expect("failed to resolve current test executable path");
    let debug_dir = test_binary
        .parent()
        .and_then(|p| p.parent())
        .expect("failed to resolve target/debug directory")
        .to_path_buf();

    let mut candidate = debug_dir.join("ev");
    if cfg!(windows) {
        candidate.set_extension("exe");
    }
    candidate
}

struct CliContext {
    bin_path: PathBuf,
    sandbox: TempDir,
    config_path: PathBuf,
    xdg_config_home: PathBuf,
    xdg_data_home: PathBuf,
}

impl CliContext {
    fn new() -> Self {
        let sandbox = TempDir::new().expect("failed to create temporary sandbox");
        let xdg_config_home = sandbox.path().join("xdg-config");
        let xdg_data_home = sandbox.path().join("xdg-data");
        let config_path = sandbox.path().join("ev-config.toml");

        fs::create_dir_all(&xdg_config_home).expect("failed to create XDG config dir");
        fs::create_dir_all(&xdg_data_home).expect("failed to create XDG data dir");

        Self {
            bin_path: resolve_ev_binary_path(),
            sandbox,
            config_path,
            xdg_config_home,
            xdg_data_home,
        }
    }

    fn write_events(&self, contents: &str) -> PathBuf {
        let path = self.sandbox.path().join("events.json");
        fs::write(&path, contents).expect("failed to write events file");
        path
    }

    fn write_config(&self, contents: &str) {
        fs::write(&self.config_path, contents).expect("failed to write config file");
    }

    fn run_raw(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(&self.bin_path);
        cmd.args(args);
        cmd.env("EV_CONFIG", &self.config_path);
        cmd.env("XDG_CONFIG_HOME", &self.xdg_config_home);
        cmd.env("XDG_DATA_HOME", &self.xdg_data_home);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("EV_EVENTS_FILE");
        cmd.env_remove("RUST_LOG");
        cmd.output().expect("failed to run ev command")
    }

    fn run(&self, args: &[&str]) -> Output {
        let output = self.run_raw(args);
        if output.status.success() {
            return output;
        }

        panic!(
            "ev command failed\nargs: {:?}\nstatus: {}\nstdout:\n{}\nstderr:\n{}",
            args,
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run(args);
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout).unwrap_or_else(|err| {
            panic!(
                "command did not emit valid JSON\nargs: {:?}\nerror: {}\nstdout:\n{}",
                args, err, stdout
            )
        })
    }
}

fn event_names(value: &Value) -> Vec<String> {
    value["events"]
        .as_array()
        .expect("events array")
        .iter()
        .map(|e| e["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_list_samples_by_default() {
    let ctx = CliContext::new();
    let value = ctx.run_json(&["--json", "list"]);

    assert_eq!(value["count"], 6);
    assert_eq!(value["summary"], "6 events");
    assert_eq!(value["sort"], "date-ascending");
    assert_eq!(value["events"][0]["date"], "2025-12-20");
}

#[test]
fn test_scenario_query_and_sort() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);
    let events = events.to_str().unwrap();

    let value = ctx.run_json(&["--json", "--events", events, "list", "gala"]);
    assert_eq!(event_names(&value), vec!["Gala"]);

    let value = ctx.run_json(&["--json", "--events", events, "list", "--sort", "date-desc"]);
    assert_eq!(event_names(&value), vec!["Gala", "Party A"]);

    let value = ctx.run_json(&["--json", "--events", events, "list", "--sort", "name-asc"]);
    assert_eq!(event_names(&value), vec!["Gala", "Party A"]);
}

#[test]
fn test_scenario_location_and_range() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);
    let events = events.to_str().unwrap();

    let value = ctx.run_json(&["--json", "--events", events, "list", "--location", "X"]);
    assert_eq!(event_names(&value), vec!["Party A"]);

    let value = ctx.run_json(&[
        "--json",
        "--events",
        events,
        "list",
        "--from",
        "2025-12-21",
        "--to",
        "2025-12-31",
    ]);
    assert_eq!(event_names(&value), vec!["Gala"]);
}

#[test]
fn test_empty_result_shows_empty_state() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);

    let output = ctx.run(&["--events", events.to_str().unwrap(), "list", "zzz"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("No events\n"));
    assert!(stdout.contains("No events match your filters."));
}

#[test]
fn test_table_output_cards() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);

    let output = ctx.run(&["--events", events.to_str().unwrap(), "list"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "2 events\n\nParty A\n  [Dec 20, 2025] [X]\n\nGala\n  [Dec 22, 2025] [Y]\n"
    );
}

#[test]
fn test_unknown_sort_warns_and_falls_back() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);

    let output = ctx.run(&[
        "--json",
        "--events",
        events.to_str().unwrap(),
        "list",
        "--sort",
        "popularity",
    ]);
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sort"], "date-ascending");
    assert_eq!(event_names(&value), vec!["Party A", "Gala"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown sort key"));
}

#[test]
fn test_location_suggestion_on_stderr() {
    let ctx = CliContext::new();
    let output = ctx.run(&["list", "--location", "Coyoacan, CDMX"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Location 'Coyoacan, CDMX' not found. Did you mean 'Coyoacán, CDMX'?"));
}

#[test]
fn test_locations_command() {
    let ctx = CliContext::new();
    let value = ctx.run_json(&["--json", "locations"]);

    assert_eq!(value["count"], 6);
    assert_eq!(value["locations"][0], "Centro Histórico, CDMX");
    assert_eq!(value["locations"][5], "Roma Norte, CDMX");
}

#[test]
fn test_config_defaults_apply_unless_cleared() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);
    let events = events.to_str().unwrap();
    ctx.write_config("[defaults]\nsort = \"date-desc\"\nlocation = \"Y\"\n");

    let value = ctx.run_json(&["--json", "--events", events, "list"]);
    assert_eq!(value["sort"], "date-descending");
    assert_eq!(event_names(&value), vec!["Gala"]);

    let value = ctx.run_json(&["--json", "--events", events, "list", "--clear"]);
    assert_eq!(value["sort"], "date-ascending");
    assert_eq!(event_names(&value), vec!["Party A", "Gala"]);
}

#[test]
fn test_config_events_file_and_date_format() {
    let ctx = CliContext::new();
    let events = ctx.write_events(SCENARIO_EVENTS);

    ctx.run(&["config", "set", "events_file", events.to_str().unwrap()]);
    ctx.run(&["config", "set", "output.date_format", "iso"]);

    let value = ctx.run_json(&["--json", "list"]);
    assert_eq!(value["count"], 2);
    assert_eq!(value["events"][0]["date_display"], "2025-12-20");
}

#[test]
fn test_config_set_invalid_key_is_config_error() {
    let ctx = CliContext::new();
    let output = ctx.run_raw(&["--json", "config", "set", "token", "abc"]);

    assert_eq!(output.status.code(), Some(5));
    let value: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], "CONFIG_ERROR");
}

#[test]
fn test_missing_events_file_is_source_error() {
    let ctx = CliContext::new();
    let missing = ctx.sandbox.path().join("missing.json");

    let output = ctx.run_raw(&["--json", "--events", missing.to_str().unwrap(), "list"]);
    assert_eq!(output.status.code(), Some(4));
    let value: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"]["code"], "SOURCE_ERROR");
}

#[test]
fn test_malformed_date_in_file_is_rejected() {
    let ctx = CliContext::new();
    let events = ctx.write_events(
        r#"[{"id": "a", "name": "Party A", "date": "2025-02-30", "location": "X"}]"#,
    );

    let output = ctx.run_raw(&["--events", events.to_str().unwrap(), "list"]);
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "));
}

#[test]
fn test_malformed_date_flag_is_rejected_by_parser() {
    let ctx = CliContext::new();
    let output = ctx.run_raw(&["list", "--from", "12/20/2025"]);
    assert!(!output.status.success());
}

#[test]
fn test_config_path_honors_override() {
    let ctx = CliContext::new();
    let output = ctx.run(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), ctx.config_path.display().to_string());
}
