//! Events file storage with XDG path support.
//!
//! Events are read from a JSON file, by default at
//! `~/.local/share/ev/events.json`. The file holds either a bare array of
//! events or an object with an `events` array:
//!
//! ```json
//! [
//!   { "id": "evt-001", "name": "Gala", "date": "2025-12-20", "location": "Centro" }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::model::Event;

use super::{warn_duplicate_ids, EventSource, SampleEvents, SourceError, SourceResult};

/// Default events filename.
const EVENTS_FILENAME: &str = "events.json";

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "ev";

/// Object form of an events file: `{ "events": [...] }`.
#[derive(Deserialize)]
struct WrappedEvents {
    events: Vec<Event>,
}

/// Parses either a bare event array or the wrapped object form.
///
/// The shape is picked up front so that field errors (such as a malformed
/// date) are reported as-is instead of as a generic shape mismatch.
fn parse_events(contents: &str) -> serde_json::Result<Vec<Event>> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<WrappedEvents>(value).map(|doc| doc.events)
    }
}

/// Read-only JSON file source of events.
///
/// # Example
///
/// ```no_run
/// use eventlist_core::{EventSource, EventStore};
///
/// let store = EventStore::new()?;
/// let events = store.load_or_sample()?;
/// # Ok::<(), eventlist_core::SourceError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EventStore {
    /// Path to the events file.
    path: PathBuf,
}

impl EventStore {
    /// Creates a new `EventStore` with the default XDG data path.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> SourceResult<Self> {
        let path = Self::default_path()?;
        Ok(Self { path })
    }

    /// Creates a new `EventStore` reading from a custom path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default XDG path for the events file.
    ///
    /// On Unix: `~/.local/share/ev/events.json`
    /// On macOS: `~/Library/Application Support/ev/events.json`
    /// On Windows: `C:\Users\<User>\AppData\Roaming\ev\data\events.json`
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> SourceResult<PathBuf> {
        let project_dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or(SourceError::NoDataDir)?;

        Ok(project_dirs.data_dir().join(EVENTS_FILENAME))
    }

    /// Returns the path to the events file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the events file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads events from disk.
    ///
    /// # Errors
    ///
    /// - Returns `SourceError::Read` if the file cannot be read (including
    ///   when it does not exist).
    /// - Returns `SourceError::Parse` if the file is not a valid event list,
    ///   for example when a date is not `YYYY-MM-DD`.
    pub fn load(&self) -> SourceResult<Vec<Event>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| SourceError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let events = parse_events(&contents).map_err(|e| SourceError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), count = events.len(), "loaded events file");
        warn_duplicate_ids(&events);
        Ok(events)
    }

    /// Loads events from disk, falling back to [`SampleEvents`] if the file
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns any error other than "file not found".
    pub fn load_or_sample(&self) -> SourceResult<Vec<Event>> {
        match self.load() {
            Ok(events) => Ok(events),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %self.path.display(), "events file missing, using samples");
                SampleEvents.load_events()
            }
            Err(e) => Err(e),
        }
    }
}

impl EventSource for EventStore {
    fn load_events(&self) -> SourceResult<Vec<Event>> {
        self.load()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(EVENTS_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_bare_array() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"[{"id": "1", "name": "Gala", "date": "2025-12-20", "location": "Centro"}]"#,
        );

        let events = EventStore::with_path(path).load().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Gala");
    }

    #[test]
    fn test_load_wrapped_object() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"{"events": [
                {"id": "1", "name": "Gala", "date": "2025-12-20", "location": "Centro"},
                {"id": "2", "name": "Party A", "date": "2025-12-31", "location": "Roma Norte"}
            ]}"#,
        );

        let events = EventStore::with_path(path).load().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].id, "2");
    }

    #[test]
    fn test_load_rejects_malformed_date() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"[{"id": "1", "name": "Gala", "date": "20/12/2025", "location": "Centro"}]"#,
        );

        let err = EventStore::with_path(path.clone()).load().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_parse_error_is_field_level() {
        let err = parse_events(
            r#"[{"id": "1", "name": "Gala", "date": "2025-02-30", "location": "Centro"}]"#,
        )
        .unwrap_err();
        assert!(err.is_data());
        assert!(!err.to_string().contains("untagged"), "{err}");
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::with_path(dir.path().join("missing.json"));

        let err = store.load().unwrap_err();
        assert!(err.is_not_found());
        assert!(!store.exists());
    }

    #[test]
    fn test_load_or_sample_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = EventStore::with_path(dir.path().join("missing.json"));

        let events = store.load_or_sample().unwrap();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].id, "evt-001");
    }

    #[test]
    fn test_load_or_sample_propagates_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "not json");

        let err = EventStore::with_path(path).load_or_sample().unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            r#"[
                {"id": "dup", "name": "A", "date": "2025-12-20", "location": "X"},
                {"id": "dup", "name": "B", "date": "2025-12-21", "location": "X"}
            ]"#,
        );

        let events = EventStore::with_path(path).load().unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_describe_is_path() {
        let store = EventStore::with_path("/tmp/some/events.json");
        assert_eq!(store.describe(), "/tmp/some/events.json");
    }
}
