//! Event sources.
//!
//! The query engine accepts any list of events regardless of where it came
//! from. A source is anything that can produce that list once at startup:
//! the built-in [`SampleEvents`], a JSON [`EventStore`] on disk, or a future
//! remote fetch implementing [`EventSource`].
//!
//! Dates are validated here, at ingestion. An event whose date is not a
//! valid `YYYY-MM-DD` calendar date fails the whole load instead of reaching
//! the engine as an unorderable value.

mod sample;
mod store;

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::Event;

pub use sample::SampleEvents;
pub use store::EventStore;

/// Errors that can occur while loading events.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to determine the XDG data directory.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error while reading an events file.
    #[error("failed to read events file '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A built-in sample event carries an impossible date.
    #[error("built-in sample event '{id}' has an invalid date")]
    InvalidSample {
        /// The id of the offending sample.
        id: String,
    },

    /// The events file is not a valid event list.
    #[error("invalid events file '{path}': {source}")]
    Parse {
        /// The path that failed to parse.
        path: PathBuf,
        /// The underlying JSON error (includes malformed dates).
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Returns true if this is a read error caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for event source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Anything that can supply the session's event list.
pub trait EventSource {
    /// Loads the full event list.
    fn load_events(&self) -> SourceResult<Vec<Event>>;

    /// Human-readable description of where events come from, for diagnostics.
    fn describe(&self) -> String;
}

/// Logs a warning for every id that appears more than once.
///
/// Uniqueness is the caller's responsibility, so duplicates are reported
/// but not rejected.
pub(crate) fn warn_duplicate_ids(events: &[Event]) {
    let mut seen = HashSet::new();
    for event in events {
        if !seen.insert(event.id.as_str()) {
            tracing::warn!(id = %event.id, "duplicate event id");
        }
    }
}
