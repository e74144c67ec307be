//! Event source resolution shared by the list and locations commands.
//!
//! Events are loaded once per invocation. The first source that applies wins:
//!
//! 1. `--events <PATH>` or `EV_EVENTS_FILE`
//! 2. `events_file` in the config file
//! 3. the default data path, if a file exists there
//! 4. the built-in sample events
//!
//! Explicit paths (1 and 2) must exist; a missing file is an error rather
//! than a silent fallback to samples.

use std::path::Path;

use eventlist_core::{Event, EventSource, EventStore, SampleEvents, SourceResult};

use super::config::Config;
use super::{CommandContext, Result};

/// The event source selected for this invocation.
#[derive(Debug)]
pub enum ResolvedSource {
    /// An explicitly named events file, which must exist.
    Store(EventStore),
    /// The default data path, falling back to samples when absent.
    DataDir(EventStore),
    /// The built-in sample events.
    Sample(SampleEvents),
}

impl EventSource for ResolvedSource {
    fn load_events(&self) -> SourceResult<Vec<Event>> {
        match self {
            Self::Store(store) => store.load(),
            Self::DataDir(store) => store.load_or_sample(),
            Self::Sample(sample) => sample.load_events(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Store(store) => store.describe(),
            Self::DataDir(store) if store.exists() => store.describe(),
            Self::DataDir(_) => SampleEvents.describe(),
            Self::Sample(sample) => sample.describe(),
        }
    }
}

/// Picks the event source from the flag, the configured path and the default store.
pub fn resolve_source(
    flag: Option<&Path>,
    configured: Option<&Path>,
    default_store: Option<EventStore>,
) -> ResolvedSource {
    if let Some(path) = flag.or(configured) {
        return ResolvedSource::Store(EventStore::with_path(path));
    }

    match default_store {
        Some(store) => ResolvedSource::DataDir(store),
        None => ResolvedSource::Sample(SampleEvents),
    }
}

/// Loads the session's events according to the resolution order.
pub fn load_events(ctx: &CommandContext, config: &Config) -> Result<Vec<Event>> {
    let default_store = match EventStore::new() {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::debug!(error = %e, "no default events path");
            None
        }
    };

    let source = resolve_source(
        ctx.events_file.as_deref(),
        config.events_file.as_deref(),
        default_store,
    );

    tracing::debug!(source = %source.describe(), "loading events");
    let events = source.load_events()?;

    if ctx.verbose && !ctx.json_output {
        eprintln!("Loaded {} events from {}", events.len(), source.describe());
    }

    Ok(events)
}
