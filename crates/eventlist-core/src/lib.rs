//! Event listing core.
//!
//! This crate holds the event model, the pure filter/sort query engine and the
//! sources events are loaded from. It has no knowledge of how results are
//! rendered; the `ev` binary is one consumer.
//!
//! # Example
//!
//! ```
//! use eventlist_core::query::{self, FilterSpec, SortKey};
//! use eventlist_core::source::{EventSource, SampleEvents};
//!
//! let events = SampleEvents.load_events().unwrap();
//! let spec = FilterSpec::new().with_query("art");
//! let results = query::run_query(&events, &spec, SortKey::NameAscending);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "Art Walk: Winter Edition");
//! ```

pub mod model;
pub mod query;
pub mod source;

pub use model::Event;
pub use source::{EventSource, EventStore, SampleEvents, SourceError, SourceResult};
