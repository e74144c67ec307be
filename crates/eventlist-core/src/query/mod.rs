//! Filter-and-sort query engine for events.
//!
//! Every operation here is pure: the input slice is only borrowed and each
//! call returns a fresh `Vec` of references into it.
//!
//! # Filter criteria
//!
//! - `query` - case-insensitive substring of the event name
//! - `location` - exact, case-sensitive location match
//! - `start_date` / `end_date` - inclusive calendar date bounds
//!
//! Empty or absent criteria impose no constraint.
//!
//! # Sort keys
//!
//! - `date-ascending` (default), `date-descending`
//! - `name-ascending`, `name-descending` (locale-aware, case-insensitive)
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eventlist_core::Event;
//! use eventlist_core::query::{self, FilterSpec, SortKey};
//!
//! let events = vec![
//!     Event::new("1", "Party A", NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(), "Roma Norte"),
//!     Event::new("2", "Gala", NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(), "Centro"),
//! ];
//!
//! let spec = FilterSpec::new().with_query("GALA");
//! let matching = query::filter(&events, &spec);
//! assert_eq!(matching.len(), 1);
//!
//! let ordered = query::sort(&query::filter(&events, &FilterSpec::default()), SortKey::DateAscending);
//! assert_eq!(ordered[0].name, "Gala");
//! ```

pub mod collation;
mod evaluator;
mod locations;
mod sort;
mod spec;

pub use evaluator::{filter, FilterEvaluator};
pub use locations::{distinct_locations, suggest_location};
pub use sort::{sort, SortKey};
pub use spec::FilterSpec;

use crate::model::Event;

/// Filters `events` by `spec`, then orders the result by `key`.
///
/// This is the full pass the presentation layer runs on every input change.
pub fn run_query<'a>(events: &'a [Event], spec: &FilterSpec, key: SortKey) -> Vec<&'a Event> {
    let matching = filter(events, spec);
    let ordered = sort(&matching, key);
    tracing::debug!(
        total = events.len(),
        matching = ordered.len(),
        sort = key.as_str(),
        "query evaluated"
    );
    ordered
}
