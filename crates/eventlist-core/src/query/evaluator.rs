//! Filter evaluation against events.
//!
//! This module provides the [`FilterEvaluator`] for testing events against a
//! [`FilterSpec`], and the [`filter`] shorthand.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eventlist_core::Event;
//! use eventlist_core::query::{FilterEvaluator, FilterSpec};
//!
//! let spec = FilterSpec::new().with_location("Centro");
//! let evaluator = FilterEvaluator::new(&spec);
//!
//! let event = Event::new("1", "Gala", NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(), "Centro");
//! assert!(evaluator.matches(&event));
//! ```

use crate::model::Event;

use super::spec::FilterSpec;

/// Evaluates a [`FilterSpec`] against events.
///
/// The query is lower-cased once at construction so that matching a list
/// does not re-fold it for every event.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    spec: &'a FilterSpec,
    query_lower: String,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new evaluator for `spec`.
    pub fn new(spec: &'a FilterSpec) -> Self {
        Self {
            spec,
            query_lower: spec.query.to_lowercase(),
        }
    }

    /// Returns true if the event satisfies every criterion.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_query(event)
            && self.matches_location(event)
            && self.on_or_after_start(event)
            && self.on_or_before_end(event)
    }

    /// Filters a slice of events, returning only those that match, in order.
    pub fn filter_events<'b>(&self, events: &'b [Event]) -> Vec<&'b Event> {
        events.iter().filter(|event| self.matches(event)).collect()
    }

    /// Case-insensitive substring match on the name.
    fn matches_query(&self, event: &Event) -> bool {
        if self.query_lower.is_empty() {
            return true;
        }
        event.name.to_lowercase().contains(&self.query_lower)
    }

    /// Exact, case-sensitive location match.
    fn matches_location(&self, event: &Event) -> bool {
        self.spec.location.is_empty() || event.location == self.spec.location
    }

    fn on_or_after_start(&self, event: &Event) -> bool {
        self.spec.start_date.map_or(true, |start| event.date >= start)
    }

    fn on_or_before_end(&self, event: &Event) -> bool {
        self.spec.end_date.map_or(true, |end| event.date <= end)
    }
}

/// Returns the events matching `spec`, preserving their relative order.
pub fn filter<'a>(events: &'a [Event], spec: &FilterSpec) -> Vec<&'a Event> {
    FilterEvaluator::new(spec).filter_events(events)
}
