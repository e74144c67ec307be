//! Event model.
//!
//! Events are plain values deserialized from the external representation,
//! where `date` is an ISO `YYYY-MM-DD` string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single listed event.
///
/// Events are read-only once loaded; the query engine only ever borrows them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier. Never interpreted, only used for keying.
    pub id: String,

    /// Title, used for search and name ordering.
    pub name: String,

    /// Calendar date of the event (no time, no timezone).
    pub date: NaiveDate,

    /// Free-text location label.
    pub location: String,
}

impl Event {
    /// Creates a new event.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            location: location.into(),
        }
    }
}
