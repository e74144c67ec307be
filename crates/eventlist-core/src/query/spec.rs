//! Filter specification value object.

use chrono::NaiveDate;

/// The filter criteria applied to an event list.
///
/// A `FilterSpec` is built fresh from user input for every query and passed
/// by reference; the engine never stores or mutates it. The default value is
/// the cleared state, which matches every event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring of the event name. Empty means any.
    pub query: String,

    /// Exact location label. Empty means any.
    pub location: String,

    /// Inclusive lower date bound.
    pub start_date: Option<NaiveDate>,

    /// Inclusive upper date bound.
    pub end_date: Option<NaiveDate>,
}

impl FilterSpec {
    /// Creates an empty specification (no constraints).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the exact location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the inclusive lower bound.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets both bounds at once. Either may be `None`.
    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.location.is_empty()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}
