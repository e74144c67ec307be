//! Sort keys and event ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::model::Event;

use super::collation::{self, Collation};

/// The ordering applied to a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Oldest first.
    #[default]
    DateAscending,
    /// Newest first.
    DateDescending,
    /// Name A-Z, locale-aware and case-insensitive.
    NameAscending,
    /// Name Z-A, locale-aware and case-insensitive.
    NameDescending,
}

impl SortKey {
    /// All sort keys, in display order.
    pub const ALL: [SortKey; 4] = [
        SortKey::DateAscending,
        SortKey::DateDescending,
        SortKey::NameAscending,
        SortKey::NameDescending,
    ];

    /// Parses a textual sort key, falling back to [`SortKey::DateAscending`].
    ///
    /// Both the long (`date-ascending`) and short (`date-asc`) spellings are
    /// accepted, ignoring ASCII case and surrounding whitespace. Anything else,
    /// including an empty string, yields the default rather than an error.
    pub fn from_key(key: &str) -> Self {
        Self::recognize(key).unwrap_or_default()
    }

    /// Parses a textual sort key, returning `None` when it is not recognized.
    pub fn recognize(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "date-ascending" | "date-asc" => Some(SortKey::DateAscending),
            "date-descending" | "date-desc" => Some(SortKey::DateDescending),
            "name-ascending" | "name-asc" => Some(SortKey::NameAscending),
            "name-descending" | "name-desc" => Some(SortKey::NameDescending),
            _ => None,
        }
    }

    /// Returns the canonical name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DateAscending => "date-ascending",
            SortKey::DateDescending => "date-descending",
            SortKey::NameAscending => "name-ascending",
            SortKey::NameDescending => "name-descending",
        }
    }

    /// Compares two events under this key.
    pub fn compare(self, a: &Event, b: &Event) -> Ordering {
        match self {
            SortKey::DateAscending => a.date.cmp(&b.date),
            SortKey::DateDescending => b.date.cmp(&a.date),
            SortKey::NameAscending => collation::compare(&a.name, &b.name),
            SortKey::NameDescending => collation::compare(&b.name, &a.name),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns a new sequence of `events` ordered by `key`.
///
/// The sort is stable: events with an equal primary key keep their input
/// order. Name keys share one collator for the whole sort.
pub fn sort<'a>(events: &[&'a Event], key: SortKey) -> Vec<&'a Event> {
    match key {
        SortKey::DateAscending | SortKey::DateDescending => {
            let mut ordered = events.to_vec();
            ordered.sort_by(|a, b| key.compare(a, b));
            ordered
        }
        SortKey::NameAscending | SortKey::NameDescending => {
            let collation = Collation::new();
            let mut ordered = events.to_vec();
            if key == SortKey::NameAscending {
                ordered.sort_by(|a, b| collation.compare(&a.name, &b.name));
            } else {
                ordered.sort_by(|a, b| collation.compare(&b.name, &a.name));
            }
            ordered
        }
    }
}
