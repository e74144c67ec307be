//! Built-in sample events.

use chrono::NaiveDate;

use crate::model::Event;

use super::{EventSource, SourceError, SourceResult};

/// Sample data: (id, name, (year, month, day), location).
const SAMPLE_EVENTS: [(&str, &str, (i32, u32, u32), &str); 6] = [
    (
        "evt-001",
        "Paseo Nocturno Navideño",
        (2025, 12, 20),
        "Ciudad de México",
    ),
    (
        "evt-002",
        "Quimeras Modernistas: Mario Pani y Guillermo Zamora",
        (2025, 12, 23),
        "Cuauhtémoc, CDMX",
    ),
    (
        "evt-003",
        "New Year’s Eve Rooftop Gala",
        (2025, 12, 31),
        "Centro Histórico, CDMX",
    ),
    (
        "evt-004",
        "Electronic NYE Party: TORT x Xelva",
        (2025, 12, 31),
        "Roma Norte, CDMX",
    ),
    (
        "evt-005",
        "Family Fireworks Viewing",
        (2025, 12, 31),
        "Reforma, CDMX",
    ),
    (
        "evt-006",
        "Art Walk: Winter Edition",
        (2026, 1, 4),
        "Coyoacán, CDMX",
    ),
];

/// The fixed in-memory event list used when no events file is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleEvents;

/// Converts one sample entry, rejecting an impossible date.
fn sample_event(
    (id, name, (y, m, d), location): &(&str, &str, (i32, u32, u32), &str),
) -> SourceResult<Event> {
    let date = NaiveDate::from_ymd_opt(*y, *m, *d).ok_or_else(|| SourceError::InvalidSample {
        id: (*id).to_string(),
    })?;
    Ok(Event::new(*id, *name, date, *location))
}

impl EventSource for SampleEvents {
    fn load_events(&self) -> SourceResult<Vec<Event>> {
        SAMPLE_EVENTS.iter().map(sample_event).collect()
    }

    fn describe(&self) -> String {
        "built-in sample events".to_string()
    }
}
