//! Event list output formatting.

use eventlist_core::query::SortKey;
use eventlist_core::Event;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_pill, format_summary, DateFormat};

/// Shown below the summary when nothing matches.
pub const EMPTY_STATE_MESSAGE: &str =
    "No events match your filters. Run 'ev list --clear' to reset.";

/// Display-ready description of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub date_pill: String,
    pub location_pill: &'a str,
}

/// Builds cards for `events`, preserving their order.
pub fn build_cards<'a>(events: &[&'a Event], date_format: DateFormat) -> Vec<EventCard<'a>> {
    events
        .iter()
        .map(|event| EventCard {
            id: &event.id,
            title: &event.name,
            date_pill: date_format.format_date(event.date),
            location_pill: &event.location,
        })
        .collect()
}

/// JSON output structure for the list command.
#[derive(Serialize)]
pub struct EventListOutput<'a> {
    pub summary: String,
    pub count: usize,
    pub sort: &'static str,
    pub events: Vec<EventOutput<'a>>,
}

/// JSON output structure for a single event.
#[derive(Serialize)]
pub struct EventOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub date: String,
    pub date_display: String,
    pub location: &'a str,
}

/// Formats events as JSON.
pub fn format_events_json(
    events: &[&Event],
    sort: SortKey,
    date_format: DateFormat,
) -> Result<String, serde_json::Error> {
    let events_output: Vec<EventOutput> = events
        .iter()
        .zip(build_cards(events, date_format))
        .map(|(event, card)| EventOutput {
            id: card.id,
            name: card.title,
            date: event.date.format("%Y-%m-%d").to_string(),
            date_display: card.date_pill,
            location: card.location_pill,
        })
        .collect();

    let output = EventListOutput {
        summary: format_summary(events.len()),
        count: events.len(),
        sort: sort.as_str(),
        events: events_output,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats events as cards: a summary line, then a title and pill line per event.
pub fn format_events_table(events: &[&Event], date_format: DateFormat, use_colors: bool) -> String {
    let mut output = String::new();

    let summary = format_summary(events.len());
    if use_colors {
        output.push_str(&format!("{}\n", summary.dimmed()));
    } else {
        output.push_str(&summary);
        output.push('\n');
    }

    if events.is_empty() {
        output.push_str(EMPTY_STATE_MESSAGE);
        output.push('\n');
        return output;
    }

    for card in build_cards(events, date_format) {
        output.push('\n');
        if use_colors {
            output.push_str(&format!("{}\n", card.title.bold()));
        } else {
            output.push_str(card.title);
            output.push('\n');
        }

        let date_pill = format_pill(&card.date_pill);
        let location_pill = format_pill(card.location_pill);
        if use_colors {
            output.push_str(&format!(
                "  {} {}\n",
                date_pill.cyan(),
                location_pill.yellow()
            ));
        } else {
            output.push_str(&format!("  {} {}\n", date_pill, location_pill));
        }
    }

    output
}
