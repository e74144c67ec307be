//! List command implementation.
//!
//! Lists events matching a search query, location and date window, in the
//! requested order. Configured defaults fill in any option not given on the
//! command line unless `--clear` is passed.

use chrono::{Datelike, Local, Months, NaiveDate};
use eventlist_core::query::{self, FilterSpec, SortKey};
use eventlist_core::Event;

use super::config::{load_config, DefaultsConfig};
use super::events::load_events;
use super::{CommandContext, Result};
use crate::output::helpers::DateFormat;
use crate::output::{format_events_json, format_events_table};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Search text matched against event names.
    pub query: Option<String>,
    /// Exact location.
    pub location: Option<String>,
    /// Earliest date to include.
    pub from: Option<NaiveDate>,
    /// Latest date to include.
    pub to: Option<NaiveDate>,
    /// Restrict to the current calendar month.
    pub this_month: bool,
    /// Sort key as typed by the user.
    pub sort: Option<String>,
    /// Ignore configured defaults.
    pub clear: bool,
}

/// Executes the list command.
///
/// # Errors
///
/// Returns an error if the config or the events file cannot be loaded.
pub fn execute(ctx: &CommandContext, opts: &ListOptions) -> Result<()> {
    let config = load_config()?;
    let events = load_events(ctx, &config)?;

    let today = Local::now().date_naive();
    let (spec, key) = build_query(opts, &config.defaults, today);
    let results = query::run_query(&events, &spec, key);

    if !ctx.quiet && !ctx.json_output {
        if let Some(hint) = location_hint(&events, &spec) {
            eprintln!("{hint}");
        }
    }

    let date_format = DateFormat::from_config(config.output.date_format.as_deref());
    let use_colors = ctx.use_colors && config.output.color.unwrap_or(true);

    if ctx.json_output {
        let output = format_events_json(&results, key, date_format)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_events_table(&results, date_format, use_colors);
        print!("{output}");
    }

    Ok(())
}

/// Turns command-line options and configured defaults into a query.
///
/// Command-line values take precedence over defaults. With `clear`, defaults
/// are ignored entirely. An unrecognized sort key logs a warning and falls
/// back to date ascending.
pub fn build_query(
    opts: &ListOptions,
    defaults: &DefaultsConfig,
    today: NaiveDate,
) -> (FilterSpec, SortKey) {
    let (default_location, default_sort) = if opts.clear {
        (None, None)
    } else {
        (defaults.location.as_deref(), defaults.sort.as_deref())
    };

    let query_text = opts.query.as_deref().unwrap_or("").trim();
    let location = opts.location.as_deref().or(default_location).unwrap_or("");

    let (start, end) = if opts.this_month {
        let (first, last) = month_bounds(today);
        (Some(first), Some(last))
    } else {
        (opts.from, opts.to)
    };

    let spec = FilterSpec::new()
        .with_query(query_text)
        .with_location(location)
        .with_date_range(start, end);

    let key = match opts.sort.as_deref().or(default_sort) {
        Some(raw) => SortKey::recognize(raw).unwrap_or_else(|| {
            tracing::warn!(sort = raw, "unknown sort key, using date-ascending");
            SortKey::default()
        }),
        None => SortKey::default(),
    };

    (spec, key)
}

/// First and last day of the month containing `today`.
fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today.with_day(1).unwrap_or(today);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(today);
    (first, last)
}

/// Builds a "did you mean" message when the location filter names no known location.
fn location_hint(events: &[Event], spec: &FilterSpec) -> Option<String> {
    if spec.location.is_empty() {
        return None;
    }

    let locations = query::distinct_locations(events);
    if locations.contains(&spec.location.as_str()) {
        return None;
    }

    let suggestion = query::suggest_location(&spec.location, locations)?;
    Some(format!(
        "Location '{}' not found. Did you mean '{}'?",
        spec.location, suggestion
    ))
}
