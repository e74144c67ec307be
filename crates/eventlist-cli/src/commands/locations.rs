//! Locations command implementation.
//!
//! Lists each distinct event location once, in collated order. These are the
//! values accepted by `ev list --location`.

use eventlist_core::query;

use super::config::load_config;
use super::events::load_events;
use super::{CommandContext, Result};
use crate::output::{format_locations_json, format_locations_table};

/// Executes the locations command.
///
/// # Errors
///
/// Returns an error if the config or the events file cannot be loaded.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let events = load_events(ctx, &config)?;
    let locations = query::distinct_locations(&events);

    tracing::debug!(count = locations.len(), "collected distinct locations");

    if ctx.json_output {
        let output = format_locations_json(&locations)?;
        println!("{output}");
    } else if !ctx.quiet {
        let use_colors = ctx.use_colors && config.output.color.unwrap_or(true);
        let output = format_locations_table(&locations, use_colors);
        print!("{output}");
    }

    Ok(())
}
