//! Location output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output structure for the locations command.
#[derive(Serialize)]
pub struct LocationsListOutput<'a> {
    pub count: usize,
    pub locations: &'a [&'a str],
}

/// Formats locations as JSON.
pub fn format_locations_json(locations: &[&str]) -> Result<String, serde_json::Error> {
    let output = LocationsListOutput {
        count: locations.len(),
        locations,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats locations as a list.
pub fn format_locations_table(locations: &[&str], use_colors: bool) -> String {
    if locations.is_empty() {
        return "No locations found.\n".to_string();
    }

    let mut output = String::new();

    let header = "Location";
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(header);
        output.push('\n');
    }

    for location in locations {
        output.push_str(location);
        output.push('\n');
    }

    output
}
