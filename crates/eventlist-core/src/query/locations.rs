//! Location list derivation and fuzzy suggestions.

use std::collections::HashSet;

use strsim::levenshtein;

use crate::model::Event;

use super::collation::Collation;

/// Maximum Levenshtein distance to consider a location as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Returns each distinct location once, in collation order.
///
/// Locations are deduplicated by exact string identity. Locations that
/// collate as equal keep their first-appearance order.
pub fn distinct_locations(events: &[Event]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut locations: Vec<&str> = events
        .iter()
        .map(|event| event.location.as_str())
        .filter(|location| seen.insert(*location))
        .collect();

    let collation = Collation::new();
    locations.sort_by(|a, b| collation.compare(a, b));
    locations
}

/// Finds the known location closest to `input`, for "did you mean" hints.
///
/// Returns `None` for an exact match, or if nothing is within the
/// suggestion threshold.
pub fn suggest_location<'a>(
    input: &str,
    locations: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    let input_lower = input.to_lowercase();

    let (best_match, best_distance) = locations
        .into_iter()
        .filter(|location| !location.is_empty())
        .map(|location| {
            if location == input {
                return (location, 0);
            }
            // A case-only difference still gets suggested.
            let distance = levenshtein(&input_lower, &location.to_lowercase()).max(1);
            (location, distance)
        })
        .min_by_key(|(_, distance)| *distance)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.to_string())
    } else {
        None
    }
}
