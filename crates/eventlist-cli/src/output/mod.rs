//! Output formatting utilities for the ev CLI.
//!
//! This module provides functions for formatting data as cards, lists or JSON.
//!
//! - [`events`] - Event list output (cards, summary, empty state)
//! - [`locations`] - Location list output
//! - [`helpers`] - Common formatting utilities (dates, summary, pills)

mod events;
pub mod helpers;
mod locations;

// Events
pub use events::{format_events_json, format_events_table};

// Locations
pub use locations::{format_locations_json, format_locations_table};
