//! Common helper functions for output formatting.

use chrono::NaiveDate;

/// How the date pill renders an event date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFormat {
    /// `Dec 20, 2025`
    #[default]
    Medium,
    /// `December 20, 2025`
    Long,
    /// `2025-12-20`
    Iso,
}

impl DateFormat {
    /// Accepted config values, in display order.
    pub const NAMES: [&'static str; 3] = ["medium", "long", "iso"];

    /// Parses a config value. Returns `None` for unknown formats.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            "iso" => Some(Self::Iso),
            _ => None,
        }
    }

    /// Resolves the configured format, falling back to medium.
    pub fn from_config(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        Self::parse(value).unwrap_or_else(|| {
            tracing::warn!(date_format = value, "unknown date format, using medium");
            Self::default()
        })
    }

    /// Formats `date` for display.
    pub fn format_date(self, date: NaiveDate) -> String {
        let pattern = match self {
            Self::Medium => "%b %-d, %Y",
            Self::Long => "%B %-d, %Y",
            Self::Iso => "%Y-%m-%d",
        };
        date.format(pattern).to_string()
    }
}

/// Formats the result count line.
pub fn format_summary(count: usize) -> String {
    match count {
        0 => "No events".to_string(),
        1 => "1 event".to_string(),
        n => format!("{n} events"),
    }
}

/// Wraps text in pill brackets.
pub fn format_pill(text: &str) -> String {
    format!("[{text}]")
}
