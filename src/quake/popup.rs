//! Popup text shown when an earthquake marker is clicked.

use super::EarthquakeFeature;
use chrono::{DateTime, Utc};

/// Placeholder for values the feed left out.
const UNKNOWN: &str = "unknown";

/// Formatted popup content: a heading and a small table.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub rows: Vec<(&'static str, String)>,
}

impl PopupContent {
    /// Builds the popup for an earthquake.
    pub fn for_quake(feature: &EarthquakeFeature) -> Self {
        let title = feature
            .place
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string());

        let rows = vec![
            ("Time", feature.time.map_or_else(unknown, format_time)),
            ("Magnitude", feature.magnitude.map_or_else(unknown, format_number)),
            ("Depth", feature.depth.map_or_else(unknown, format_number)),
        ];

        Self { title, rows }
    }

    /// The whole popup as a single block of text.
    pub fn to_text(&self) -> String {
        let mut text = self.title.clone();
        for (label, value) in &self.rows {
            text.push('\n');
            text.push_str(label);
            text.push_str(": ");
            text.push_str(value);
        }
        text
    }
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// Formats epoch milliseconds as a readable UTC date,
/// e.g. `Tue Nov 14 2023 22:13:20 UTC`.
pub fn format_time(epoch_ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => format!("{} ms", epoch_ms),
    }
}

/// Shortest decimal form of a number (`4.5`, `12.3`, `3`).
fn format_number(value: f64) -> String {
    value.to_string()
}
