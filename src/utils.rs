/// Utility functions
use chrono::{DateTime, TimeZone, Utc};

/// Round a coordinate to 2 decimal places for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calendar date label for an epoch-millisecond timestamp
pub fn date_label(millis: i64) -> String {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.date_naive().to_string())
        .unwrap_or_default()
}

/// Timestamp label for the summary line
pub fn format_last_update(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
