/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::DateTime;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format unix epoch seconds as UTC "YYYY-MM-DD HH:MM:SS"
/// Example: 1700000000 -> "2023-11-14 22:13:20"
pub fn format_epoch_seconds(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format(DATETIME_FORMAT).to_string(),
        None => "-".to_string(),
    }
}
