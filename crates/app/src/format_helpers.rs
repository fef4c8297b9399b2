//! Shared formatting utilities for the dashboard views.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a backend timestamp as "Mar 1, 2025, 09:15 AM" in UTC.
///
/// Bare dates render without a time; anything unparseable is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc).format("%b %-d, %Y, %I:%M %p").to_string();
    }
    match raw.get(..10).map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d")) {
        Some(Ok(date)) => date.format("%b %-d, %Y").to_string(),
        _ => raw.to_string(),
    }
}

/// "1 ticket found", "3 tickets found".
pub fn tickets_found(count: usize) -> String {
    let noun = if count == 1 { "ticket" } else { "tickets" };
    format!("{count} {noun} found")
}

/// Optional profile field, or a dash when the backend left it empty.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "\u{2014}".to_string(),
    }
}
