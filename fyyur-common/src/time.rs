//! Timestamp utilities
//!
//! Show start times are wall-clock times as entered on the show form, so they
//! are kept as `NaiveDateTime` and compared against the local clock.

use chrono::{Local, NaiveDateTime};

/// Format accepted by the show form for `start_time`
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used for start times on the flat show listing
pub const LISTING_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Alternate input formats tolerated for `start_time`
const START_TIME_FALLBACK_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Get current local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A show is past when it started strictly before `now`; a show starting
/// exactly at `now` is still upcoming.
pub fn is_past(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time < now
}

/// Parse a submitted start time
pub fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    std::iter::once(START_TIME_FORMAT)
        .chain(START_TIME_FALLBACK_FORMATS.iter().copied())
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Render a start time the way the show form expects it back
pub fn format_start_time(value: NaiveDateTime) -> String {
    value.format(START_TIME_FORMAT).to_string()
}

/// Render a start time for the flat show listing (`YYYY-MM-DDTHH:MM`)
pub fn format_listing(value: NaiveDateTime) -> String {
    value.format(LISTING_FORMAT).to_string()
}

/// Display styles for start times on rendered pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStyle {
    /// `Tue 05, 21, 2019 9:30PM`
    Medium,
    /// `Tuesday May, 21, 2019 at 9:30PM`
    Full,
}

/// Human-readable start time
pub fn format_display(value: NaiveDateTime, style: DisplayStyle) -> String {
    let fmt = match style {
        DisplayStyle::Medium => "%a %m, %d, %Y %-I:%M%p",
        DisplayStyle::Full => "%A %B, %-d, %Y at %-I:%M%p",
    };
    value.format(fmt).to_string()
}
