//! Date and time utility functions
//!
//! This module provides parsing and human-readable formatting for the
//! task dates shown in the list view (e.g., "yesterday", "today",
//! "tomorrow").

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};

/// Date format used for the filter bar inputs and config validation
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT)
}

/// Parse a YYYY-MM-DD string to a NaiveDateTime at start of day
///
/// This is what the filter bar feeds into the custom date range: a bare
/// calendar date with a zeroed time component.
pub fn parse_date_start_of_day(date_str: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    parse_date(date_str).map(start_of_day)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

/// A date's first representable instant (00:00:00.000)
pub fn start_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_opt(0, 0, 0).unwrap_or_default()
}

/// A date's last representable instant at millisecond precision
/// (23:59:59.999)
pub fn end_of_day(d: NaiveDate) -> NaiveDateTime {
    d.and_hms_milli_opt(23, 59, 59, 999).unwrap_or_default()
}

/// Format a task date in human-readable form relative to today
///
/// # Arguments
/// * `date` - The task's calendar date
///
/// # Returns
/// * `String` - "yesterday", "today", "tomorrow", a nearby weekday, a
///   relative day count, or the plain date for anything further out
pub fn format_human_date(date: NaiveDate) -> String {
    let today = Local::now().date_naive();
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => {
            format!("next {}", weekday_name(date.weekday()))
        }
        diff if (-7..-1).contains(&diff) => {
            format!("last {}", weekday_name(date.weekday()))
        }
        diff if diff > 7 && diff <= 30 => {
            format!("in {} days", diff)
        }
        diff if (-30..-7).contains(&diff) => {
            format!("{} days ago", -diff)
        }
        _ => {
            // Show "Jan 15", or "Jan 15, 2025" if in a different year
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
