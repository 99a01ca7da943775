//! Date formatting for the service's `played_at` fields

use chrono::{Local, NaiveDate};

/// Wire format of every date the service accepts (`YYYY-MM-DD`)
pub const PLAYED_AT_FORMAT: &str = "%Y-%m-%d";

/// Format a date the way the score endpoints expect it
pub fn played_at_string(date: NaiveDate) -> String {
    date.format(PLAYED_AT_FORMAT).to_string()
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
