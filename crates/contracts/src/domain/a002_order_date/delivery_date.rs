//! Default delivery date of an order.
//!
//! Orders placed before the cutoff are delivered tomorrow, later ones the day
//! after tomorrow.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike};

/// Local hour from which the default moves one more day ahead.
pub const DEFAULT_CUTOFF_HOUR: u32 = 14;

/// `None` only if the result would leave chrono's calendar range.
pub fn delivery_date(now: NaiveDateTime, cutoff_hour: u32) -> Option<NaiveDate> {
    let days = if now.hour() >= cutoff_hour { 2 } else { 1 };
    now.date().checked_add_days(Days::new(days))
}

/// Format as `YYYY-MM-DD`, year padded to four digits, as `<input type="date">` expects.
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
