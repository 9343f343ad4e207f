//! Calendar-month arithmetic and display formatting.
//!
//! Month shifts clamp the day to the end of the target month, so one month after 31 January is
//! the last day of February. All timestamps are naive UTC.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};

use crate::server::error::Error;

/// Format used for payment dates shown to users, e.g. `05 Mar 2026`
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Format used for chart month labels, e.g. `Mar`
pub const MONTH_LABEL_FORMAT: &str = "%b";

/// Midnight on the first day of the month containing `datetime`.
///
/// # Returns
/// - `Ok(NaiveDateTime)` - Start of the month
/// - `Err(Error::ParseError)` - The date could not be constructed
pub fn start_of_month(datetime: NaiveDateTime) -> Result<NaiveDateTime, Error> {
    NaiveDate::from_ymd_opt(datetime.year(), datetime.month(), 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            Error::ParseError(format!(
                "Failed to calculate start of month for {}",
                datetime
            ))
        })
}

/// Shift `datetime` by a signed number of calendar months, keeping the time of day.
///
/// # Returns
/// - `Ok(NaiveDateTime)` - The shifted timestamp
/// - `Err(Error::ParseError)` - The result is outside the representable date range
pub fn shift_months(datetime: NaiveDateTime, months: i32) -> Result<NaiveDateTime, Error> {
    let shifted = if months >= 0 {
        datetime.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        datetime.checked_sub_months(Months::new(months.unsigned_abs()))
    };

    shifted.ok_or_else(|| {
        Error::ParseError(format!(
            "Failed to shift {} by {} months",
            datetime, months
        ))
    })
}

/// Format a timestamp as a display date, e.g. `05 Mar 2026`.
pub fn format_display_date(datetime: NaiveDateTime) -> String {
    datetime.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Three-letter English month label, e.g. `Mar`.
pub fn format_month_label(datetime: NaiveDateTime) -> String {
    datetime.format(MONTH_LABEL_FORMAT).to_string()
}
