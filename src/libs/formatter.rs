//! Schedule text formatting.
//!
//! Deadlines and events are entered as `D/M/YYYY HHMM` and kept only in their
//! display form, `dd MMM yyyy HH:mm`. The conversion is one-way: once stored,
//! the display text is treated as opaque and never parsed back.
//!
//! ## Examples
//!
//! ```rust
//! use duke::libs::formatter::format_schedule;
//!
//! assert_eq!(format_schedule("2/12/2019 1800").unwrap(), "02 Dec 2019 18:00");
//! assert!(format_schedule("tomorrow").is_err());
//! ```

use super::error::TaskError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// chrono pattern for the stored schedule text.
pub const SCHEDULE_DISPLAY_FORMAT: &str = "%d %b %Y %H:%M";

/// Parses `D/M/YYYY HHMM` into a date-time.
///
/// Day and month may be written with or without a leading zero. The year is
/// any integer within chrono's calendar range (roughly ±262000); years
/// outside it are rejected like any other invalid date. The time must be
/// exactly four digits on the 24-hour clock. Impossible calendar dates
/// (`31/2/2020`) are rejected.
pub fn parse_schedule(input: &str) -> Result<NaiveDateTime, TaskError> {
    let invalid = || TaskError::InvalidFormat { input: input.to_string() };

    let mut parts = input.split_whitespace();
    let (date, time) = match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), None) => (date, time),
        _ => return Err(invalid()),
    };

    let fields: Vec<&str> = date.split('/').collect();
    if fields.len() != 3 {
        return Err(invalid());
    }
    let day: u32 = fields[0].parse().map_err(|_| invalid())?;
    let month: u32 = fields[1].parse().map_err(|_| invalid())?;
    let year: i32 = fields[2].parse().map_err(|_| invalid())?;

    if time.len() != 4 || !time.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let hour: u32 = time[..2].parse().map_err(|_| invalid())?;
    let minute: u32 = time[2..].parse().map_err(|_| invalid())?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

    Ok(date.and_time(time))
}

/// Converts user schedule input into the stored display text.
///
/// Years are zero-padded to four digits. Years past 9999 carry a leading `+`
/// (`01 Jan +10000 00:00`), as a `yyyy` pattern does.
pub fn format_schedule(input: &str) -> Result<String, TaskError> {
    let date_time = parse_schedule(input)?;
    Ok(date_time.format(SCHEDULE_DISPLAY_FORMAT).to_string())
}
