//! Elapsed-time measurement for a single shift entry.
//!
//! Both times of an entry are read as wall-clock times on the same nominal
//! day; the calendar date of the entry plays no part in the measurement.

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult, TimeField};
use crate::models::{DurationPolicy, ShiftEntry};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Parses a time of day in `HH:MM` or `HH:MM:SS` form.
///
/// Surrounding whitespace is ignored. Returns `None` for anything else,
/// including the empty string of a row the user never filled in.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("08:30"), NaiveTime::from_hms_opt(8, 30, 0));
/// assert_eq!(parse_time_of_day("08:30:15"), NaiveTime::from_hms_opt(8, 30, 15));
/// assert_eq!(parse_time_of_day("8.30"), None);
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Returns the whole minutes worked in `entry`.
///
/// Seconds are dropped after the difference is taken, so `08:00:00` to
/// `08:01:59` counts as one minute.
///
/// # Arguments
///
/// * `entry` - The entry to measure
/// * `index` - Position of the entry, reported in errors
/// * `policy` - How an end time before the start time is measured
///
/// # Errors
///
/// Returns `InvalidTimeFormat` naming the entry and field when either time
/// cannot be parsed.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::entry_minutes;
/// use shift_summary::models::{DurationPolicy, ShiftEntry};
///
/// let entry = ShiftEntry::new("", "", "18:00", "08:00");
/// assert_eq!(entry_minutes(&entry, 0, DurationPolicy::AbsoluteDifference).unwrap(), 600);
/// assert_eq!(entry_minutes(&entry, 0, DurationPolicy::Overnight).unwrap(), 840);
/// ```
pub fn entry_minutes(entry: &ShiftEntry, index: usize, policy: DurationPolicy) -> EngineResult<u64> {
    let start = parse_field(&entry.start_time, index, TimeField::Start)?;
    let end = parse_field(&entry.end_time, index, TimeField::End)?;

    let signed_seconds = (end - start).num_seconds();
    let elapsed_seconds = match policy {
        DurationPolicy::AbsoluteDifference => signed_seconds.abs(),
        DurationPolicy::Overnight if signed_seconds < 0 => SECONDS_PER_DAY + signed_seconds,
        DurationPolicy::Overnight => signed_seconds,
    };

    // elapsed_seconds is within 0..SECONDS_PER_DAY here
    Ok(elapsed_seconds.unsigned_abs() / 60)
}

fn parse_field(value: &str, index: usize, field: TimeField) -> EngineResult<NaiveTime> {
    parse_time_of_day(value).ok_or_else(|| EngineError::InvalidTimeFormat {
        index,
        field,
        value: value.to_string(),
    })
}
