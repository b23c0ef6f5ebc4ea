//! Shift entry model.
//!
//! A [`ShiftEntry`] is one row of user input. Times are kept as the raw
//! strings the user typed; parsing happens in the aggregation engine so
//! that a bad value can be reported against its row.

use serde::{Deserialize, Serialize};

/// One row of shift input: who worked, on which date, and between which times.
///
/// # Examples
///
/// ```
/// use shift_summary::models::ShiftEntry;
///
/// let entry = ShiftEntry::new("Ana", "2026-01-15", "08:00", "17:00");
/// assert_eq!(entry.start_time, "08:00");
/// assert!(ShiftEntry::blank().is_blank());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    /// Free-text name. Not used by the calculation.
    #[serde(default)]
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`. Display only.
    #[serde(default)]
    pub date: String,
    /// Time of day the shift started, `HH:MM`.
    pub start_time: String,
    /// Time of day the shift ended, `HH:MM`.
    pub end_time: String,
}

impl ShiftEntry {
    /// Creates an entry from its four fields.
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Creates an empty row, as shown when the form first renders.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Returns true when every field is empty.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.date.is_empty()
            && self.start_time.is_empty()
            && self.end_time.is_empty()
    }

    /// Overwrites a single field, mirroring an edit to one form input.
    pub fn set(&mut self, field: EntryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EntryField::Name => self.name = value,
            EntryField::Date => self.date = value,
            EntryField::StartTime => self.start_time = value,
            EntryField::EndTime => self.end_time = value,
        }
    }
}

/// Names an editable field of a [`ShiftEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryField {
    /// The `name` field.
    Name,
    /// The `date` field.
    Date,
    /// The `startTime` field.
    StartTime,
    /// The `endTime` field.
    EndTime,
}
