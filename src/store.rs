//! Ordered, editable list of shift entries.
//!
//! The store backs the entry rows of the form. Positions are zero-based
//! and shift down when a row is removed.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{EntryField, ShiftEntry};

/// Ordered list of shift entries with positional edits.
///
/// # Example
///
/// ```
/// use shift_summary::store::ShiftStore;
/// use shift_summary::models::{EntryField, ShiftEntry};
///
/// let mut store = ShiftStore::new();
/// store.set_field(0, EntryField::StartTime, "08:00")?;
/// store.append(ShiftEntry::new("Ana", "2026-01-16", "09:00", "13:00"));
/// assert_eq!(store.len(), 2);
/// # Ok::<(), shift_summary::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftStore {
    entries: Vec<ShiftEntry>,
}

impl Default for ShiftStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftStore {
    /// Creates a store holding a single blank row.
    pub fn new() -> Self {
        Self {
            entries: vec![ShiftEntry::blank()],
        }
    }

    /// Creates a store from existing entries, which may be empty.
    pub fn from_entries(entries: Vec<ShiftEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries in order.
    pub fn entries(&self) -> &[ShiftEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry at the end.
    pub fn append(&mut self, entry: ShiftEntry) {
        self.entries.push(entry);
    }

    /// Appends a blank row at the end.
    pub fn add_blank(&mut self) {
        self.append(ShiftEntry::blank());
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> EngineResult<&ShiftEntry> {
        let len = self.entries.len();
        self.entries
            .get(index)
            .ok_or(EngineError::EntryIndexOutOfRange { index, len })
    }

    /// Replaces the entry at `index`.
    pub fn update(&mut self, index: usize, entry: ShiftEntry) -> EngineResult<()> {
        *self.get_mut(index)? = entry;
        Ok(())
    }

    /// Overwrites one field of the entry at `index`.
    pub fn set_field(
        &mut self,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) -> EngineResult<()> {
        self.get_mut(index)?.set(field, value);
        Ok(())
    }

    /// Removes and returns the entry at `index`. Later entries shift down.
    pub fn remove(&mut self, index: usize) -> EngineResult<ShiftEntry> {
        let len = self.entries.len();
        if index >= len {
            return Err(EngineError::EntryIndexOutOfRange { index, len });
        }
        Ok(self.entries.remove(index))
    }

    /// Removes the last row, refusing to leave the form without rows.
    ///
    /// Returns `LastEntry` when only one row (or none) remains.
    pub fn remove_last(&mut self) -> EngineResult<ShiftEntry> {
        if self.entries.len() <= 1 {
            return Err(EngineError::LastEntry);
        }
        self.remove(self.entries.len() - 1)
    }

    fn get_mut(&mut self, index: usize) -> EngineResult<&mut ShiftEntry> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(EngineError::EntryIndexOutOfRange { index, len })
    }
}

impl From<Vec<ShiftEntry>> for ShiftStore {
    fn from(entries: Vec<ShiftEntry>) -> Self {
        Self::from_entries(entries)
    }
}
