//! Core data models for the shift summary engine.
//!
//! This module contains the domain models shared by the store, the
//! aggregation engine, and the HTTP layer.

mod pricing;
mod shift_entry;
mod summary;

pub use pricing::{DurationPolicy, Pricing};
pub use shift_entry::{EntryField, ShiftEntry};
pub use summary::SummaryResult;
