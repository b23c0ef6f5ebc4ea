//! Calculation logic for the shift summary engine.
//!
//! This module contains the per-entry duration measurement, the
//! aggregation of entries into a summary, and the formatting of that
//! summary as a notification message.

mod aggregation;
mod duration;
mod message;

pub use aggregation::{HOURS_DECIMAL_PLACES, compute_summary, round_hours};
pub use duration::{entry_minutes, parse_time_of_day};
pub use message::{DEFAULT_SENDER_NAME, format_summary_message, format_summary_message_from};
