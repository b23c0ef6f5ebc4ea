//! Shift aggregation.
//!
//! This module turns a list of shift entries into a [`SummaryResult`]:
//! days worked, hours worked, transport payment and total payment.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{Pricing, ShiftEntry, SummaryResult};

use super::duration::entry_minutes;

/// Decimal places kept for `total_hours`.
pub const HOURS_DECIMAL_PLACES: u32 = 1;

/// Computes the summary for a list of shift entries.
///
/// Every entry counts as one day, whatever its date. Per-entry minutes are
/// measured according to `pricing.duration_policy` and summed before any
/// rounding takes place.
///
/// # Arguments
///
/// * `entries` - The entries to aggregate, possibly empty
/// * `pricing` - Hourly price, per-day transport fee and duration policy
///
/// # Returns
///
/// The summary, or `InvalidTimeFormat` for the first entry whose start or
/// end time does not parse. No partial summary is produced. A rate too large
/// for the payment to be represented yields `InvalidPricing`.
///
/// # Examples
///
/// ```
/// use shift_summary::calculation::compute_summary;
/// use shift_summary::models::{Pricing, ShiftEntry};
/// use rust_decimal::Decimal;
///
/// let entries = vec![ShiftEntry::new("Ana", "2026-01-15", "08:00", "17:00")];
/// let summary = compute_summary(&entries, &Pricing::default()).unwrap();
///
/// assert_eq!(summary.total_days, 1);
/// assert_eq!(summary.total_hours, Decimal::from(9));
/// assert_eq!(summary.transport_payment, Decimal::from(3000));
/// assert_eq!(summary.total_payment, Decimal::from(48000));
/// ```
pub fn compute_summary(entries: &[ShiftEntry], pricing: &Pricing) -> EngineResult<SummaryResult> {
    let mut total_minutes: u64 = 0;
    let mut total_days: u32 = 0;

    for (index, entry) in entries.iter().enumerate() {
        total_minutes += entry_minutes(entry, index, pricing.duration_policy)?;
        total_days += 1;
    }

    if total_days == 0 {
        return Ok(SummaryResult::zero());
    }

    let minutes = Decimal::from(total_minutes);
    let total_hours = round_hours(minutes / Decimal::from(60));
    let transport_payment = Decimal::from(total_days)
        .checked_mul(pricing.transport_rate_per_day)
        .ok_or_else(|| overflow("transport_rate_per_day"))?;

    // minutes * (price / 60), multiplied first so whole-hour prices stay exact
    let worked_payment = minutes
        .checked_mul(pricing.price_per_hour)
        .and_then(|amount| amount.checked_div(Decimal::from(60)))
        .ok_or_else(|| overflow("price_per_hour"))?;
    let total_payment = worked_payment
        .checked_add(transport_payment)
        .ok_or_else(|| overflow("total_payment"))?;

    Ok(SummaryResult {
        total_days,
        total_minutes,
        total_hours,
        transport_payment,
        total_payment,
    })
}

/// Rounds an hour figure to one decimal place, halves away from zero.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

fn overflow(field: &str) -> EngineError {
    EngineError::InvalidPricing {
        field: field.to_string(),
        message: "amount overflows".to_string(),
    }
}
