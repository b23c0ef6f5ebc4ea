//! Summary result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated totals for a list of shift entries.
///
/// A summary is always recomputed from scratch; it is never updated in
/// place as entries change.
///
/// # Example
///
/// ```
/// use shift_summary::models::SummaryResult;
/// use rust_decimal::Decimal;
///
/// let summary = SummaryResult::zero();
/// assert_eq!(summary.total_days, 0);
/// assert_eq!(summary.total_payment, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    /// Number of entries processed. Duplicate dates count separately.
    pub total_days: u32,
    /// Sum of per-entry elapsed minutes.
    pub total_minutes: u64,
    /// `total_minutes / 60`, rounded to one decimal place.
    pub total_hours: Decimal,
    /// `total_days` multiplied by the per-day transport rate.
    pub transport_payment: Decimal,
    /// Worked-time pay plus the transport payment.
    pub total_payment: Decimal,
}

impl SummaryResult {
    /// The summary of an empty entry list.
    pub fn zero() -> Self {
        Self {
            total_days: 0,
            total_minutes: 0,
            total_hours: Decimal::ZERO,
            transport_payment: Decimal::ZERO,
            total_payment: Decimal::ZERO,
        }
    }
}
