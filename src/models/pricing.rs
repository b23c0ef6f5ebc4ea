//! Pricing parameters for the aggregation engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default price for one hour of work.
pub(crate) const DEFAULT_PRICE_PER_HOUR: i64 = 5000;

/// Default transport fee paid per worked day.
pub(crate) const DEFAULT_TRANSPORT_RATE_PER_DAY: i64 = 3000;

/// How an entry whose end time precedes its start time is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPolicy {
    /// Absolute difference between the two times; order does not matter.
    #[default]
    AbsoluteDifference,
    /// An end before the start is read as ending on the following day.
    Overnight,
}

/// Rates used to price a list of shifts.
///
/// # Example
///
/// ```
/// use shift_summary::models::Pricing;
/// use rust_decimal::Decimal;
///
/// let pricing = Pricing::default();
/// assert_eq!(pricing.price_per_hour, Decimal::from(5000));
/// assert_eq!(pricing.transport_rate_per_day, Decimal::from(3000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    /// Price for one hour of work.
    pub price_per_hour: Decimal,
    /// Flat transport fee added per entry.
    pub transport_rate_per_day: Decimal,
    /// How reversed start/end times are measured.
    pub duration_policy: DurationPolicy,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            price_per_hour: Decimal::from(DEFAULT_PRICE_PER_HOUR),
            transport_rate_per_day: Decimal::from(DEFAULT_TRANSPORT_RATE_PER_DAY),
            duration_policy: DurationPolicy::default(),
        }
    }
}

impl Pricing {
    /// Creates pricing with the given rates and the default duration policy.
    pub fn new(price_per_hour: Decimal, transport_rate_per_day: Decimal) -> Self {
        Self {
            price_per_hour,
            transport_rate_per_day,
            duration_policy: DurationPolicy::default(),
        }
    }

    /// Returns this pricing with a different duration policy.
    pub fn with_duration_policy(mut self, policy: DurationPolicy) -> Self {
        self.duration_policy = policy;
        self
    }

    /// The price of a single minute of work.
    pub fn rate_per_minute(&self) -> Decimal {
        self.price_per_hour / Decimal::from(60)
    }

    /// Rejects negative rates.
    pub fn validate(&self) -> EngineResult<()> {
        if self.price_per_hour < Decimal::ZERO {
            return Err(EngineError::InvalidPricing {
                field: "price_per_hour".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.transport_rate_per_day < Decimal::ZERO {
            return Err(EngineError::InvalidPricing {
                field: "transport_rate_per_day".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
