//! Request types for the shift summary API.
//!
//! This module defines the JSON request structure for the `/summary` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DurationPolicy, Pricing, ShiftEntry};

/// Request body for the `/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    /// The shift rows to aggregate, in form order.
    pub entries: Vec<ShiftEntry>,
    /// Optional per-request adjustments to the configured pricing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<PricingOverride>,
    /// Destination identifier; when present the response carries a link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Pricing fields a request may override. Absent fields keep the configured value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOverride {
    /// Price for one hour of work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<Decimal>,
    /// Flat transport fee per entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_rate_per_day: Option<Decimal>,
    /// How reversed start/end times are measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_policy: Option<DurationPolicy>,
}

impl PricingOverride {
    /// Applies the present fields on top of `base`.
    pub fn apply_to(&self, base: &Pricing) -> Pricing {
        Pricing {
            price_per_hour: self.price_per_hour.unwrap_or(base.price_per_hour),
            transport_rate_per_day: self
                .transport_rate_per_day
                .unwrap_or(base.transport_rate_per_day),
            duration_policy: self.duration_policy.unwrap_or(base.duration_policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_summary_request() {
        let json = r#"{
            "entries": [
                {"name": "Ana", "date": "2026-01-15", "startTime": "08:00", "endTime": "17:00"}
            ],
            "destination": "5491122334455"
        }"#;

        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entries.len(), 1);
        assert_eq!(request.entries[0].end_time, "17:00");
        assert_eq!(request.destination.as_deref(), Some("5491122334455"));
        assert!(request.pricing.is_none());
    }

    #[test]
    fn test_deserialize_pricing_override() {
        let json = r#"{
            "entries": [],
            "pricing": {"pricePerHour": 6000, "durationPolicy": "overnight"}
        }"#;

        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        let pricing = request.pricing.unwrap();
        assert_eq!(pricing.price_per_hour, Some(Decimal::from(6000)));
        assert_eq!(pricing.transport_rate_per_day, None);
        assert_eq!(pricing.duration_policy, Some(DurationPolicy::Overnight));
    }

    #[test]
    fn test_override_keeps_unset_fields() {
        let override_ = PricingOverride {
            transport_rate_per_day: Some(Decimal::from_str("1500").unwrap()),
            ..Default::default()
        };

        let pricing = override_.apply_to(&Pricing::default());

        assert_eq!(pricing.price_per_hour, Decimal::from(5000));
        assert_eq!(pricing.transport_rate_per_day, Decimal::from(1500));
        assert_eq!(pricing.duration_policy, DurationPolicy::AbsoluteDifference);
    }
}
