//! Configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::calculation::DEFAULT_SENDER_NAME;
use crate::models::Pricing;
use crate::notification::DEFAULT_MESSAGING_BASE_URL;

/// Settings for the outgoing notification message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Base URL of the messaging service, without trailing path.
    pub base_url: String,
    /// Name used in the message greeting.
    pub sender_name: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MESSAGING_BASE_URL.to_string(),
            sender_name: DEFAULT_SENDER_NAME.to_string(),
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rates and duration policy.
    pub pricing: Pricing,
    /// Message and link settings.
    pub messaging: MessagingConfig,
}
