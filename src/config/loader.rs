//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::Pricing;

use super::types::{AppConfig, MessagingConfig};

/// Loads and provides access to the application configuration.
///
/// # File Format
///
/// ```text
/// pricing:
///   price_per_hour: 5000
///   transport_rate_per_day: 3000
///   duration_policy: absolute_difference   # or overnight
/// messaging:
///   base_url: https://wa.me
///   sender_name: sebastian
/// ```
///
/// # Example
///
/// ```
/// use shift_summary::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::from_yaml_str("pricing:\n  price_per_hour: 6000\n", "inline")?;
/// assert_eq!(loader.pricing().price_per_hour, Decimal::from(6000));
/// assert_eq!(loader.pricing().transport_rate_per_day, Decimal::from(3000));
/// # Ok::<(), shift_summary::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file is not valid YAML for [`AppConfig`] (`ConfigParseError`)
    /// - A rate is negative (`InvalidPricing`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(
            path = %path_str,
            price_per_hour = %loader.pricing().price_per_hour,
            transport_rate_per_day = %loader.pricing().transport_rate_per_day,
            "Loaded configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text. `source` names the text in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        // An empty document deserializes as unit, not as a mapping
        let config = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
                EngineError::ConfigParseError {
                    path: source.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        config.pricing.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the pricing settings.
    pub fn pricing(&self) -> &Pricing {
        &self.config.pricing
    }

    /// Returns the messaging settings.
    pub fn messaging(&self) -> &MessagingConfig {
        &self.config.messaging
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DurationPolicy;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "shift_summary_{}_{}.yaml",
            name,
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_when_empty() {
        let loader = ConfigLoader::from_yaml_str("", "empty").unwrap();

        assert_eq!(loader.pricing(), &Pricing::default());
        assert_eq!(loader.messaging().base_url, "https://wa.me");
        assert_eq!(loader.messaging().sender_name, "sebastian");
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
pricing:
  price_per_hour: 4500.50
  transport_rate_per_day: 2500
  duration_policy: overnight
messaging:
  base_url: https://example.com/msg
  sender_name: Marta
"#;
        let loader = ConfigLoader::from_yaml_str(yaml, "inline").unwrap();

        assert_eq!(loader.pricing().price_per_hour, dec("4500.50"));
        assert_eq!(loader.pricing().transport_rate_per_day, dec("2500"));
        assert_eq!(loader.pricing().duration_policy, DurationPolicy::Overnight);
        assert_eq!(loader.messaging().base_url, "https://example.com/msg");
        assert_eq!(loader.messaging().sender_name, "Marta");
    }

    #[test]
    fn test_partial_messaging_section_keeps_defaults() {
        let loader = ConfigLoader::from_yaml_str("messaging:\n  sender_name: Lu\n", "inline").unwrap();

        assert_eq!(loader.messaging().sender_name, "Lu");
        assert_eq!(loader.messaging().base_url, "https://wa.me");
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("pricing: [1, 2", "broken.yaml");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "broken.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_duration_policy_returns_parse_error() {
        let result =
            ConfigLoader::from_yaml_str("pricing:\n  duration_policy: sideways\n", "inline");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result =
            ConfigLoader::from_yaml_str("pricing:\n  transport_rate_per_day: -5\n", "inline");
        assert!(matches!(result, Err(EngineError::InvalidPricing { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let path = write_temp_config("load", "pricing:\n  price_per_hour: 6000\n");

        let loader = ConfigLoader::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loader.pricing().price_per_hour, dec("6000"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/shift_summary.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("shift_summary.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
