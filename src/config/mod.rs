//! Configuration loading for the shift summary engine.
//!
//! Pricing and messaging settings are read from a single YAML file. Every
//! section and field is optional and falls back to the built-in default.
//!
//! # Example
//!
//! ```no_run
//! use shift_summary::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/shift_summary.yaml").unwrap();
//! println!("Price per hour: {}", config.pricing().price_per_hour);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, MessagingConfig};
