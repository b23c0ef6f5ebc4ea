//! Error types for the shift summary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while editing entries,
//! aggregating them, and building notification links.

use thiserror::Error;

/// Which time field of a shift entry an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    /// The shift start time.
    Start,
    /// The shift end time.
    End,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Start => write!(f, "startTime"),
            TimeField::End => write!(f, "endTime"),
        }
    }
}

/// The main error type for the shift summary engine.
///
/// # Example
///
/// ```
/// use shift_summary::error::{EngineError, TimeField};
///
/// let error = EngineError::InvalidTimeFormat {
///     index: 2,
///     field: TimeField::End,
///     value: "25:99".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time format in entry 2 (endTime): '25:99'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A start or end time could not be parsed as a time of day.
    #[error("Invalid time format in entry {index} ({field}): '{value}'")]
    InvalidTimeFormat {
        /// Zero-based position of the offending entry.
        index: usize,
        /// The field that failed to parse.
        field: TimeField,
        /// The raw input that was rejected.
        value: String,
    },

    /// An entry position was outside the current list.
    #[error("Entry index {index} out of range (list has {len} entries)")]
    EntryIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The current number of entries.
        len: usize,
    },

    /// The entry list cannot shrink below a single row.
    #[error("Cannot remove the last remaining entry")]
    LastEntry,

    /// No destination identifier was provided for the notification link.
    #[error("Missing destination identifier for notification link")]
    MissingDestination,

    /// A notification was requested before any summary was computed.
    #[error("No summary has been computed yet")]
    NoSummary,

    /// The pricing parameters were not usable.
    #[error("Invalid pricing '{field}': {message}")]
    InvalidPricing {
        /// The pricing field that was rejected.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The host refused to open the generated link.
    #[error("Failed to open link: {message}")]
    LinkOpenFailed {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format_displays_entry_and_value() {
        let error = EngineError::InvalidTimeFormat {
            index: 0,
            field: TimeField::Start,
            value: "8am".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time format in entry 0 (startTime): '8am'"
        );
    }

    #[test]
    fn test_index_out_of_range_displays_len() {
        let error = EngineError::EntryIndexOutOfRange { index: 5, len: 2 };
        assert_eq!(
            error.to_string(),
            "Entry index 5 out of range (list has 2 entries)"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_pricing_displays_field() {
        let error = EngineError::InvalidPricing {
            field: "price_per_hour".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pricing 'price_per_hour': must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_summary() -> EngineResult<()> {
            Err(EngineError::NoSummary)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_summary()?;
            Ok(())
        }

        assert!(matches!(propagates_error(), Err(EngineError::NoSummary)));
    }
}
