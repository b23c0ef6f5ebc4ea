//! Response types for the shift summary API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::SummaryResult;

/// Response body for a successful `/summary` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The computed totals.
    pub summary: SummaryResult,
    /// The notification message for the summary.
    pub message: String,
    /// The messaging deep link, when a destination was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidTimeFormat { index, field, .. } => {
                Self::bad_request(ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    message,
                    format!("entries[{}].{} must be a time of day as HH:MM", index, field),
                ))
            }
            EngineError::EntryIndexOutOfRange { .. } | EngineError::LastEntry => {
                Self::bad_request(ApiError::new("INVALID_ENTRY", message))
            }
            EngineError::MissingDestination => Self::bad_request(ApiError::with_details(
                "MISSING_DESTINATION",
                message,
                "Provide a non-blank destination or omit the field",
            )),
            EngineError::NoSummary => Self::bad_request(ApiError::new("NO_SUMMARY", message)),
            EngineError::InvalidPricing { .. } => {
                Self::bad_request(ApiError::new("INVALID_PRICING", message))
            }
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                Self::internal(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ))
            }
            EngineError::LinkOpenFailed { .. } => {
                Self::internal(ApiError::new("LINK_OPEN_FAILED", message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeField;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_time_maps_to_bad_request() {
        let engine_error = EngineError::InvalidTimeFormat {
            index: 1,
            field: TimeField::End,
            value: "xx".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();

        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_TIME_FORMAT");
        assert_eq!(
            api_error.error.details.as_deref(),
            Some("entries[1].endTime must be a time of day as HH:MM")
        );
    }

    #[test]
    fn test_config_error_maps_to_internal_error() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "/x.yaml".to_string(),
        }
        .into();

        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
