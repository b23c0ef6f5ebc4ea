//! HTTP request handlers for the shift summary API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::session::SummarySession;
use crate::store::ShiftStore;

use super::request::SummaryRequest;
use super::response::{ApiError, ApiErrorResponse, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", post(summary_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /summary endpoint.
///
/// Aggregates the submitted entries and returns the summary, its message,
/// and a deep link when a destination was supplied.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let entries_count = request.entries.len();
    let start_time = Instant::now();
    match build_summary(&state, request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                entries_count,
                total_payment = %response.summary.total_payment,
                with_link = response.link.is_some(),
                duration_us = start_time.elapsed().as_micros(),
                "Summary completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Summary failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Runs one form submission through a fresh session.
fn build_summary(state: &AppState, request: SummaryRequest) -> EngineResult<SummaryResponse> {
    let config = state.config();
    let pricing = match &request.pricing {
        Some(overrides) => overrides.apply_to(config.pricing()),
        None => config.pricing().clone(),
    };
    pricing.validate()?;

    let mut session = SummarySession::with_store(
        ShiftStore::from_entries(request.entries),
        pricing,
        config.messaging().clone(),
    );
    let summary = session.submit()?.clone();
    let message = session.summary_message()?;

    let link = match request.destination {
        Some(destination) => {
            session.set_destination(destination);
            Some(session.notification_link()?)
        }
        None => None,
    };

    Ok(SummaryResponse {
        summary,
        message,
        link,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftEntry;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use tower::ServiceExt;

    fn create_valid_request() -> SummaryRequest {
        SummaryRequest {
            entries: vec![ShiftEntry::new("Ana", "2026-01-15", "08:00", "17:00")],
            pricing: None,
            destination: None,
        }
    }

    async fn post_summary(body: String) -> (StatusCode, Vec<u8>) {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/summary")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let body = serde_json::to_string(&create_valid_request()).unwrap();

        let (status, body) = post_summary(body).await;

        assert_eq!(status, StatusCode::OK);
        let result: SummaryResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.summary.total_days, 1);
        assert_eq!(result.summary.total_payment, Decimal::from(48000));
        assert!(result.message.contains("Pago total: 48000"));
        assert!(result.link.is_none());
    }

    #[tokio::test]
    async fn test_destination_produces_link() {
        let mut request = create_valid_request();
        request.destination = Some("5491122334455".to_string());
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = post_summary(body).await;

        assert_eq!(status, StatusCode::OK);
        let result: SummaryResponse = serde_json::from_slice(&body).unwrap();
        let link = result.link.unwrap();
        assert!(link.starts_with("https://wa.me/5491122334455?text="));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post_summary("{invalid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_invalid_time_returns_400() {
        let mut request = create_valid_request();
        request.entries[0].start_time = "8 o'clock".to_string();
        let body = serde_json::to_string(&request).unwrap();

        let (status, body) = post_summary(body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_TIME_FORMAT");
    }

    #[tokio::test]
    async fn test_overflowing_price_returns_400() {
        let body = r#"{
            "entries": [{"startTime": "08:00", "endTime": "17:00"}],
            "pricing": {"pricePerHour": "79228162514264337593543950335"}
        }"#;

        let (status, body) = post_summary(body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_PRICING");
        assert!(error.message.contains("amount overflows"));
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let router = create_router(AppState::default());
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
