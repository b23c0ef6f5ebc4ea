//! HTTP API module for the shift summary engine.
//!
//! This module provides the JSON endpoints that stand in for the form's
//! rendering layer: entries in, summary, message and link out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PricingOverride, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse, SummaryResponse};
pub use state::AppState;
