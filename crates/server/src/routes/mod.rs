//! API route handlers
//!
//! - `health`: Health checks, readiness, and metrics
//! - `translate`: Document translation between dialects

pub mod health;
pub mod translate;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use converter::Direction;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "Personalization Converter",
///   "version": "0.1.0",
///   "endpoints": ["/translate/request/uo-to-common", "..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    let mut endpoints: Vec<String> = Direction::ALL
        .iter()
        .map(|direction| format!("/translate/{}/{}", direction.kind().as_str(), direction))
        .collect();
    endpoints.extend(["/health", "/ready", "/metrics"].map(String::from));

    Ok(Json(json!({
        "name": "Personalization Converter",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoints,
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
