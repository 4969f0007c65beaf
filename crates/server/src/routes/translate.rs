use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use converter::{Conversion, Direction};
use std::sync::Arc;
use std::time::Instant;

/// Translate one document.
///
/// `POST /translate/{kind}/{direction}` where `kind` is `request` or
/// `response` and must match the direction. The body is the input document;
/// the reply is the `{"request": ..., "response": ...}` envelope.
///
/// # Errors
/// - 400 `BAD_REQUEST` when the body does not decode as the input document
/// - 404 `NOT_FOUND` for an unknown direction or a kind mismatch
/// - 413 `PAYLOAD_TOO_LARGE` when the body exceeds `max_body_size_mb`
/// - 500 `TRANSLATION_ERROR` when the translator fails
pub async fn translate(
    State(state): State<Arc<ServerState>>,
    Path((kind, name)): Path<(String, String)>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<Json<Conversion>> {
    let start = Instant::now();

    let direction = name
        .parse::<Direction>()
        .ok()
        .filter(|direction| direction.kind().as_str() == kind)
        .ok_or(ServerError::NotFound)?;

    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_mb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })?;

    match state.converter.convert(direction, &body) {
        Ok(conversion) => {
            tracing::info!(
                direction = %direction,
                subject_id = %conversion.subject_id,
                status = 200,
                duration_ms = %start.elapsed().as_millis(),
                "Translation completed"
            );
            Ok(Json(conversion))
        }
        Err(err) => {
            let err = ServerError::from(err);
            tracing::warn!(
                direction = %direction,
                status = err.status_code().as_u16(),
                error = %err,
                duration_ms = %start.elapsed().as_millis(),
                "Translation failed"
            );
            Err(err)
        }
    }
}
