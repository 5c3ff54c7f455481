//! # Message Validation Route
//!
//! Routes:
//! - POST   /validate — Validate a message against the `Message` schema
//!
//! The schema document is re-read and recompiled on every request so that
//! edits on disk apply immediately.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tiv_schema::ValidationOutcome;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Body returned for a conforming message.
pub const SUCCESS_MESSAGE: &str = "Successfully validated";

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(validate_message))
}

/// POST /validate — Validate the format of a message.
///
/// Returns the JSON string `"Successfully validated"` when the body
/// conforms, or a plain-text description of the first violation.
#[utoipa::path(
    post,
    path = "/validate",
    request_body(
        content = serde_json::Value,
        description = "Input message",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Message conforms to the Message schema", body = String),
        (status = 400, description = "Malformed JSON, or a message that violates the schema", body = String, content_type = "text/plain"),
        (status = 500, description = "Schema document missing, malformed, or not compilable", body = String, content_type = "text/plain"),
    ),
    tag = "validation"
)]
pub async fn validate_message(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<&'static str>, AppError> {
    let message = extract_json(body)?;
    let source = state.schemas.clone();

    let outcome = tokio::task::spawn_blocking(move || {
        source.compile().map(|validator| validator.validate(&message))
    })
    .await
    .map_err(|e| AppError::Internal(format!("validation task failed: {e}")))??;

    match outcome {
        ValidationOutcome::Success => {
            tracing::debug!("message validated");
            Ok(Json(SUCCESS_MESSAGE))
        }
        ValidationOutcome::Failure(failure) => Err(failure.into()),
    }
}
