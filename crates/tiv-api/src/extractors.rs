//! # Request Body Extraction
//!
//! Maps JSON extraction failures to [`AppError::MalformedInput`] so that a
//! bad body gets the same plain-text 400 as a non-conforming message,
//! instead of Axum's default 415/422 rejections. A body over the size limit
//! keeps its 413 as [`AppError::PayloadTooLarge`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;

/// Extract a JSON body, mapping rejections to a 400 (or 413 for oversized bodies).
///
/// Handlers take `Result<Json<T>, JsonRejection>` and call this first:
/// ```ignore
/// async fn handler(body: Result<Json<Value>, JsonRejection>) -> Result<..., AppError> {
///     let message = extract_json(body)?;
///     // use message...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| match err.status() {
            StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(err.body_text()),
            _ => AppError::MalformedInput(err.body_text()),
        })
}
