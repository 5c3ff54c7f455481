//! # Application Error
//!
//! Maps schema, validation and request-parsing failures to plain-text HTTP
//! responses.
//!
//! | Variant          | Status | Body                         |
//! |------------------|--------|------------------------------|
//! | `Validation`     | 400    | first violation, multi-line  |
//! | `MalformedInput` | 400    | JSON parser message          |
//! | `PayloadTooLarge`| 413    | body size limit message      |
//! | `Configuration`  | 500    | schema document problem      |
//! | `Internal`       | 500    | generic message              |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tiv_schema::{SchemaError, ValidationFailure};

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// The message does not conform to the schema.
    #[error("{0}")]
    Validation(ValidationFailure),

    /// The request body is not parseable JSON.
    #[error("malformed JSON body: {0}")]
    MalformedInput(String),

    /// The request body exceeds the configured size limit.
    #[error("request body too large: {0}")]
    PayloadTooLarge(String),

    /// The schema document is missing, malformed, or does not compile.
    #[error("schema configuration error: {0}")]
    Configuration(#[from] SchemaError),

    /// Internal server error. Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Configuration(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Validation(failure) => tracing::debug!(
                instance_path = %failure.instance_path,
                schema_path = %failure.schema_path,
                "message rejected"
            ),
            Self::MalformedInput(reason) => tracing::debug!(%reason, "malformed request body"),
            Self::PayloadTooLarge(reason) => tracing::warn!(%reason, "request body over limit"),
            Self::Configuration(_) => tracing::error!(error = %self, "schema document unusable"),
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
        }

        let body = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        (status, body).into_response()
    }
}
