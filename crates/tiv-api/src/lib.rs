//! # tiv-api — Axum API Service
//!
//! HTTP surface of the Translator Interchange validator.
//!
//! ## Routes
//!
//! | Route                    | Module                 | Purpose                          |
//! |--------------------------|------------------------|----------------------------------|
//! | `POST /validate`         | [`routes::validate`]   | Validate a message               |
//! | `GET /apidocs`           | [`routes::docs`]       | Swagger UI for the schema        |
//! | `GET /apidocs/spec.json` | [`routes::docs`]       | Schema document as JSON          |
//! | `GET /openapi.json`      | [`openapi`]            | OpenAPI spec of this service     |
//! | `GET /health/*`          | this module            | Liveness / readiness probes      |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → DefaultBodyLimit → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

pub use config::{AppConfig, ServerArgs};
pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .merge(routes::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::trace_layer())
        .layer(middleware::cors_layer())
        .with_state(state)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — the schema document must load and compile.
///
/// Returns 200 "ready" or 503 with the configuration error.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let source = state.schemas.clone();
    match tokio::task::spawn_blocking(move || source.compile()).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready".to_string()).into_response(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "readiness task failed");
            (StatusCode::SERVICE_UNAVAILABLE, "readiness check failed".to_string()).into_response()
        }
    }
}
