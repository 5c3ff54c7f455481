//! # Middleware
//!
//! Tower layers applied to every route: request tracing and permissive
//! CORS so browser clients on any origin can call `/validate`.

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Request/response tracing. Each request gets a span with method and URI;
/// 5xx responses are recorded as failures.
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// Allow any origin, method and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
