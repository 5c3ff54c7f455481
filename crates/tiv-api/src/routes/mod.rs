//! # Route Modules
//!
//! Each module defines an Axum Router for one API surface area.
//! Routers are assembled in [`crate::app`].

pub mod docs;
pub mod validate;

use axum::Router;

use crate::state::AppState;

/// All public routes except health probes and `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(validate::router())
        .merge(docs::router())
}
