//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Holds configuration and the [`SchemaSource`] only. The schema document
//! is never cached here; handlers re-read it through the source.

use std::sync::Arc;

use tiv_schema::SchemaSource;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub schemas: SchemaSource,
}

impl AppState {
    /// Build state from configuration.
    pub fn new(config: AppConfig) -> Self {
        let schemas = SchemaSource::new(config.schema_path.clone(), config.draft);
        Self {
            config: Arc::new(config),
            schemas,
        }
    }
}
