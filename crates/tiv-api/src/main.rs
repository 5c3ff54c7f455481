//! # tiv-api — Binary Entry Point
//!
//! Parses command-line flags, checks the schema document once, and starts
//! the Axum HTTP server (default `0.0.0.0:80`).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tiv_api::{AppState, ServerArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = ServerArgs::parse();

    // Initialize structured tracing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = args.into_config();
    let addr = config.socket_addr();
    let state = AppState::new(config);

    // A broken schema document fails every request; refuse to start.
    let validator = state.schemas.compile().map_err(|e| {
        tracing::error!(
            schema = %state.schemas.path().display(),
            "schema document unusable: {e}"
        );
        e
    })?;
    tracing::info!(
        schema = %state.schemas.path().display(),
        draft = %validator.draft(),
        "schema document loaded"
    );

    let app = tiv_api::app(state);

    tracing::info!("tiv-api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
