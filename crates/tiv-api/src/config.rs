//! # Server Configuration
//!
//! Command-line arguments and the resolved [`AppConfig`] they produce.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tiv_schema::SchemaDraft;

/// Default schema document, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "translator_interchange.yaml";

/// Default title for the documentation page.
pub const DEFAULT_DOCS_TITLE: &str = "Translator Interchange API Specification";

/// Default request body cap. Knowledge-graph messages run to tens of MiB.
pub const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

/// Translator Interchange message validator.
///
/// Serves `POST /validate`, which checks a JSON message against the
/// `Message` definition of the schema document.
#[derive(Parser, Debug, Clone)]
#[command(name = "tiv-api", version, about)]
pub struct ServerArgs {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 80)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Schema document (YAML or JSON) holding the `Message` definition.
    #[arg(short, long, default_value = DEFAULT_SCHEMA_PATH)]
    pub schema: PathBuf,

    /// JSON Schema draft used to compile the `Message` schema.
    #[arg(long, default_value_t = SchemaDraft::default())]
    pub draft: SchemaDraft,

    /// Title shown on the documentation page when the document has none.
    #[arg(long, default_value = DEFAULT_DOCS_TITLE)]
    pub docs_title: String,

    /// Largest accepted request body, in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

impl ServerArgs {
    /// Convert parsed arguments into the application configuration.
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            host: self.host,
            port: self.port,
            schema_path: self.schema,
            draft: self.draft,
            docs_title: self.docs_title,
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Runtime configuration shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub schema_path: PathBuf,
    pub draft: SchemaDraft,
    pub docs_title: String,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 80,
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            draft: SchemaDraft::default(),
            docs_title: DEFAULT_DOCS_TITLE.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
