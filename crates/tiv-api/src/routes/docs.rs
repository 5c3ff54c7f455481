//! # Schema Documentation Routes
//!
//! Routes:
//! - GET    /apidocs           — Swagger UI page for the schema document
//! - GET    /apidocs/spec.json — The schema document as JSON
//!
//! The document is served as it is on disk, so the page always matches
//! what `/validate` enforces.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Path of the JSON document the UI page loads.
pub const SPEC_PATH: &str = "/apidocs/spec.json";

/// Swagger UI release served from the CDN.
const SWAGGER_UI_VERSION: &str = "5";

/// Build the documentation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/apidocs", get(docs_page))
        .route(SPEC_PATH, get(docs_spec))
}

/// GET /apidocs — Render the schema document with Swagger UI.
async fn docs_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.config.docs_title))
}

/// GET /apidocs/spec.json — The schema document converted to JSON.
///
/// Fills in `info.title` from configuration when the document has none.
async fn docs_spec(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let source = state.schemas.clone();
    let document = tokio::task::spawn_blocking(move || source.load_document())
        .await
        .map_err(|e| AppError::Internal(format!("document task failed: {e}")))??;

    let mut spec = document.into_value();
    with_default_title(&mut spec, &state.config.docs_title);
    Ok(Json(spec))
}

fn with_default_title(spec: &mut Value, title: &str) {
    let Some(root) = spec.as_object_mut() else {
        return;
    };
    let info = root
        .entry("info")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(info) = info.as_object_mut() {
        info.entry("title")
            .or_insert_with(|| Value::String(title.to_string()));
    }
}

fn render_page(title: &str) -> String {
    let title = escape_html(title);
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui-bundle.js"></script>
  <script>
    window.onload = function () {{
      window.ui = SwaggerUIBundle({{ url: "{SPEC_PATH}", dom_id: "#swagger-ui" }});
    }};
  </script>
</body>
</html>
"##
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
