//! # OpenAPI Specification
//!
//! OpenAPI 3.1 description of this service's own endpoints, generated by
//! utoipa and served at `/openapi.json`. The schema document itself is
//! rendered separately under `/apidocs`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Translator Interchange Validator",
        description = "Validates Translator Interchange messages against the `Message` definition of the configured schema document.\n\nThe schema document is re-read on every request. Its rendered reference lives at `/apidocs`.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(crate::routes::validate::validate_message),
    tags(
        (name = "validation", description = "Message validation against the Message schema"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates_successfully() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Translator Interchange Validator");
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_openapi_spec_has_validate_path() {
        let spec = ApiDoc::openapi();
        assert!(
            spec.paths.paths.contains_key("/validate"),
            "OpenAPI spec should contain /validate path"
        );
    }

    #[test]
    fn test_openapi_spec_has_validation_tag() {
        let spec = ApiDoc::openapi();
        let tags = spec.tags.expect("OpenAPI spec should have tags");
        assert!(tags.iter().any(|t| t.name == "validation"));
    }

    #[test]
    fn test_openapi_spec_serializes_to_json() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("\"openapi\""));
        assert!(json.contains("/validate"));
    }

    #[test]
    fn test_router_builds_successfully() {
        let _router = router();
    }
}
