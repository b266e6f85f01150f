//! # OpenAPI Specification Assembly
//!
//! Collects the utoipa-documented JSON routes into one OpenAPI 3.1 document,
//! served at `/openapi.json`. The HTML page is not part of the document.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the JSON surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "License Check API",
        version = "0.1.0",
        description = "Public lookup of professional licenses by name, license number or profession.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        crate::routes::licenses::search_licenses,
        crate::routes::licenses::get_license,
        crate::routes::i18n::get_dictionary,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::licenses::LicenseView,
        crate::routes::licenses::SearchResponse,
        crate::routes::i18n::DictionaryResponse,
    )),
    tags(
        (name = "licenses", description = "License search and lookup"),
        (name = "i18n", description = "Interface dictionaries"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
