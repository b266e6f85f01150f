//! # Dictionaries
//!
//! Routes:
//! - GET /v1/i18n/{lang}: the UI dictionary for `es` or `en`

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use licensecheck_core::Locale;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

/// Build the dictionary router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/i18n/{lang}", get(get_dictionary))
}

/// One language's UI strings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DictionaryResponse {
    /// Normalized language tag.
    pub lang: String,
    /// Key → string map.
    #[schema(value_type = Object)]
    pub texts: serde_json::Value,
}

/// GET /v1/i18n/{lang}: Fetch a UI dictionary.
#[utoipa::path(
    get,
    path = "/v1/i18n/{lang}",
    params(("lang" = String, Path, description = "Language tag, es or en")),
    responses(
        (status = 200, description = "Dictionary", body = DictionaryResponse),
        (status = 422, description = "Unsupported language", body = crate::error::ErrorBody),
    ),
    tag = "i18n"
)]
pub(crate) async fn get_dictionary(
    Path(lang): Path<String>,
) -> Result<Json<DictionaryResponse>, AppError> {
    let locale: Locale = lang.parse()?;
    let texts = serde_json::to_value(locale.texts())
        .map_err(|e| AppError::Internal(format!("dictionary serialization failed: {e}")))?;
    Ok(Json(DictionaryResponse {
        lang: locale.as_str().to_string(),
        texts,
    }))
}
