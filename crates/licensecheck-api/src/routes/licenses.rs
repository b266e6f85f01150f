//! # License Search API
//!
//! Routes:
//! - GET /v1/licenses?q=&lang=: substring search over name, license number, profession
//! - GET /v1/licenses/{id}?lang=: single record
//!
//! A blank or missing `q` is not an error: the response reports
//! `searched: false` with no results, mirroring the page's behaviour.
//! `lang` only affects the localized presentation fields
//! (`status_label`, `*_display`).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use licensecheck_core::{format_date, LicenseId, LicenseRecord, LicenseStatus, Locale};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::middleware::metrics::record_search;
use crate::routes::query_params;
use crate::state::AppState;

/// Longest accepted query, in characters.
pub const MAX_QUERY_CHARS: usize = 200;

/// Build the license API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/licenses", get(search_licenses))
        .route("/v1/licenses/{id}", get(get_license))
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

/// Search parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Query text; matched case-insensitively after trimming.
    #[serde(default)]
    pub q: Option<String>,
    /// Presentation language, `es` (default) or `en`.
    #[serde(default)]
    pub lang: Option<String>,
}

/// Language-only parameters.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LangParams {
    /// Presentation language, `es` (default) or `en`.
    #[serde(default)]
    pub lang: Option<String>,
}

/// API-layer representation of a license record with localized presentation fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LicenseView {
    pub id: String,
    pub name: String,
    pub license_number: String,
    pub profession: String,
    /// `active`, `expired` or `suspended`.
    pub status: String,
    /// Status in the requested language.
    pub status_label: String,
    /// Badge colour classes.
    pub status_class: String,
    pub issue_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Issue date in the requested language's short format.
    pub issue_date_display: String,
    /// Expiry date in the requested language's short format.
    pub expiry_date_display: String,
    pub jurisdiction: String,
    pub email: String,
    pub phone: String,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl LicenseView {
    /// Project a record for the given language.
    pub fn from_record(record: &LicenseRecord, lang: Locale) -> Self {
        let texts = lang.texts();
        let status: LicenseStatus = record.status;
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            license_number: record.license_number.clone(),
            profession: record.profession.clone(),
            status: status.as_str().to_string(),
            status_label: status.label(texts).to_string(),
            status_class: status.color_class().to_string(),
            issue_date: record.issue_date,
            expiry_date: record.expiry_date,
            issue_date_display: format_date(record.issue_date, lang),
            expiry_date_display: format_date(record.expiry_date, lang),
            jurisdiction: record.jurisdiction.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            verified: record.verified,
            photo: record.photo.clone(),
        }
    }
}

/// Search response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// Trimmed query that was searched, absent when no search ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Whether a search was performed (false for blank queries).
    pub searched: bool,
    /// Number of results.
    pub count: usize,
    /// Matching records, in dataset order.
    pub results: Vec<LicenseView>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn parse_lang(lang: Option<&str>) -> Result<Locale, AppError> {
    match lang {
        Some(tag) => tag.parse().map_err(|e: licensecheck_core::LicenseCheckError| {
            AppError::Validation(e.to_string())
        }),
        None => Ok(Locale::default()),
    }
}

impl SearchParams {
    /// Check the query length and resolve the presentation language.
    fn locale(&self) -> Result<Locale, AppError> {
        if let Some(q) = &self.q {
            let chars = q.chars().count();
            if chars > MAX_QUERY_CHARS {
                return Err(AppError::Validation(format!(
                    "q must not exceed {MAX_QUERY_CHARS} characters, got {chars}"
                )));
            }
        }
        parse_lang(self.lang.as_deref())
    }
}

impl LangParams {
    fn locale(&self) -> Result<Locale, AppError> {
        parse_lang(self.lang.as_deref())
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /v1/licenses: Search license records.
#[utoipa::path(
    get,
    path = "/v1/licenses",
    params(SearchParams),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 422, description = "Invalid parameters", body = crate::error::ErrorBody),
    ),
    tag = "licenses"
)]
pub(crate) async fn search_licenses(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let params = query_params(params)?;
    let lang = params.locale()?;
    let raw = params.q.unwrap_or_default();

    let response = match state.registry.search(&raw) {
        Some(hits) => {
            record_search("api", hits.len());
            SearchResponse {
                query: Some(raw.trim().to_string()),
                searched: true,
                count: hits.len(),
                results: hits
                    .iter()
                    .map(|r| LicenseView::from_record(r, lang))
                    .collect(),
            }
        }
        None => SearchResponse {
            query: None,
            searched: false,
            count: 0,
            results: Vec::new(),
        },
    };
    Ok(Json(response))
}

/// GET /v1/licenses/{id}: Fetch one license record.
#[utoipa::path(
    get,
    path = "/v1/licenses/{id}",
    params(
        ("id" = String, Path, description = "Record identifier"),
        LangParams,
    ),
    responses(
        (status = 200, description = "License record", body = LicenseView),
        (status = 404, description = "Unknown identifier", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid parameters", body = crate::error::ErrorBody),
    ),
    tag = "licenses"
)]
pub(crate) async fn get_license(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<LangParams>, QueryRejection>,
) -> Result<Json<LicenseView>, AppError> {
    let lang = query_params(params)?.locale()?;
    let id = LicenseId::new(id);
    let record = state
        .registry
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("license {id}")))?;
    Ok(Json(LicenseView::from_record(record, lang)))
}
