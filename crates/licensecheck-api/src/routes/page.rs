//! # Search Page
//!
//! Routes:
//! - GET /: render the interface
//!
//! The handler replays the user's action onto a fresh [`ViewState`]:
//!
//! 1. Pick the language (`lang`, default `es`; unknown tags fall back).
//! 2. Put `q` in the query box.
//! 3. If `search` is present, submit the search, wait the configured
//!    delay, and complete it.
//! 4. If `selected` names a record in the results, open the overlay.
//!
//! A stale `selected` (not in the results) is ignored and the list renders.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use licensecheck_core::{LicenseId, Locale};
use licensecheck_state::ViewState;
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::metrics::record_search;
use crate::render::render_page;
use crate::routes::query_params;
use crate::state::AppState;

/// Query-string view state.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub selected: Option<String>,
}

/// Build the page router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search_page))
}

/// GET /: the search interface.
async fn search_page(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Html<String>, AppError> {
    let params = query_params(params)?;
    let view = build_view(&state, params).await;
    Ok(Html(render_page(&view, &state.config.admin_url)?))
}

/// Replay the request's view state.
pub async fn build_view(state: &AppState, params: PageParams) -> ViewState {
    let language = match params.lang.as_deref() {
        Some(tag) => tag.parse().unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to default locale");
            Locale::default()
        }),
        None => Locale::default(),
    };
    let mut view = ViewState::new(language);

    if let Some(q) = params.q {
        view.set_query(q);
    }

    if params.search.is_some() {
        if let Some(pending) = view.submit_search() {
            if !state.config.search_delay.is_zero() {
                tokio::time::sleep(state.config.search_delay).await;
            }
            let results = pending.run(&state.registry);
            record_search("page", results.len());
            view.complete_search(pending, results);
        }
    }

    if let Some(id) = params.selected.filter(|s| !s.trim().is_empty()) {
        if let Err(err) = view.select(&LicenseId::new(id)) {
            tracing::debug!(%err, "ignoring stale selection");
        }
    }

    view
}
