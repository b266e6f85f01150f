//! # licensecheck-api: Professional License Lookup Service
//!
//! Serves the public search interface as server-rendered HTML plus a small
//! JSON surface over the same registry.
//!
//! ## Surface
//!
//! | Path                  | Module                   | Purpose                 |
//! |-----------------------|--------------------------|-------------------------|
//! | `/`                   | [`routes::page`]         | Search interface (HTML) |
//! | `/v1/licenses/*`      | [`routes::licenses`]     | Search and lookup       |
//! | `/v1/i18n/*`          | [`routes::i18n`]         | UI dictionaries         |
//! | `/openapi.json`       | [`openapi`]              | OpenAPI document        |
//! | `/health/*`           | here                     | Probes                  |
//! | `/metrics`            | here                     | Prometheus scrape       |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod render;
pub mod routes;
pub mod state;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::middleware::from_fn;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Probes and `/metrics` sit outside the metrics middleware so scrapes do
/// not count themselves.
pub fn app(state: AppState) -> Router {
    let surface = Router::new()
        .merge(routes::page::router())
        .merge(routes::licenses::router())
        .merge(routes::i18n::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http());

    let ops = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(prometheus_metrics));

    Router::new().merge(ops).merge(surface).with_state(state)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: 503 until there is something to search.
async fn readiness(State(state): State<AppState>) -> Response {
    if state.registry.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, "registry empty").into_response();
    }
    "ready".into_response()
}

/// GET /metrics: Prometheus text exposition.
async fn prometheus_metrics(State(state): State<AppState>) -> Result<Response, AppError> {
    let handle = state
        .metrics
        .as_ref()
        .ok_or_else(|| AppError::ServiceUnavailable("metrics recorder not installed".into()))?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    )
        .into_response())
}
