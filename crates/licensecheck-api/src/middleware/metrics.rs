//! # Prometheus Metrics
//!
//! Request metrics through the `metrics` facade. The binary installs a
//! Prometheus recorder at startup; without one (tests, embedding) every
//! macro below is a no-op.
//!
//! | Metric | Labels |
//! |--------|--------|
//! | `http_requests_total` | `method`, `status` |
//! | `http_request_errors_total` | `method`, `status` |
//! | `license_searches_total` | `surface` (`page`/`api`), `outcome` (`hit`/`miss`) |

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware that counts requests and 4xx/5xx responses.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().as_str().to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let status_label = status.as_u16().to_string();
    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "status" => status_label.clone()
    )
    .increment(1);
    if status.is_client_error() || status.is_server_error() {
        metrics::counter!(
            "http_request_errors_total",
            "method" => method,
            "status" => status_label
        )
        .increment(1);
    }

    response
}

/// Count one completed search.
pub fn record_search(surface: &'static str, hits: usize) {
    let outcome = if hits == 0 { "miss" } else { "hit" };
    metrics::counter!(
        "license_searches_total",
        "surface" => surface,
        "outcome" => outcome
    )
    .increment(1);
}
