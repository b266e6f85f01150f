//! # licensecheck-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `PORT` (default 8080).

use licensecheck_api::state::{AppConfig, AppState};
use licensecheck_registry::LicenseRegistry;
use metrics_exporter_prometheus::PrometheusBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let registry = match &config.data_path {
        Some(path) => LicenseRegistry::load(path).map_err(|e| {
            tracing::error!("Dataset load failed: {e}");
            e
        })?,
        None => {
            tracing::info!("LICENSE_DATA not set, serving the built-in sample");
            LicenseRegistry::sample()
        }
    };

    let metrics = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!("Prometheus recorder not installed: {e}. /metrics will return 503.");
            None
        }
    };

    let port = config.port;
    let state = AppState::with_config(config, registry).with_metrics(metrics);
    let app = licensecheck_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("License check listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
