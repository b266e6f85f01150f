//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! AppState holds only read-only, process-lifetime data:
//! - **Registry**: the license dataset, loaded once at startup.
//! - **Config**: port, simulated search delay, admin link target.
//! - **Metrics handle**: renders the Prometheus exposition when a recorder
//!   is installed.
//!
//! Per-user view state is NOT stored here. Each page request rebuilds a
//! [`licensecheck_state::ViewState`] from its query string.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use licensecheck_registry::LicenseRegistry;
use metrics_exporter_prometheus::PrometheusHandle;

/// Default link target of the header login control.
pub const DEFAULT_ADMIN_URL: &str = "/admin";

/// Runtime configuration, read from the environment by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (`PORT`).
    pub port: u16,
    /// Simulated latency between submitting and completing a page search
    /// (`SEARCH_DELAY_MS`). Cosmetic; zero disables it.
    pub search_delay: Duration,
    /// Where the login control points (`ADMIN_URL`).
    pub admin_url: String,
    /// Dataset file to load instead of the built-in sample (`LICENSE_DATA`).
    pub data_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            search_delay: Duration::ZERO,
            admin_url: DEFAULT_ADMIN_URL.to_string(),
            data_path: None,
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything absent or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = parse_or(&lookup, "PORT", defaults.port);
        let delay_ms = parse_or(&lookup, "SEARCH_DELAY_MS", 0u64);
        let admin_url = lookup("ADMIN_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.admin_url);
        let data_path = lookup("LICENSE_DATA")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            port,
            search_delay: Duration::from_millis(delay_ms),
            admin_url,
            data_path,
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "ignoring unparseable configuration value");
            default
        }),
        None => default,
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The license dataset.
    pub registry: Arc<LicenseRegistry>,
    /// Runtime configuration.
    pub config: Arc<AppConfig>,
    /// Prometheus renderer, present when a recorder was installed.
    pub metrics: Option<PrometheusHandle>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("records", &self.registry.len())
            .field("config", &self.config)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl AppState {
    /// Sample dataset, default configuration, no metrics recorder.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), LicenseRegistry::sample())
    }

    /// State with the given configuration and dataset.
    pub fn with_config(config: AppConfig, registry: LicenseRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
            metrics: None,
        }
    }

    /// Attach a Prometheus handle for the `/metrics` endpoint.
    pub fn with_metrics(mut self, handle: Option<PrometheusHandle>) -> Self {
        self.metrics = handle;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
