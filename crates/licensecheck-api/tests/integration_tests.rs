//! # Integration Tests for licensecheck-api
//!
//! Drives the assembled router: the HTML page through its query-string
//! lifecycle, the JSON search and lookup routes, dictionaries, probes,
//! the metrics endpoint and the OpenAPI document.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use licensecheck_api::state::{AppConfig, AppState};
use licensecheck_registry::LicenseRegistry;

/// Helper: build the test app over the sample dataset.
fn test_app() -> axum::Router {
    licensecheck_api::app(AppState::new())
}

/// Helper: read response body as string.
async fn body_string(response: axum::http::Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Helper: GET a path on a fresh sample app.
async fn get(uri: &str) -> (StatusCode, String) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_string(response).await)
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn test_liveness_probe() {
    let (status, body) = get("/health/liveness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_readiness_probe() {
    let (status, body) = get("/health/readiness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ready");
}

#[tokio::test]
async fn test_readiness_fails_on_empty_registry() {
    let registry = LicenseRegistry::from_records(Vec::new()).unwrap();
    let app = licensecheck_api::app(AppState::with_config(AppConfig::default(), registry));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// -- Search Page --------------------------------------------------------------

#[tokio::test]
async fn test_page_defaults_to_spanish() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"es\">"));
    assert!(body.contains("Verificación de Licencias Profesionales"));
    assert!(body.contains("Iniciar Sesión"));
    assert!(body.contains("admin\">Iniciar Sesión</a>"));
    assert!(!body.contains("id=\"results\""));
    assert!(!body.contains("id=\"no-results\""));
}

#[tokio::test]
async fn test_page_search_by_name() {
    let (status, body) = get("/?q=mar%C3%ADa&search=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"results\""));
    assert!(body.contains("1 resultado encontrado"));
    assert_eq!(body.matches("class=\"card\"").count(), 1);
    assert!(body.contains("Dr. María González"));
    assert!(!body.contains("Ing. Carlos Rodríguez"));
}

#[tokio::test]
async fn test_page_search_by_license_number() {
    let (_, body) = get("/?q=ENG&search=1").await;
    assert_eq!(body.matches("class=\"card\"").count(), 1);
    assert!(body.contains("ENG-67890"));
}

#[tokio::test]
async fn test_page_search_without_match_shows_message() {
    let (_, body) = get("/?q=zzz&search=1").await;
    assert!(!body.contains("id=\"results\""));
    assert!(body.contains("id=\"no-results\""));
    assert!(body.contains("No se encontraron resultados"));
}

#[tokio::test]
async fn test_page_blank_query_is_not_searched() {
    let (_, body) = get("/?q=%20%20%20&search=1").await;
    assert!(!body.contains("id=\"results\""));
    assert!(!body.contains("id=\"no-results\""));
}

#[tokio::test]
async fn test_page_detail_overlay() {
    let (_, body) = get("/?q=abogado&search=1&selected=3").await;
    assert!(body.contains("id=\"detail\""));
    assert!(body.contains("LAW-54321"));
    assert!(body.contains("No Verificado"));
    assert!(body.contains("Vencida"));
    assert!(body.contains("issue-date\">10&#x2f;1&#x2f;2018"));
    assert!(body.contains("expiry-date\">10&#x2f;1&#x2f;2023"));
    assert!(body.contains("Valle del Cauca"));
    assert!(body.contains("ana.martinez@email.com"));
    assert!(body.contains("+57 302 456 7890"));
}

#[tokio::test]
async fn test_page_selection_outside_results_is_ignored() {
    let (status, body) = get("/?q=ENG&search=1&selected=1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("id=\"detail\""));
    assert!(body.contains("id=\"results\""));
}

#[tokio::test]
async fn test_page_in_english() {
    let (_, body) = get("/?lang=en&q=a&search=1").await;
    assert!(body.contains("<html lang=\"en\">"));
    assert!(body.contains("Professional License Verification"));
    assert!(body.contains("3 results found"));
    assert!(body.contains("Expired"));
    assert!(body.contains("id=\"lang-toggle\""));
}

#[tokio::test]
async fn test_page_toggle_keeps_unsearched_query() {
    let (_, body) = get("/?q=mar%C3%ADa").await;
    assert!(body.contains("value=\"maría\""));
    assert!(body.contains("lang=en&amp;q=mar%C3%ADa\">ES</a>"));
    assert!(!body.contains("id=\"results\""));

    let (_, toggled) = get("/?lang=en&q=mar%C3%ADa").await;
    assert!(toggled.contains("<html lang=\"en\">"));
    assert!(toggled.contains("value=\"maría\""));
    assert!(!toggled.contains("id=\"results\""));
}

#[tokio::test]
async fn test_page_edited_query_hides_stale_no_results() {
    let (_, body) = get("/?q=zzz&search=1").await;
    assert!(body.contains("id=\"no-results\""));

    let (_, body) = get("/?q=mar%C3%ADa").await;
    assert!(!body.contains("id=\"no-results\""));
}

#[tokio::test]
async fn test_page_custom_admin_url() {
    let config = AppConfig {
        admin_url: "https://admin.example.com/login".to_string(),
        ..AppConfig::default()
    };
    let app = licensecheck_api::app(AppState::with_config(config, LicenseRegistry::sample()));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains("admin.example.com"));
    assert!(body.contains("login\">Iniciar Sesión</a>"));
}

// -- JSON API -----------------------------------------------------------------

#[tokio::test]
async fn test_api_search_by_profession() {
    let (status, body) = get_json("/v1/licenses?q=abogado").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["searched"], true);
    assert_eq!(body["query"], "abogado");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["id"], "3");
    assert_eq!(body["results"][0]["status"], "expired");
    assert_eq!(body["results"][0]["verified"], false);
}

#[tokio::test]
async fn test_api_search_preserves_dataset_order() {
    let (_, body) = get_json("/v1/licenses?q=a").await;
    let ids: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_api_missing_query_is_not_searched() {
    let (status, body) = get_json("/v1/licenses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["searched"], false);
    assert_eq!(body["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_api_get_license() {
    let (status, body) = get_json("/v1/licenses/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ing. Carlos Rodríguez");
    assert_eq!(body["jurisdiction"], "Cundinamarca");
    assert_eq!(body["status_label"], "Activa");
    assert_eq!(body["expiry_date_display"], "20/8/2024");
}

#[tokio::test]
async fn test_api_get_unknown_license() {
    let (status, body) = get_json("/v1/licenses/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_dictionary_unknown_language() {
    let (status, body) = get_json("/v1/i18n/klingon").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_dictionary_english() {
    let (status, body) = get_json("/v1/i18n/en").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["texts"]["login"], "Login");
}

// -- Metrics / OpenAPI --------------------------------------------------------

#[tokio::test]
async fn test_metrics_unavailable_without_recorder() {
    let (status, body) = get_json("/metrics").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_metrics_rendered_with_handle() {
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();
    let app = licensecheck_api::app(AppState::new().with_metrics(Some(handle)));
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
}

#[tokio::test]
async fn test_openapi_spec() {
    let (status, body) = get_json("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].as_str().unwrap().starts_with("3."));
    assert!(body["paths"]["/v1/licenses"].is_object());
    assert!(body["paths"]["/v1/i18n/{lang}"].is_object());
}
