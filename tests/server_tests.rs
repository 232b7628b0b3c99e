// Router tests: form page, health, metrics and form validation
// Author: kelexine (https://github.com/kelexine)

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use shot2test::config::AppConfig;
use shot2test::server::{create_router, HealthResponse, HealthStatus};
use tower::ServiceExt;

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.logging.file = None;
    config
}

#[tokio::test]
async fn test_index_serves_form() {
    let app = create_router(test_config()).unwrap();
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("App Testing Instructions Generator"));
    assert!(html.contains("name=\"screenshots\""));
}

#[tokio::test]
async fn test_health_reports_missing_credentials() {
    let app = create_router(test_config()).unwrap();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(health.status, HealthStatus::Degraded);
    assert_eq!(health.checks["groq_credentials"].status, "warning");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = create_router(test_config()).unwrap();
    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generate_without_files_shows_error() {
    let boundary = "XBOUNDARYX";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"app_name\"\r\n\r\nMyApp\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"screenshots\"; filename=\"\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\r\n--{b}--\r\n",
        b = boundary
    );

    let app = create_router(test_config()).unwrap();
    let response = app
        .oneshot(
            Request::post("/generate")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", boundary),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Please upload screenshots and enter the app or website name to proceed."));
    assert!(html.contains("value=\"MyApp\""));
    assert!(!html.contains("<textarea"));

    // A user error is counted as 400, not as a server failure
    let metrics = shot2test::metrics::gather_metrics();
    assert!(metrics.lines().any(|line| line.starts_with("requests_total{")
        && line.contains("endpoint=\"/generate\"")
        && line.contains("status_code=\"400\"")));
    assert!(!metrics.lines().any(|line| line.starts_with("requests_total{")
        && line.contains("endpoint=\"/generate\"")
        && line.contains("status_code=\"500\"")));
}
