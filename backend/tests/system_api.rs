use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use storefront_backend::{app, config::Config, state::AppState};

fn test_app() -> Router {
    app(AppState::new(Config::default()))
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_reports_status_and_timestamp() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("build health request"),
        )
        .await
        .expect("call health");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn config_serves_portal_url_and_feature_flags() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/config")
                .body(Body::empty())
                .expect("build config request"),
        )
        .await
        .expect("call config");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["webViewUrl"], "http://10.0.2.2:5000");
    assert_eq!(body["featureFlags"]["EnableTelemetry"], true);
    assert_eq!(body["featureFlags"]["EnableAdvancedFeatures"], false);
}

#[tokio::test]
async fn correlation_id_header_is_echoed_or_generated() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-correlation-id", "client-abc-123")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call health");
    assert_eq!(
        response.headers().get("x-correlation-id").unwrap(),
        "client-abc-123"
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call health");
    let generated = response
        .headers()
        .get("x-correlation-id")
        .expect("header present")
        .to_str()
        .expect("ascii");
    assert!(Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn data_submissions_are_stored_and_listed() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/data")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "correlationId": "corr-42",
                        "sessionName": "demo-session",
                        "notes": "first run",
                        "numericValue": 12.5
                    })
                    .to_string(),
                ))
                .expect("build submit request"),
        )
        .await
        .expect("call submit");
    assert_eq!(response.status(), StatusCode::OK);
    let receipt = response_json(response).await;
    assert_eq!(receipt["isSuccessful"], true);
    assert_eq!(receipt["correlationId"], "corr-42");
    assert_eq!(receipt["message"], "Data received successfully");
    assert!(receipt["timestamp"].is_string());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/data")
                .body(Body::empty())
                .expect("build list request"),
        )
        .await
        .expect("call list");
    assert_eq!(response.status(), StatusCode::OK);
    let submissions = response_json(response).await;
    let submissions = submissions.as_array().expect("array body");
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0]["sessionName"], "demo-session");
    assert_eq!(submissions[0]["numericValue"], 12.5);
}
