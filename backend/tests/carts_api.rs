use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use storefront_backend::{app, config::Config, state::AppState};

fn test_app() -> Router {
    app(AppState::new(Config::default()))
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call route");
    let status = response.status();
    let body = response_json(response).await;
    (status, body)
}

fn ids(list: &Value) -> Vec<u64> {
    list.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["id"].as_u64().expect("id"))
        .collect()
}

fn sample_cart() -> Value {
    json!({
        "userId": "user-002",
        "date": Utc::now().to_rfc3339(),
        "products": [
            { "productId": 1, "quantity": 2 },
            { "productId": 6, "quantity": 1 }
        ]
    })
}

#[tokio::test]
async fn list_returns_seed_carts_in_id_order() {
    let app = test_app();
    let (status, body) = get_json(&app, "/carts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<u64>>());
}

#[tokio::test]
async fn sort_and_limit_apply_to_carts() {
    let app = test_app();
    let (_, body) = get_json(&app, "/carts?sort=desc&limit=3").await;
    assert_eq!(ids(&body), vec![10, 9, 8]);
}

#[tokio::test]
async fn date_range_filters_inclusively() {
    let app = test_app();

    // a ±1 day window around the seed cart that is 10 days old; the Z
    // suffix keeps the timestamp free of `+`, which query strings eat
    let start = (Utc::now() - Duration::days(11)).to_rfc3339_opts(SecondsFormat::Secs, true);
    let end = (Utc::now() - Duration::days(9)).to_rfc3339_opts(SecondsFormat::Secs, true);
    let uri = format!("/carts?startdate={start}&enddate={end}");
    let (status, body) = get_json(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![5]);

    // a plain YYYY-MM-DD lower bound well in the past matches everything
    let (status, body) = get_json(&app, "/carts?startdate=2020-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body).len(), 10);

    // an upper bound before every seed date matches nothing
    let (status, body) = get_json(&app, "/carts?enddate=2020-01-01").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn unparseable_date_bounds_are_rejected() {
    let app = test_app();
    let (status, body) = get_json(&app, "/carts?startdate=tuesday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn carts_by_user_are_ordered_by_date() {
    let app = test_app();

    let (status, body) = get_json(&app, "/carts/user/user-001").await;
    assert_eq!(status, StatusCode::OK);
    // user-001's seed carts from oldest (15 days) to newest (today)
    assert_eq!(ids(&body), vec![7, 1, 2, 10]);

    let (status, body) = get_json(&app, "/carts/user/user-999").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("array").is_empty());
}

#[tokio::test]
async fn get_by_id_and_missing_id() {
    let app = test_app();

    let (status, body) = get_json(&app, "/carts/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userId"], "user-002");
    assert_eq!(body["products"][0]["productId"], 16);

    let (status, _) = get_json(&app, "/carts/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_assigns_the_next_id() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/carts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(sample_cart().to_string()))
                .expect("build create request"),
        )
        .await
        .expect("call create");
    assert_eq!(response.status(), StatusCode::OK);
    let created = response_json(response).await;
    assert_eq!(created["id"], 11);
    assert_eq!(created["userId"], "user-002");

    let (status, _) = get_json(&app, "/carts/11").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_forces_the_path_id_and_rejects_missing_ids() {
    let app = test_app();

    let mut payload = sample_cart();
    payload["id"] = json!(77);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/carts/3")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("build patch request"),
        )
        .await
        .expect("call patch");
    assert_eq!(response.status(), StatusCode::OK);
    let updated = response_json(response).await;
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["userId"], "user-002");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/carts/500")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(sample_cart().to_string()))
                .expect("build update request"),
        )
        .await
        .expect("call update");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_idempotent_after_the_first_call() {
    let app = test_app();

    let delete_request = || {
        Request::builder()
            .method("DELETE")
            .uri("/carts/6")
            .body(Body::empty())
            .expect("build delete request")
    };

    let response = app
        .clone()
        .oneshot(delete_request())
        .await
        .expect("call delete");
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = response_json(response).await;
    assert_eq!(deleted["userId"], "user-003");

    let response = app
        .oneshot(delete_request())
        .await
        .expect("call delete again");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
