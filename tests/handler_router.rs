mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use serde_json::{Value, json};
use shorturl::routes::app_router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

fn make_app(pool: PgPool) -> NormalizePath<Router> {
    app_router(common::create_test_state(pool))
}

async fn send(
    app: &NormalizePath<Router>,
    request: Request<Body>,
) -> (StatusCode, HeaderMap, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn get_with_key(uri: &str) -> Request<Body> {
    Request::get(uri)
        .header("x-api-key", common::TEST_API_KEY)
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test]
async fn test_health_is_not_an_identifier(pool: PgPool) {
    let app = make_app(pool);

    let (status, headers, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get(header::LOCATION).is_none());
    assert_eq!(body["status"], "healthy");
}

#[sqlx::test]
async fn test_stored_health_identifier_does_not_shadow_health(pool: PgPool) {
    common::create_test_url(&pool, "health", "https://example.com").await;
    let app = make_app(pool);

    let (status, headers, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers.get(header::LOCATION).is_none());
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[sqlx::test]
async fn test_guard_covers_management_routes_only(pool: PgPool) {
    common::create_test_url(&pool, "open01", "https://example.com").await;
    let app = make_app(pool);

    let (status, _, body) = send(&app, get("/url")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "unauthorized");

    let (status, headers, _) = send(&app, get("/open01")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers[header::LOCATION], "https://example.com");

    let (status, _, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test]
async fn test_trailing_slash_is_trimmed(pool: PgPool) {
    common::create_test_url(&pool, "slash1", "https://example.com/landing").await;
    let app = make_app(pool);

    let (status, _, body) = send(&app, get_with_key("/url/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["totalCount"], 1);

    let (status, headers, _) = send(&app, get("/slash1/")).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers[header::LOCATION], "https://example.com/landing");

    let (status, _, _) = send(&app, get("/url/")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test]
async fn test_create_then_redirect(pool: PgPool) {
    let app = make_app(pool);

    let request = Request::post("/url")
        .header("x-api-key", common::TEST_API_KEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "title": "Rust", "redirect": "https://www.rust-lang.org/learn" }).to_string(),
        ))
        .unwrap();

    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let short_url = body["url"].as_str().unwrap();
    assert!(short_url.starts_with(&format!("{}/", common::TEST_HOST)));
    let identifier = short_url.rsplit('/').next().unwrap();

    let (status, headers, _) = send(&app, get(&format!("/{identifier}"))).await;
    assert_eq!(status, StatusCode::FOUND);
    assert_eq!(headers[header::LOCATION], "https://www.rust-lang.org/learn");
}

#[sqlx::test]
async fn test_unknown_identifier_is_not_found(pool: PgPool) {
    let app = make_app(pool);

    let (status, headers, body) = send(&app, get("/nope00")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(headers.get(header::LOCATION).is_none());
    assert_eq!(body["error"]["code"], "not_found");
}
