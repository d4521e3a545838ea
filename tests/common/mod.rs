#![allow(dead_code)]

use axum::{Router, middleware};
use sqlx::PgPool;
use std::sync::Arc;
use shorturl::api::middleware::auth;
use shorturl::api::routes::protected_routes;
use shorturl::application::services::{AuthService, UrlService};
use shorturl::infrastructure::cache::NullCache;
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::state::AppState;
use shorturl::utils::identifier::NanoIdGenerator;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_HOST: &str = "localhost:3000";

/// Inserts a record for `identifier` directly and returns its id.
pub async fn create_test_url(pool: &PgPool, identifier: &str, redirect: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (title, redirect, url) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(format!("Title {identifier}"))
    .bind(redirect)
    .bind(format!("{TEST_HOST}/{identifier}"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_urls(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let cache = Arc::new(NullCache);

    let repository = Arc::new(PgUrlRepository::new(pool));
    let url_service = Arc::new(UrlService::new(
        repository,
        Arc::new(NanoIdGenerator),
        cache.clone(),
        TEST_HOST,
        None,
    ));

    AppState {
        url_service,
        auth_service: Arc::new(AuthService::new(TEST_API_KEY)),
        cache,
    }
}

/// The guarded management routes with the API key layer applied.
pub fn protected_app(pool: PgPool) -> Router {
    let state = create_test_state(pool);
    protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .with_state(state)
}
