//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{identifier}` - Short URL redirect (public)
//! - `GET  /health`       - Health check: database, cache (public)
//! - `/url`, `/url/{identifier}` - URL management (`x-api-key` required)
//!
//! # Middleware
//!
//! - **Tracing** - Access log with status-dependent level
//! - **Authentication** - API key on management routes only
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static paths take precedence over `/{identifier}`, so identifiers equal to
/// `health` or `url` never redirect.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/{identifier}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
