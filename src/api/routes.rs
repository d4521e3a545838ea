//! API route configuration.
//!
//! All routes here require the `x-api-key` header, checked by
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_url_handler, delete_url_handler, list_urls_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

/// URL management routes, protected by API key authentication.
///
/// # Endpoints
///
/// - `POST   /url`              - Create a short URL
/// - `GET    /url`              - List short URLs (paginated)
/// - `PATCH  /url/{identifier}` - Partially update a short URL
/// - `DELETE /url/{identifier}` - Delete a short URL
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", get(list_urls_handler).post(create_url_handler))
        .route(
            "/url/{identifier}",
            patch(update_url_handler).delete(delete_url_handler),
        )
}
