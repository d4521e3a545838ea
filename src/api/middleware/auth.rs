//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::application::services::auth_service::API_KEY_HEADER;
use crate::{error::AppError, state::AppState};

/// Authenticates requests using the static API key.
///
/// # Header Format
///
/// ```text
/// x-api-key: <key>
/// ```
///
/// Runs as a route layer, so a rejected request never reaches an extractor,
/// a handler or the store.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, is not valid UTF-8,
/// or does not match the configured key.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/url", get(list_urls_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    st.auth_service.authenticate(presented)?;

    Ok(next.run(req).await)
}
