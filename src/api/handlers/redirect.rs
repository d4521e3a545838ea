//! Handler for short URL redirect, plus the extractor that resolves an
//! identifier path segment to its stored record.

use axum::{
    extract::{FromRequestParts, Path},
    http::{HeaderValue, StatusCode, header, request::Parts},
    response::IntoResponse,
};
use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use crate::state::AppState;

/// A record resolved from the `{identifier}` path segment.
///
/// Rejects with `404 Not Found` when no record matches, so handlers taking
/// this extractor only run for existing records.
#[derive(Debug, Clone)]
pub struct ExistingUrl(pub UrlRecord);

impl FromRequestParts<AppState> for ExistingUrl {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(identifier) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid identifier", json!({ "reason": e.body_text() }))
            })?;

        let record = state.url_service.resolve(&identifier).await?;

        Ok(Self(record))
    }
}

/// Redirects a short identifier to its destination.
///
/// # Endpoint
///
/// `GET /{identifier}`
///
/// # Request Flow
///
/// 1. Resolve the identifier (cache first, then database)
/// 2. Return `302 Found` with `Location` set to the stored redirect
///
/// Nothing is written; the endpoint is public.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist, and 500 if the
/// stored destination cannot be sent as a header value.
pub async fn redirect_handler(
    ExistingUrl(record): ExistingUrl,
) -> Result<impl IntoResponse, AppError> {
    let location = HeaderValue::from_str(&record.redirect).map_err(|_| {
        tracing::error!(id = record.id, url = %record.url, "Stored redirect is not a header value");
        AppError::internal("Stored redirect cannot be used", json!({ "url": record.url }))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
