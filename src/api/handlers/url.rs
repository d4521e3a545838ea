//! Handlers for short URL management endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::url::{CreateUrlRequest, UpdateUrlRequest, UrlResponse};
use crate::api::handlers::ExistingUrl;
use crate::domain::pagination::Page;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Google",
///   "description": "Search engine",   // optional
///   "redirect": "https://google.com"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record; `url` is `{HOST}/{identifier}`.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the generated short URL is already taken.
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    payload.validate()?;

    let record = state.url_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Lists stored records, one page at a time, in creation order.
///
/// # Endpoint
///
/// `GET /url?page=1&limit=10`
///
/// # Response
///
/// ```json
/// {
///   "data": [ { "id": 1, "title": "Google", ... } ],
///   "meta": {
///     "totalCount": 1,
///     "currentPage": 1,
///     "perPage": 10,
///     "totalPages": 1,
///     "hasNextPage": false,
///     "hasPreviousPage": false
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `page < 1` or `limit` is outside `1..=100`.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<UrlResponse>>, AppError> {
    let (page, limit) = params.validate()?;

    let page = state.url_service.find_all(page, limit).await?;

    Ok(Json(Page {
        data: page.data.into_iter().map(Into::into).collect(),
        meta: page.meta,
    }))
}

/// Partially updates a record.
///
/// # Endpoint
///
/// `PATCH /url/{identifier}`
///
/// # Request Body
///
/// All fields are optional. `"description": null` clears the description.
///
/// ```json
/// {
///   "title": "New title",
///   "redirect": "https://example.org"
/// }
/// ```
///
/// The body is validated before the identifier is looked up.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn update_url_handler(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .update_by_identifier(&identifier, payload.into())
        .await?;

    Ok(Json(record.into()))
}

/// Deletes a record and returns it.
///
/// # Endpoint
///
/// `DELETE /url/{identifier}`
///
/// The record is removed from the database and evicted from the cache;
/// subsequent redirects for this identifier return 404.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier doesn't exist.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    ExistingUrl(record): ExistingUrl,
) -> Result<Json<UrlResponse>, AppError> {
    let deleted = state.url_service.remove(record.id).await?;

    Ok(Json(deleted.into()))
}
