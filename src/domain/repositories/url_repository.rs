//! Repository trait for short URL records.

use crate::domain::entities::{NewUrlRecord, UrlPatch, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns it with store-assigned fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short URL already exists.
    /// Returns [`AppError::Internal`] or [`AppError::Unavailable`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its full short URL.
    ///
    /// Returns `Ok(None)` when no record matches.
    async fn find_by_url(&self, url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its primary key.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Lists records in creation order.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `limit` - Number of items per page
    async fn list(&self, page: i64, limit: i64) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts all records.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update.
    ///
    /// Only fields present in [`UrlPatch`] are modified and `updated_at` is bumped.
    /// An empty patch writes nothing and returns the stored record as-is.
    ///
    /// Returns `Ok(None)` if no record has this `id`.
    async fn update(&self, id: i64, patch: UrlPatch) -> Result<Option<UrlRecord>, AppError>;

    /// Hard-deletes a record and returns it.
    ///
    /// Returns `Ok(None)` if no record has this `id`.
    async fn delete(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;
}
