//! Cache service trait and error types.

use async_trait::async_trait;

use crate::domain::entities::UrlRecord;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),
    #[error("Cache operation error: {0}")]
    OperationError(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching short URL records by identifier.
///
/// Implementations must be thread-safe and fail open: a broken cache degrades
/// to database lookups instead of failing requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the record for an identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Production implementations log errors and report a miss instead.
    async fn get_record(&self, identifier: &str) -> CacheResult<Option<UrlRecord>>;

    /// Stores a record with an optional TTL in seconds
    /// (implementation default when `None`).
    async fn set_record(
        &self,
        identifier: &str,
        record: &UrlRecord,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()>;

    /// Removes a cached record.
    ///
    /// Called when a record is updated or deleted.
    async fn invalidate(&self, identifier: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Human-readable backend name for health reports.
    fn backend(&self) -> &'static str;
}
