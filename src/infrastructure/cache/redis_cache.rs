//! Redis-backed record cache.

use super::service::{CacheError, CacheResult, CacheService};
use crate::domain::entities::UrlRecord;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info, warn};

/// Redis cache for identifier lookups.
///
/// Records are stored as JSON under `url:{identifier}` with a TTL.
/// All operations are fail-open: errors are logged but don't propagate to callers.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: u64,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set_record`] is called
    ///   with `ttl_seconds = None`; controlled via `CACHE_TTL_SECONDS`
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl: default_ttl_seconds,
            key_prefix: "url:".to_string(),
        })
    }

    fn build_key(&self, identifier: &str) -> String {
        format!("{}{}", self.key_prefix, identifier)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_record(&self, identifier: &str) -> CacheResult<Option<UrlRecord>> {
        let key = self.build_key(identifier);
        let mut conn = self.client.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(raw)) => match serde_json::from_str::<UrlRecord>(&raw) {
                Ok(record) => {
                    debug!(identifier, "Cache HIT");
                    Ok(Some(record))
                }
                Err(e) => {
                    warn!(identifier, error = %e, "Discarding undecodable cache entry");
                    let _ = conn.del::<_, i32>(&key).await;
                    Ok(None)
                }
            },
            Ok(None) => {
                debug!(identifier, "Cache MISS");
                Ok(None)
            }
            Err(e) => {
                error!(identifier, error = %e, "Redis GET error");
                Ok(None)
            }
        }
    }

    async fn set_record(
        &self,
        identifier: &str,
        record: &UrlRecord,
        ttl_seconds: Option<u64>,
    ) -> CacheResult<()> {
        let key = self.build_key(identifier);
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        let payload = serde_json::to_string(record)
            .map_err(|e| CacheError::OperationError(e.to_string()))?;

        let mut conn = self.client.clone();
        match conn.set_ex::<_, _, ()>(&key, payload, ttl).await {
            Ok(()) => {
                debug!(identifier, ttl, "Cache SET");
                Ok(())
            }
            Err(e) => {
                warn!(identifier, error = %e, "Redis SET error");
                Ok(())
            }
        }
    }

    async fn invalidate(&self, identifier: &str) -> CacheResult<()> {
        let key = self.build_key(identifier);
        let mut conn = self.client.clone();

        match conn.del::<_, i32>(&key).await {
            Ok(deleted) => {
                if deleted > 0 {
                    debug!(identifier, "Cache INVALIDATE");
                }
                Ok(())
            }
            Err(e) => {
                warn!(identifier, error = %e, "Redis DEL error");
                Ok(())
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
