//! Redis-backed total-sum cache for multi-server deployments.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::TotalSumCache;

const DEFAULT_CACHE_KEY: &str = "subledger:cache:subscriptions_total_sum";

/// Redis-backed total-sum cache.
///
/// DEL on an absent key is a Redis no-op, which gives the required
/// "invalidate on cache miss must not fail" behavior for free.
#[derive(Clone)]
pub struct RedisTotalSumCache {
    conn: MultiplexedConnection,
    key: String,
}

impl RedisTotalSumCache {
    /// Creates a cache on the default key.
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            key: DEFAULT_CACHE_KEY.to_string(),
        }
    }

    /// Overrides the cache key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

fn cache_error(err: redis::RedisError) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("Cache error: {}", err))
}

#[async_trait]
impl TotalSumCache for RedisTotalSumCache {
    async fn get(&self) -> Result<Option<u64>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get(&self.key).await.map_err(cache_error)
    }

    async fn set(&self, total: u64) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(&self.key, total)
            .await
            .map_err(cache_error)
    }

    async fn invalidate(&self) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(&self.key).await.map_err(cache_error)
    }
}
