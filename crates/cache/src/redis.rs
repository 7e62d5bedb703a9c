//! Redis-backed cache provider.

use ::redis::aio::ConnectionManager;
use ::redis::AsyncCommands;
use async_trait::async_trait;

use crate::error::CacheError;
use crate::service::CacheService;

/// Cache provider over an async Redis connection manager.
///
/// The connection manager multiplexes and reconnects internally, so the
/// store is cheap to clone and share across requests.
#[derive(Clone)]
pub struct RedisCacheStore {
    conn: ConnectionManager,
    /// Expiry applied to every write; `None` means keys never expire.
    ttl_secs: Option<u64>,
}

impl RedisCacheStore {
    /// Connect to the Redis instance at `url`.
    pub async fn connect(url: &str, ttl_secs: Option<u64>) -> Result<Self, CacheError> {
        let client = ::redis::Client::open(url)?;
        let conn = client.get_connection_manager().await?;
        Ok(Self { conn, ttl_secs })
    }
}

#[async_trait]
impl CacheService for RedisCacheStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        match self.ttl_secs {
            Some(secs) => conn.set_ex::<_, _, ()>(key, value, secs).await?,
            None => conn.set::<_, _, ()>(key, value).await?,
        }
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}
