//! Provider dispatch for the cache service.

use async_trait::async_trait;

use crate::error::CacheError;
use crate::memory::InMemoryCacheStore;
use crate::redis::RedisCacheStore;
use crate::service::CacheService;

/// The configured cache provider. Enum dispatch, no trait objects.
#[derive(Clone)]
pub enum CacheStore {
    Redis(RedisCacheStore),
    Memory(InMemoryCacheStore),
}

impl CacheStore {
    /// Connect the Redis provider.
    pub async fn connect_redis(url: &str, ttl_secs: Option<u64>) -> Result<Self, CacheError> {
        Ok(Self::Redis(RedisCacheStore::connect(url, ttl_secs).await?))
    }

    /// An in-memory provider for tests and local development.
    pub fn in_memory() -> Self {
        Self::Memory(InMemoryCacheStore::new())
    }
}

#[async_trait]
impl CacheService for CacheStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        match self {
            CacheStore::Redis(store) => store.set(key, value).await,
            CacheStore::Memory(store) => store.set(key, value).await,
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self {
            CacheStore::Redis(store) => store.get(key).await,
            CacheStore::Memory(store) => store.get(key).await,
        }
    }
}
