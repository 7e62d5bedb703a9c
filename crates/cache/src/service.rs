use async_trait::async_trait;

use crate::error::CacheError;

/// Key-value cache capability.
///
/// The vote service only ever writes through this interface; reads exist
/// for the future read path and for test assertions.
#[async_trait]
pub trait CacheService {
    /// Unconditional overwrite of `key`, applying the provider's
    /// configured TTL if it has one.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Point lookup of `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
}
