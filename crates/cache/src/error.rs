#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache command failed: {0}")]
    Command(#[from] ::redis::RedisError),

    #[error("Snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
