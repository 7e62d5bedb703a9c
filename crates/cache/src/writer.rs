//! The popularity cache writer: decides whether a recomputed score earns a
//! snapshot write, and performs it.

use agora_core::snapshot::{post_cache_key, qualifies_for_cache, CachedPostSnapshot};

use crate::error::CacheError;
use crate::provider::CacheStore;
use crate::service::CacheService;

/// Writes denormalized post snapshots once a post crosses the popularity
/// threshold.
///
/// Snapshots are overwritten unconditionally and never evicted when a
/// score later drops below the threshold; staleness is tolerated because
/// the durable vote collection remains the source of truth.
#[derive(Clone)]
pub struct PopularityCacheWriter {
    store: CacheStore,
}

impl PopularityCacheWriter {
    pub fn new(store: CacheStore) -> Self {
        Self { store }
    }

    /// Write the snapshot keyed `post:{id}` if `score` meets the caching
    /// threshold; otherwise do nothing.
    pub async fn maybe_cache(
        &self,
        score: i64,
        snapshot: &CachedPostSnapshot,
    ) -> Result<(), CacheError> {
        if !qualifies_for_cache(score) {
            tracing::debug!(
                post_id = %snapshot.id,
                score,
                "Score below caching threshold, snapshot not written"
            );
            return Ok(());
        }

        let key = post_cache_key(&snapshot.id);
        let payload = serde_json::to_string(snapshot)?;
        self.store.set(&key, &payload).await?;

        tracing::debug!(key = %key, score, "Post snapshot cached");
        Ok(())
    }
}
