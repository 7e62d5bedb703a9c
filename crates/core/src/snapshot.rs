//! Denormalized read snapshots of popular posts.
//!
//! A snapshot is advisory: the durable vote collection stays the source of
//! truth, and a stale snapshot is tolerated rather than evicted.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};
use crate::vote::VoteType;

/// Minimum aggregate score at which a post becomes eligible for caching.
pub const CACHE_AFTER_SCORE: i64 = 1;

/// Whether a recomputed score qualifies the post for a snapshot write.
///
/// Scores that drop back below the threshold never trigger an eviction;
/// over-caching is accepted behavior.
pub fn qualifies_for_cache(score: i64) -> bool {
    score >= CACHE_AFTER_SCORE
}

/// Cache key for a post snapshot.
pub fn post_cache_key(post_id: &str) -> String {
    format!("post:{post_id}")
}

/// A denormalized, read-optimized copy of a post, taken at the moment a
/// vote mutation pushed its score to or past the caching threshold.
///
/// `current_vote` is the *acting user's* resulting vote state at write
/// time, even though the key is shared by all readers of the post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedPostSnapshot {
    pub id: DbId,
    pub title: String,
    /// Post content flattened to a single text value.
    pub content: String,
    pub author_username: String,
    pub created_at: Timestamp,
    /// The acting user's vote after reconciliation, absent when the
    /// reconciliation toggled the vote off.
    pub current_vote: Option<VoteType>,
}

/// Flatten structured post content to a single text value.
///
/// String content passes through unchanged; any other JSON shape (rich
/// editor output is an object) is serialized to its canonical JSON text.
pub fn flatten_content(content: &serde_json::Value) -> String {
    match content {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn threshold_is_inclusive() {
        assert!(!qualifies_for_cache(0));
        assert!(!qualifies_for_cache(-3));
        assert!(qualifies_for_cache(1));
        assert!(qualifies_for_cache(42));
    }

    #[test]
    fn cache_key_is_post_prefixed() {
        assert_eq!(post_cache_key("clx123"), "post:clx123");
    }

    #[test]
    fn plain_text_content_passes_through() {
        let content = json!("hello world");
        assert_eq!(flatten_content(&content), "hello world");
    }

    #[test]
    fn structured_content_serializes_to_json_text() {
        let content = json!({ "blocks": [{ "type": "paragraph", "text": "hi" }] });
        let flat = flatten_content(&content);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&flat).unwrap(),
            content
        );
    }

    #[test]
    fn null_content_flattens_to_null_literal() {
        assert_eq!(flatten_content(&serde_json::Value::Null), "null");
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let snapshot = CachedPostSnapshot {
            id: "clxpost1".into(),
            title: "First post".into(),
            content: "hello".into(),
            author_username: "ada".into(),
            created_at: chrono::Utc::now(),
            current_vote: Some(VoteType::Up),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["authorUsername"], "ada");
        assert_eq!(value["currentVote"], "UP");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn snapshot_with_no_vote_serializes_null_current_vote() {
        let snapshot = CachedPostSnapshot {
            id: "clxpost1".into(),
            title: "First post".into(),
            content: "hello".into(),
            author_username: "ada".into(),
            created_at: chrono::Utc::now(),
            current_vote: None,
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value["currentVote"].is_null());
    }
}
