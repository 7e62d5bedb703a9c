//! Post models.

use serde::Serialize;
use sqlx::FromRow;

use agora_core::types::{DbId, Timestamp};

/// A row from the `posts` table joined with its author's display name.
///
/// The vote collection is fetched separately via `VoteRepo::list_for_post`;
/// posts never carry a stored score.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostWithAuthor {
    pub id: DbId,
    pub title: String,
    /// Structured editor output or a plain JSON string; may be NULL.
    pub content: Option<serde_json::Value>,
    pub author_id: DbId,
    pub author_username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
