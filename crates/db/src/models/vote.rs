//! Vote models.

use serde::Serialize;
use sqlx::FromRow;

use agora_core::error::CoreError;
use agora_core::types::{DbId, Timestamp};
use agora_core::vote::VoteType;

/// A row from the `votes` table.
///
/// Identity is the (user_id, post_id) pair, enforced by
/// `uq_votes_user_id_post_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub user_id: DbId,
    pub post_id: DbId,
    /// Stored direction literal, `'UP'` or `'DOWN'` (CHECK-constrained).
    pub vote_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Vote {
    /// The typed direction of this vote.
    pub fn direction(&self) -> Result<VoteType, CoreError> {
        self.vote_type.parse()
    }
}
