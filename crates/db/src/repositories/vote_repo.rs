//! Repository for the `votes` table.
//!
//! Every mutation is keyed by the (user_id, post_id) identity pair, so
//! concurrent requests for the same pair serialize through the
//! `uq_votes_user_id_post_id` constraint rather than application locks.

use sqlx::PgPool;

use agora_core::vote::VoteType;

use crate::models::vote::Vote;

/// Column list for `votes` queries.
const COLUMNS: &str = "user_id, post_id, vote_type, created_at, updated_at";

/// CRUD operations on a user's vote for a post.
pub struct VoteRepo;

impl VoteRepo {
    /// Point lookup of one user's vote on one post.
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        post_id: &str,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes \
             WHERE user_id = $1 AND post_id = $2"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(post_id)
            .fetch_optional(pool)
            .await
    }

    /// The full vote collection for a post.
    pub async fn list_for_post(pool: &PgPool, post_id: &str) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE post_id = $1");
        sqlx::query_as::<_, Vote>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Create a vote, or overwrite its direction if the identity pair
    /// already exists.
    ///
    /// Uses `INSERT ... ON CONFLICT (user_id, post_id) DO UPDATE` so a
    /// concurrent duplicate create degrades to an update instead of a
    /// constraint error.
    pub async fn upsert(
        pool: &PgPool,
        user_id: &str,
        post_id: &str,
        vote_type: VoteType,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (user_id, post_id, vote_type) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, post_id) DO UPDATE SET \
                vote_type = EXCLUDED.vote_type, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(post_id)
            .bind(vote_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Update the direction of an existing vote in place.
    pub async fn update_type(
        pool: &PgPool,
        user_id: &str,
        post_id: &str,
        vote_type: VoteType,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!(
            "UPDATE votes \
             SET vote_type = $3, updated_at = NOW() \
             WHERE user_id = $1 AND post_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(post_id)
            .bind(vote_type.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a user's vote on a post. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, user_id: &str, post_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
