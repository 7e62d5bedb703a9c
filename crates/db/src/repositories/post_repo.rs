//! Repository for the `posts` table.

use sqlx::PgPool;

use crate::models::post::PostWithAuthor;

/// Column list for `posts` queries, joined with the author row.
const COLUMNS: &str = "\
    p.id, p.title, p.content, p.author_id, \
    u.username AS author_username, \
    p.created_at, p.updated_at";

/// Read access to posts. Posts are created and destroyed elsewhere in the
/// platform; the vote service only ever reads them.
pub struct PostRepo;

impl PostRepo {
    /// Point lookup of a post by id, including the author's display name.
    pub async fn find_with_author(
        pool: &PgPool,
        post_id: &str,
    ) -> Result<Option<PostWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM posts p \
             JOIN users u ON u.id = p.author_id \
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, PostWithAuthor>(&query)
            .bind(post_id)
            .fetch_optional(pool)
            .await
    }
}
