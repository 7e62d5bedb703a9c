//! The vote-casting endpoint.
//!
//! One request reconciles the acting user's vote on a post, recomputes the
//! post's aggregate score, and conditionally refreshes the popularity
//! cache. The request sequence (read prior state, mutate, recompute,
//! cache) is never reordered; all same-pair concurrency control is the
//! votes table's identity constraint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::patch;
use axum::{Json, Router};
use serde::Serialize;
use validator::Validate;

use agora_core::error::CoreError;
use agora_core::snapshot::{flatten_content, CachedPostSnapshot};
use agora_core::vote::{reconcile, score, CastVoteRequest, VoteTransition, VoteType};
use agora_db::repositories::{PostRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body of the vote endpoint: the acting user's resulting vote
/// state and the recomputed aggregate score.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub current_vote: Option<VoteType>,
    pub score: i64,
}

/// PATCH /api/v1/posts/vote
///
/// Three-way reconciliation: a first vote creates a row, repeating the
/// same direction toggles it off, the opposite direction flips the row in
/// place. At or above the popularity threshold the post's read snapshot
/// is (re)written.
pub async fn cast_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    // Pre-mutation reads: the user's prior vote, the post, and the vote
    // collection the score fold runs over.
    let existing = VoteRepo::find(&state.pool, &auth.user_id, &input.post_id).await?;

    let post = PostRepo::find_with_author(&state.pool, &input.post_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Post",
                id: input.post_id.clone(),
            })
        })?;

    let votes = VoteRepo::list_for_post(&state.pool, &input.post_id).await?;

    let prior = existing.as_ref().map(|v| v.direction()).transpose()?;
    let outcome = reconcile(prior, input.vote_type);

    // Exactly one durable mutation per request.
    match outcome.transition {
        VoteTransition::Create(direction) => {
            VoteRepo::upsert(&state.pool, &auth.user_id, &input.post_id, direction).await?;
        }
        VoteTransition::Remove(_) => {
            VoteRepo::delete(&state.pool, &auth.user_id, &input.post_id).await?;
        }
        VoteTransition::Flip { to, .. } => {
            VoteRepo::update_type(&state.pool, &auth.user_id, &input.post_id, to).await?;
        }
    }

    // Score = fold over the pre-mutation collection, plus the one applied
    // delta. Votes landed by other users between the read and this point
    // are missed for one cycle; the snapshot is advisory, so the
    // transient undercount is accepted.
    let directions = votes
        .iter()
        .map(|v| v.direction())
        .collect::<Result<Vec<_>, _>>()?;
    let recomputed = score(directions) + outcome.transition.score_delta();

    tracing::info!(
        user_id = %auth.user_id,
        post_id = %input.post_id,
        transition = ?outcome.transition,
        score = recomputed,
        "Vote reconciled"
    );

    let snapshot = CachedPostSnapshot {
        id: post.id,
        title: post.title,
        content: post
            .content
            .as_ref()
            .map(flatten_content)
            .unwrap_or_default(),
        author_username: post.author_username,
        created_at: post.created_at,
        current_vote: outcome.resulting_vote,
    };
    state.cache.maybe_cache(recomputed, &snapshot).await?;

    Ok(Json(DataResponse {
        data: VoteOutcome {
            current_vote: outcome.resulting_vote,
            score: recomputed,
        },
    }))
}

/// Mount post routes (intended under `/api/v1/posts`).
pub fn router() -> Router<AppState> {
    Router::new().route("/vote", patch(cast_vote))
}
