//! Vote reconciliation: deriving the correct persisted vote row from a
//! user's prior vote state and a newly requested direction.
//!
//! The decision logic here is pure. Applying the resulting
//! [`VoteTransition`] against the store and recomputing the score happens
//! at the HTTP boundary, which keeps this module trivially testable.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::DbId;

/// A vote direction. The only two values a user's opinion on a post may take.
///
/// Serializes to the wire literals `"UP"` / `"DOWN"`, which are also the
/// TEXT values stored in the `votes.vote_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    /// The stored TEXT representation.
    pub fn as_str(self) -> &'static str {
        match self {
            VoteType::Up => "UP",
            VoteType::Down => "DOWN",
        }
    }

    /// Contribution of one vote of this direction to a post score.
    pub fn weight(self) -> i64 {
        match self {
            VoteType::Up => 1,
            VoteType::Down => -1,
        }
    }
}

impl std::str::FromStr for VoteType {
    type Err = CoreError;

    /// Parse a stored TEXT value back into a direction.
    ///
    /// The `votes.vote_type` CHECK constraint guarantees this succeeds for
    /// every row this service wrote; any other value is data corruption.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "UP" => Ok(VoteType::Up),
            "DOWN" => Ok(VoteType::Down),
            other => Err(CoreError::Internal(format!(
                "Unknown vote type in store: {other}"
            ))),
        }
    }
}

/// The single durable-store mutation a vote request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTransition {
    /// No prior vote: create one with the requested direction.
    Create(VoteType),
    /// Prior vote in the same direction: toggle it off.
    Remove(VoteType),
    /// Prior vote in the opposite direction: update it in place.
    Flip { from: VoteType, to: VoteType },
}

impl VoteTransition {
    /// How much the mutation shifts the post score relative to the
    /// pre-mutation vote collection.
    ///
    /// The score fold runs over the collection fetched *before* the
    /// mutation, so the recomputed score is `score(pre) + delta`.
    pub fn score_delta(self) -> i64 {
        match self {
            VoteTransition::Create(t) => t.weight(),
            VoteTransition::Remove(t) => -t.weight(),
            VoteTransition::Flip { from, to } => to.weight() - from.weight(),
        }
    }
}

/// Outcome of reconciling a prior vote state with a requested direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    /// The durable mutation to apply.
    pub transition: VoteTransition,
    /// The acting user's vote on the post once the mutation lands.
    pub resulting_vote: Option<VoteType>,
}

/// Decide the persisted state transition for a vote request.
///
/// Three-way branch on the prior vote:
/// - no prior vote: create a vote with the requested direction
/// - same direction again: toggle-off, the vote row is deleted
/// - opposite direction: the vote row's direction is updated in place
///
/// At most one vote row exists per (user, post) pair, so exactly one
/// store mutation follows from the returned transition.
pub fn reconcile(existing: Option<VoteType>, requested: VoteType) -> Reconciliation {
    match existing {
        None => Reconciliation {
            transition: VoteTransition::Create(requested),
            resulting_vote: Some(requested),
        },
        Some(prior) if prior == requested => Reconciliation {
            transition: VoteTransition::Remove(prior),
            resulting_vote: None,
        },
        Some(prior) => Reconciliation {
            transition: VoteTransition::Flip {
                from: prior,
                to: requested,
            },
            resulting_vote: Some(requested),
        },
    }
}

/// Fold a vote collection into an aggregate score: UP counts +1, DOWN -1.
///
/// A post's score is always derived from its current vote collection,
/// never stored redundantly.
pub fn score<I>(votes: I) -> i64
where
    I: IntoIterator<Item = VoteType>,
{
    votes.into_iter().map(VoteType::weight).sum()
}

/// Payload of the vote-casting endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteRequest {
    /// Id of the post being voted on.
    #[validate(length(min = 1, message = "postId must not be empty"))]
    pub post_id: DbId,
    /// Requested direction, `"UP"` or `"DOWN"`.
    pub vote_type: VoteType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_vote_creates() {
        let outcome = reconcile(None, VoteType::Up);
        assert_eq!(outcome.transition, VoteTransition::Create(VoteType::Up));
        assert_eq!(outcome.resulting_vote, Some(VoteType::Up));
    }

    #[test]
    fn repeated_vote_toggles_off() {
        let outcome = reconcile(Some(VoteType::Up), VoteType::Up);
        assert_eq!(outcome.transition, VoteTransition::Remove(VoteType::Up));
        assert_eq!(outcome.resulting_vote, None);
    }

    #[test]
    fn opposite_vote_flips_in_place() {
        let outcome = reconcile(Some(VoteType::Down), VoteType::Up);
        assert_eq!(
            outcome.transition,
            VoteTransition::Flip {
                from: VoteType::Down,
                to: VoteType::Up,
            }
        );
        assert_eq!(outcome.resulting_vote, Some(VoteType::Up));
    }

    #[test]
    fn toggle_round_trips_to_no_vote() {
        // Casting X, then X again, ends with no vote.
        let first = reconcile(None, VoteType::Down);
        let second = reconcile(first.resulting_vote, VoteType::Down);
        assert_eq!(second.resulting_vote, None);
    }

    #[test]
    fn score_is_up_minus_down() {
        let votes = [VoteType::Up, VoteType::Up, VoteType::Down, VoteType::Up];
        assert_eq!(score(votes), 2);
    }

    #[test]
    fn score_is_order_independent() {
        let forward = [VoteType::Up, VoteType::Down, VoteType::Up];
        let mut reversed = forward;
        reversed.reverse();
        assert_eq!(score(forward), score(reversed));
    }

    #[test]
    fn score_of_empty_collection_is_zero() {
        assert_eq!(score([]), 0);
    }

    #[test]
    fn create_delta_matches_direction_weight() {
        assert_eq!(VoteTransition::Create(VoteType::Up).score_delta(), 1);
        assert_eq!(VoteTransition::Create(VoteType::Down).score_delta(), -1);
    }

    #[test]
    fn remove_delta_undoes_direction_weight() {
        assert_eq!(VoteTransition::Remove(VoteType::Up).score_delta(), -1);
        assert_eq!(VoteTransition::Remove(VoteType::Down).score_delta(), 1);
    }

    #[test]
    fn flip_delta_swings_by_two() {
        let up = VoteTransition::Flip {
            from: VoteType::Down,
            to: VoteType::Up,
        };
        let down = VoteTransition::Flip {
            from: VoteType::Up,
            to: VoteType::Down,
        };
        assert_eq!(up.score_delta(), 2);
        assert_eq!(down.score_delta(), -2);
    }

    #[test]
    fn delta_agrees_with_full_refold() {
        // For every prior state and request, score(pre) + delta must equal
        // a fresh fold over the post-mutation collection.
        let others = [VoteType::Up, VoteType::Down, VoteType::Up];
        for existing in [None, Some(VoteType::Up), Some(VoteType::Down)] {
            for requested in [VoteType::Up, VoteType::Down] {
                let pre: Vec<VoteType> =
                    others.iter().copied().chain(existing).collect();
                let outcome = reconcile(existing, requested);

                let mut post: Vec<VoteType> = others.to_vec();
                if let Some(v) = outcome.resulting_vote {
                    post.push(v);
                }

                assert_eq!(
                    score(pre) + outcome.transition.score_delta(),
                    score(post),
                    "existing={existing:?} requested={requested:?}"
                );
            }
        }
    }

    #[test]
    fn vote_type_wire_literals() {
        assert_eq!(serde_json::to_string(&VoteType::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&VoteType::Down).unwrap(), "\"DOWN\"");

        let parsed: VoteType = serde_json::from_str("\"DOWN\"").unwrap();
        assert_eq!(parsed, VoteType::Down);
    }

    #[test]
    fn vote_type_rejects_unknown_wire_value() {
        let result: Result<VoteType, _> = serde_json::from_str("\"SIDEWAYS\"");
        assert!(result.is_err());
    }

    #[test]
    fn stored_text_round_trips() {
        for t in [VoteType::Up, VoteType::Down] {
            assert_eq!(t.as_str().parse::<VoteType>().unwrap(), t);
        }
        assert!("up".parse::<VoteType>().is_err());
    }
}
