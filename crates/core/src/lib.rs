//! Domain core for the agora vote-casting service.
//!
//! Pure types and decision logic only; persistence and transport live in
//! `agora-db` and `agora-api`, the cache service in `agora-cache`.

pub mod error;
pub mod snapshot;
pub mod types;
pub mod vote;
