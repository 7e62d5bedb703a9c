//! Read-cache service for popular posts.
//!
//! ```text
//! CacheStore (enum)                 <- dispatch over providers
//!   |- Redis(RedisCacheStore)       <- ConnectionManager-based async Redis
//!   '- Memory(InMemoryCacheStore)   <- HashMap substitute for tests/dev
//! ```
//!
//! The store is an injected capability, not a singleton: handlers receive a
//! [`PopularityCacheWriter`] through application state, and tests swap in
//! the in-memory provider. TTL is a provider option, not a hardcoded
//! absence of expiry.

pub mod error;
pub mod memory;
pub mod provider;
pub mod redis;
pub mod service;
pub mod writer;

pub use self::error::CacheError;
pub use self::memory::InMemoryCacheStore;
pub use self::provider::CacheStore;
pub use self::redis::RedisCacheStore;
pub use self::service::CacheService;
pub use self::writer::PopularityCacheWriter;
