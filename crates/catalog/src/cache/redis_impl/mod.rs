//! Redis cache backend implementation.
//!
//! Provides a distributed cache using Redis for multi-instance deployments.
//! Every instance pointed at the same Redis sees the same invalidations.

mod cache;
mod error;

pub use cache::RedisCache;
