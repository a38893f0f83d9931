//! Caching layer for fast resolution lookups.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - production Redis-backed cache
//! - [`NullCache`] - no-op implementation for testing/disabled caching

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
