//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Gateway to the resolution cache.
///
/// Keys are opaque strings built by the service from the
/// `(code, country, language)` triple; values are resolved destination URLs.
/// Implementations must be thread-safe and fail open: a broken cache must
/// degrade to store lookups, never block resolution.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - no-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached destination URL.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit; an empty string is a recorded
    ///   "unresolvable" signal, interpreted by the service
    /// - `Ok(None)` on cache miss
    ///
    /// Production implementations log backend errors and report a miss
    /// instead of returning `Err`; the service tolerates both.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a destination URL under the given key.
    ///
    /// A `ttl_seconds` of `None` (or zero) stores the entry without expiry.
    ///
    /// # Errors
    ///
    /// Production implementations log errors and return `Ok(())`; the write
    /// path is best-effort and must not disrupt request flow.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;
}
