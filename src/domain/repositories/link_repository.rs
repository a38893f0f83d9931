//! Repository trait for short link data access.

use crate::domain::entities::LinkRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Gateway to the persistent link store.
///
/// "Not found" is an ordinary outcome (`Ok(None)`); only infrastructure
/// failures surface as [`AppError::Store`]. The service relies on this
/// distinction when deciding between a 404 and a propagated failure.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists a new link record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including a short
    /// code collision against the UNIQUE constraint.
    async fn insert(&self, record: LinkRecord) -> Result<(), AppError>;

    /// Finds a record by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, AppError>;

    /// Finds a record by its default destination URL.
    ///
    /// Used by the creation path to keep creation idempotent per default URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_default_url(&self, default_url: &str)
        -> Result<Option<LinkRecord>, AppError>;

    /// Checks whether the store is reachable.
    ///
    /// Used by the health endpoint to report store status.
    async fn health_check(&self) -> bool;
}
