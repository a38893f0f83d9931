//! Infrastructure layer for external integrations.
//!
//! Implements the gateways defined by the domain layer:
//!
//! - [`cache`] - caching abstractions (Redis and no-op implementations)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
