//! Domain layer containing business entities and data-access contracts.
//!
//! - [`entities`] - core business data structures
//! - [`repositories`] - data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation
//! layers; repository traits are implemented by the infrastructure layer and
//! consumed by the application services.

pub mod entities;
pub mod repositories;
