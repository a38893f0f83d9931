//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating gateway calls and business
//! rules. Services consume the repository and cache traits and provide a
//! clean API for HTTP handlers.
//!
//! - [`services::link_service::LinkService`] - link creation and cache-first resolution

pub mod services;
