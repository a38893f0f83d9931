//! Core domain entities representing the business data model.
//!
//! - [`LinkRecord`] - a short link with its per-locale destination overrides

pub mod link;

pub use link::LinkRecord;
