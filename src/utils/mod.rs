//! Utility functions used across the application.
//!
//! - [`code_generator`] - random base62 short code generation

pub mod code_generator;
