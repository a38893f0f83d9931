//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Request to create a short link.
///
/// Override maps are optional; keys are ISO 3166-1 alpha-2 country codes and
/// IETF language tags respectively, matched verbatim at resolution time.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The fallback destination (must be a valid HTTP/HTTPS URL).
    #[validate(url(message = "Invalid URL format"))]
    pub default_url: String,

    /// Country code → destination URL overrides.
    #[serde(default)]
    pub by_country: HashMap<String, String>,

    /// Language tag → destination URL overrides.
    #[serde(default)]
    pub by_language: HashMap<String, String>,
}

/// Response containing the created (or reused) short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
}
