//! Link record entity with per-locale destination overrides.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use uuid::Uuid;

/// A persisted short link.
///
/// Maps a short code to a default destination URL plus optional overrides
/// keyed by ISO 3166-1 alpha-2 country code and IETF language tag. Records
/// are immutable once created; the service never updates or deletes them.
#[derive(Debug, Clone)]
pub struct LinkRecord {
    pub id: Uuid,
    pub code: String,
    pub default_url: String,
    pub by_country: HashMap<String, String>,
    pub by_language: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a record with a fresh identifier and creation timestamp.
    pub fn new(
        code: String,
        default_url: String,
        by_country: HashMap<String, String>,
        by_language: HashMap<String, String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code,
            default_url,
            by_country,
            by_language,
            created_at: Utc::now(),
        }
    }

    /// Picks the destination URL for the given locale hints.
    ///
    /// Priority: language override, then country override, then the default
    /// URL. Matching is exact-string and case-sensitive; a locale tag is
    /// never normalized or reduced to its language-only variant. Always
    /// produces a destination.
    pub fn destination_for(&self, country_code: &str, language_code: &str) -> &str {
        if !language_code.is_empty() {
            if let Some(url) = self.by_language.get(language_code) {
                return url;
            }
        }

        if !country_code.is_empty() {
            if let Some(url) = self.by_country.get(country_code) {
                return url;
            }
        }

        &self.default_url
    }
}
