//! Link creation and resolution service.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, warn};

use crate::domain::entities::LinkRecord;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::generate_code;

/// Separator for the `(code, country, language)` cache key.
///
/// Generated codes are base62-only and locale tags never contain control
/// characters, so distinct triples cannot serialize to the same key.
const KEY_SEPARATOR: char = '\u{1F}';

/// Builds the cache key for a resolution triple.
fn resolution_key(code: &str, country_code: &str, language_code: &str) -> String {
    let mut key = String::with_capacity(code.len() + country_code.len() + language_code.len() + 2);
    key.push_str(code);
    key.push(KEY_SEPARATOR);
    key.push_str(country_code);
    key.push(KEY_SEPARATOR);
    key.push_str(language_code);
    key
}

/// Service orchestrating link creation and cache-first resolution.
///
/// The store and cache gateways are injected at construction; the service
/// holds no mutable state of its own, so concurrent invocations need no
/// internal locking.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    cache_ttl_seconds: Option<u64>,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// A `cache_ttl_seconds` of `None` caches resolved destinations without
    /// expiry.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        cache_ttl_seconds: Option<u64>,
    ) -> Self {
        Self {
            links,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Creates a short link for a default URL plus locale override maps.
    ///
    /// # Deduplication
    ///
    /// Creation is idempotent per default URL: if a record for the same
    /// `default_url` already exists, its code is returned and the override
    /// maps of the new request are ignored.
    ///
    /// # Code generation
    ///
    /// The code is a random base62-encoded 128-bit value. There is no
    /// uniqueness re-check and no retry; a collision at insert time surfaces
    /// as the store's constraint violation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the store read or write fails.
    pub async fn create_link(
        &self,
        default_url: String,
        by_country: HashMap<String, String>,
        by_language: HashMap<String, String>,
    ) -> Result<String, AppError> {
        if let Some(existing) = self.links.find_by_default_url(&default_url).await? {
            debug!("Reusing existing link {} for {}", existing.code, default_url);
            return Ok(existing.code);
        }

        let record = LinkRecord::new(generate_code(), default_url, by_country, by_language);
        let code = record.code.clone();

        self.links.insert(record).await?;

        Ok(code)
    }

    /// Resolves a short code to a destination URL using the locale hints.
    ///
    /// # Cache strategy
    ///
    /// The cache is consulted first under the `(code, country, language)`
    /// key. A hit returns immediately without touching the store; a hit with
    /// an explicitly empty value is a recorded "unresolvable" signal and
    /// fails with [`AppError::NotFound`]. A miss or a cache error falls
    /// through to the store, and the computed destination is written back
    /// fire-and-forget so a slow or broken cache can never delay the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code, and
    /// [`AppError::Store`] if the store lookup fails.
    pub async fn resolve_link(
        &self,
        code: &str,
        country_code: &str,
        language_code: &str,
    ) -> Result<String, AppError> {
        let key = resolution_key(code, country_code, language_code);

        match self.cache.get(&key).await {
            Ok(Some(destination)) if destination.is_empty() => {
                return Err(AppError::not_found(
                    "Short link not found",
                    json!({ "code": code }),
                ));
            }
            Ok(Some(destination)) => {
                debug!("Resolved {} from cache", code);
                return Ok(destination);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Cache lookup failed, falling back to store: {}", e);
            }
        }

        let record = self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })?;

        let destination = record.destination_for(country_code, language_code).to_string();

        let cache = self.cache.clone();
        let ttl = self.cache_ttl_seconds;
        let value = destination.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set(&key, &value, ttl).await {
                error!("Failed to cache resolved destination: {}", e);
            }
        });

        Ok(destination)
    }
}
