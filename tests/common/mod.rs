#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use shortlink::application::services::LinkService;
use shortlink::domain::entities::LinkRecord;
use shortlink::domain::repositories::LinkRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::cache::{CacheError, CacheResult, CacheService};
use shortlink::state::AppState;

/// In-memory link store with call counting, used in place of PostgreSQL.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    records: Mutex<Vec<LinkRecord>>,
    pub find_by_code_calls: AtomicUsize,
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, record: LinkRecord) -> Result<(), AppError> {
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.code == record.code) {
            return Err(AppError::store(
                "Unique constraint violation",
                json!({ "constraint": "links_code_key" }),
            ));
        }

        records.push(record);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkRecord>, AppError> {
        self.find_by_code_calls.fetch_add(1, Ordering::SeqCst);
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.code == code).cloned())
    }

    async fn find_by_default_url(
        &self,
        default_url: &str,
    ) -> Result<Option<LinkRecord>, AppError> {
        let records = self.records.lock().unwrap();
        Ok(records.iter().find(|r| r.default_url == default_url).cloned())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// In-memory cache, used in place of Redis.
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryCache {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheService for InMemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache that fails every call, simulating a Redis outage.
pub struct BrokenCache;

#[async_trait]
impl CacheService for BrokenCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Builds handler state over in-memory gateways, returning the fakes for
/// assertions.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>, Arc<InMemoryCache>) {
    let links = Arc::new(InMemoryLinkRepository::default());
    let cache = Arc::new(InMemoryCache::default());
    let state = create_test_state_with_cache(links.clone(), cache.clone());
    (state, links, cache)
}

/// Builds handler state with a caller-supplied cache implementation.
pub fn create_test_state_with_cache(
    links: Arc<InMemoryLinkRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let link_service = Arc::new(LinkService::new(links.clone(), cache.clone(), None));

    AppState {
        link_service,
        links,
        cache,
        base_url: "http://localhost:3000".to_string(),
    }
}
