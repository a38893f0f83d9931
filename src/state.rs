//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;

/// Handler state: the link service plus the gateway handles the health
/// endpoint reports on.
///
/// Gateways are explicit dependencies wired once at startup; nothing in the
/// request path reaches for global state.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub links: Arc<dyn LinkRepository>,
    pub cache: Arc<dyn CacheService>,
    /// Public base URL prepended to codes in shorten responses.
    pub base_url: String,
}
