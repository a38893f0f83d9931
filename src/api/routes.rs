//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`  - short link redirect
//! - `POST /shorten` - create a short link
//! - `GET  /health`  - health check: store, cache
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = routes(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Routes without the middleware wrappers, also used by tests that need a
/// plain [`Router`].
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
}
