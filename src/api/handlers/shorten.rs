//! Handler for the link creation endpoint.

use axum::{extract::State, Json};
use serde_json::json;
use std::collections::HashMap;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a default URL plus locale override maps.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "default_url": "https://example.com",
///   "by_country": { "VN": "https://example.com/vn" },
///   "by_language": { "vi-VN": "https://example.com/vi" }
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "4HvjKnLCvGq3Zpmxo0cXIj",
///   "short_url": "http://localhost:3000/4HvjKnLCvGq3Zpmxo0cXIj"
/// }
/// ```
///
/// Creation is idempotent per `default_url`: a repeated request returns the
/// existing code.
///
/// # Errors
///
/// Returns 400 Bad Request if any URL is malformed, 500 on store failure.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;
    validate_override_urls("by_country", &payload.by_country)?;
    validate_override_urls("by_language", &payload.by_language)?;

    let code = state
        .link_service
        .create_link(payload.default_url, payload.by_country, payload.by_language)
        .await?;

    let short_url = format!("{}/{}", state.base_url.trim_end_matches('/'), code);

    Ok(Json(ShortenResponse { code, short_url }))
}

/// Checks that every override map value parses as a URL.
fn validate_override_urls(
    field: &str,
    overrides: &HashMap<String, String>,
) -> Result<(), AppError> {
    for (key, value) in overrides {
        if url::Url::parse(value).is_err() {
            return Err(AppError::bad_request(
                "Invalid URL format in override map",
                json!({ "field": field, "key": key }),
            ));
        }
    }

    Ok(())
}
