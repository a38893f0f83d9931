//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Country hint header, as set by edge proxies such as Cloudflare.
const COUNTRY_HEADER: &str = "cf-ipcountry";
/// Language hint header, matched verbatim against the language override map.
const LANGUAGE_HEADER: &str = "accept-language";

/// Redirects a short code to its locale-resolved destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Locale hints
///
/// The country code is read from `CF-IPCountry` and the language tag from
/// `Accept-Language`; both default to empty when absent. The language
/// override wins over the country override, and the default URL is the
/// universal fallback.
///
/// # Cache strategy
///
/// - Cache hit: immediate redirect, no store access
/// - Cache miss: store lookup, fire-and-forget cache write
/// - Cache error: logged, falls back to the store
///
/// # Errors
///
/// Returns 404 Not Found if the code has no record.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let country_code = header_value(&headers, COUNTRY_HEADER);
    let language_code = header_value(&headers, LANGUAGE_HEADER);

    let destination = state
        .link_service
        .resolve_link(&code, country_code, language_code)
        .await?;

    Ok(Redirect::temporary(&destination))
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
