mod common;

use axum_test::TestServer;
use serde_json::{json, Value};
use shortlink::api::routes::routes;

fn test_server() -> TestServer {
    let (state, _links, _cache) = common::create_test_state();
    TestServer::new(routes(state)).unwrap()
}

#[tokio::test]
async fn test_shorten_creates_link() {
    let server = test_server();

    let response = server
        .post("/shorten")
        .json(&json!({
            "default_url": "https://example.com",
            "by_country": { "VN": "https://example.com/vn" },
            "by_language": { "vi-VN": "https://example.com/vi" }
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let code = body["code"].as_str().unwrap();
    assert!(!code.is_empty());
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        body["short_url"].as_str().unwrap(),
        format!("http://localhost:3000/{}", code)
    );
}

#[tokio::test]
async fn test_shorten_omitted_maps_default_to_empty() {
    let server = test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "default_url": "https://example.com" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_shorten_is_idempotent_per_default_url() {
    let server = test_server();

    let first = server
        .post("/shorten")
        .json(&json!({ "default_url": "https://example.com" }))
        .await;
    first.assert_status_ok();

    // Same default URL with different override maps returns the same code.
    let second = server
        .post("/shorten")
        .json(&json!({
            "default_url": "https://example.com",
            "by_country": { "DE": "https://example.com/de" }
        }))
        .await;
    second.assert_status_ok();

    let first_body: Value = first.json();
    let second_body: Value = second.json();
    assert_eq!(first_body["code"], second_body["code"]);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let server = test_server();

    let a: Value = server
        .post("/shorten")
        .json(&json!({ "default_url": "https://example.com/a" }))
        .await
        .json();
    let b: Value = server
        .post("/shorten")
        .json(&json!({ "default_url": "https://example.com/b" }))
        .await
        .json();

    assert_ne!(a["code"], b["code"]);
}

#[tokio::test]
async fn test_shorten_rejects_invalid_default_url() {
    let server = test_server();

    let response = server
        .post("/shorten")
        .json(&json!({ "default_url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_invalid_override_url() {
    let server = test_server();

    let response = server
        .post("/shorten")
        .json(&json!({
            "default_url": "https://example.com",
            "by_country": { "VN": "not-a-url" }
        }))
        .await;

    response.assert_status_bad_request();
}
