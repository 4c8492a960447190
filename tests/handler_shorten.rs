mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_shorten_generates_code() {
    let server = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let code = json["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(json["originalUrl"], "https://example.com/a");
    assert_eq!(json["shortUrl"], format!("http://localhost:3000/s/{code}"));
    assert_eq!(json["clickCount"], 0);
    assert_eq!(json["active"], true);
    assert!(json["description"].is_null());
    assert!(json["id"].is_i64());
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_shorten_with_custom_code_and_description() {
    let server = common::create_test_server();

    let json = common::shorten(
        &server,
        json!({
            "url": "https://example.com/b",
            "customCode": "custom1",
            "description": "landing page"
        }),
    )
    .await;

    assert_eq!(json["shortCode"], "custom1");
    assert_eq!(json["description"], "landing page");
    assert_eq!(json["shortUrl"], "http://localhost:3000/s/custom1");
}

#[tokio::test]
async fn test_shorten_duplicate_custom_code() {
    let server = common::create_test_server();

    common::shorten(
        &server,
        json!({ "url": "https://example.com/a", "customCode": "custom1" }),
    )
    .await;

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/b", "customCode": "custom1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Custom code already exists");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid URL format");
}

#[tokio::test]
async fn test_shorten_rejects_control_characters() {
    let server = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_shorten_rejects_ftp_scheme() {
    let server = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_malformed_custom_code() {
    let server = common::create_test_server();

    for code in ["abc", "has-dash", "elevenchars"] {
        let response = server
            .post("/api/v1/shorten")
            .json(&json!({ "url": "https://example.com/a", "customCode": code }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["error"]["code"],
            "validation_error",
            "{code}"
        );
    }
}

#[tokio::test]
async fn test_shorten_empty_custom_code_generates() {
    let server = common::create_test_server();

    let json = common::shorten(
        &server,
        json!({ "url": "https://example.com/a", "customCode": "" }),
    )
    .await;

    assert_eq!(json["shortCode"].as_str().unwrap().len(), 6);
}

#[tokio::test]
async fn test_shorten_same_url_twice_gives_distinct_codes() {
    let server = common::create_test_server();

    let first = common::shorten_url(&server, "https://example.com/same").await;
    let second = common::shorten_url(&server, "https://example.com/same").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_shorten_missing_url_field() {
    let server = common::create_test_server();

    let response = server
        .post("/api/v1/shorten")
        .json(&json!({ "description": "no url" }))
        .await;

    assert!(response.status_code().is_client_error());
}
