mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/target").await;

    let response = server.get(&format!("/s/{code}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/target").await;

    for _ in 0..3 {
        server
            .get(&format!("/s/{code}"))
            .await
            .assert_status(StatusCode::TEMPORARY_REDIRECT);
    }

    let stats = server
        .get(&format!("/api/v1/urls/{code}/stats"))
        .await
        .json::<Value>();

    assert_eq!(stats["clickCount"], 3);
    assert!(stats["lastAccessedAt"].is_string());
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = common::create_test_server();

    let response = server.get("/s/nosuch1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_inactive_code() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/target").await;

    server
        .put(&format!("/api/v1/urls/{code}"))
        .json(&json!({ "active": false }))
        .await
        .assert_status_ok();

    let inactive = server.get(&format!("/s/{code}")).await;
    inactive.assert_status(StatusCode::NOT_FOUND);

    let unknown = server.get("/s/nosuch1").await;
    unknown.assert_status(StatusCode::NOT_FOUND);

    let inactive = inactive.json::<Value>();
    let unknown = unknown.json::<Value>();
    assert_eq!(inactive["error"]["code"], unknown["error"]["code"]);
    assert_eq!(inactive["error"]["message"], unknown["error"]["message"]);

    let stats = server
        .get(&format!("/api/v1/urls/{code}/stats"))
        .await
        .json::<Value>();
    assert_eq!(stats["clickCount"], 0);
    assert!(stats["lastAccessedAt"].is_null());
}

#[tokio::test]
async fn test_redirect_after_reactivation() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/target").await;

    for active in [false, true] {
        server
            .put(&format!("/api/v1/urls/{code}"))
            .json(&json!({ "active": active }))
            .await
            .assert_status_ok();
    }

    server
        .get(&format!("/s/{code}"))
        .await
        .assert_status(StatusCode::TEMPORARY_REDIRECT);
}
