mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn test_get_url() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    let response = server.get(&format!("/api/v1/urls/{code}")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["shortCode"], code);
    assert_eq!(json["originalUrl"], "https://example.com/a");
}

#[tokio::test]
async fn test_get_url_not_found() {
    let server = common::create_test_server();

    let response = server.get("/api/v1/urls/nosuch1").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_inactive_url_still_visible() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    server
        .put(&format!("/api/v1/urls/{code}"))
        .json(&json!({ "active": false }))
        .await
        .assert_status_ok();

    let json = server
        .get(&format!("/api/v1/urls/{code}"))
        .await
        .json::<Value>();
    assert_eq!(json["active"], false);
}

#[tokio::test]
async fn test_update_description_keeps_active() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    let response = server
        .put(&format!("/api/v1/urls/{code}"))
        .json(&json!({ "description": "renamed" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["description"], "renamed");
    assert_eq!(json["active"], true);
}

#[tokio::test]
async fn test_update_active_keeps_description() {
    let server = common::create_test_server();
    common::shorten(
        &server,
        json!({ "url": "https://example.com/a", "customCode": "keepme1", "description": "d" }),
    )
    .await;

    let json = server
        .put("/api/v1/urls/keepme1")
        .json(&json!({ "active": false }))
        .await
        .json::<Value>();

    assert_eq!(json["description"], "d");
    assert_eq!(json["active"], false);
}

#[tokio::test]
async fn test_update_does_not_reset_clicks() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    server.get(&format!("/s/{code}")).await;
    server.get(&format!("/s/{code}")).await;

    let json = server
        .put(&format!("/api/v1/urls/{code}"))
        .json(&json!({ "description": "after clicks" }))
        .await
        .json::<Value>();

    assert_eq!(json["clickCount"], 2);
}

#[tokio::test]
async fn test_update_not_found() {
    let server = common::create_test_server();

    let response = server
        .put("/api/v1/urls/nosuch1")
        .json(&json!({ "active": false }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_description_too_long() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    let response = server
        .put(&format!("/api/v1/urls/{code}"))
        .json(&json!({ "description": "x".repeat(501) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_url() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    server
        .delete(&format!("/api/v1/urls/{code}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/v1/urls/{code}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get(&format!("/s/{code}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    server
        .delete(&format!("/api/v1/urls/{code}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/api/v1/urls/{code}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_custom_code_can_be_reused() {
    let server = common::create_test_server();
    let body = json!({ "url": "https://example.com/a", "customCode": "reuse01" });

    common::shorten(&server, body.clone()).await;
    server
        .delete("/api/v1/urls/reuse01")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let json = common::shorten(&server, body).await;
    assert_eq!(json["shortCode"], "reuse01");
}

#[tokio::test]
async fn test_list_urls_pagination() {
    let server = common::create_test_server();
    let mut codes = Vec::new();
    for i in 0..5 {
        codes.push(common::shorten_url(&server, &format!("https://example.com/{i}")).await);
    }

    let first = server
        .get("/api/v1/urls")
        .add_query_param("page", 0)
        .add_query_param("size", 2)
        .await
        .json::<Vec<Value>>();
    let last = server
        .get("/api/v1/urls")
        .add_query_param("page", 2)
        .add_query_param("size", 2)
        .await
        .json::<Vec<Value>>();

    assert_eq!(first.len(), 2);
    assert_eq!(first[0]["shortCode"], codes[0]);
    assert_eq!(first[1]["shortCode"], codes[1]);
    assert_eq!(last.len(), 1);
    assert_eq!(last[0]["shortCode"], codes[4]);
}

#[tokio::test]
async fn test_list_urls_defaults() {
    let server = common::create_test_server();
    common::shorten_url(&server, "https://example.com/a").await;

    let response = server.get("/api/v1/urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 1);
}

#[tokio::test]
async fn test_list_urls_page_past_end() {
    let server = common::create_test_server();
    common::shorten_url(&server, "https://example.com/a").await;

    let items = server
        .get("/api/v1/urls")
        .add_query_param("page", 10)
        .await
        .json::<Vec<Value>>();

    assert!(items.is_empty());
}

#[tokio::test]
async fn test_list_urls_invalid_size() {
    let server = common::create_test_server();

    for size in [0, 1001] {
        server
            .get("/api/v1/urls")
            .add_query_param("size", size)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_stats() {
    let server = common::create_test_server();
    let code = common::shorten_url(&server, "https://example.com/a").await;

    let response = server.get(&format!("/api/v1/urls/{code}/stats")).await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["shortCode"], code);
    assert_eq!(json["originalUrl"], "https://example.com/a");
    assert_eq!(json["clickCount"], 0);
    assert!(json["lastAccessedAt"].is_null());
    assert_eq!(json["active"], true);
}

#[tokio::test]
async fn test_stats_not_found() {
    let server = common::create_test_server();

    server
        .get("/api/v1/urls/nosuch1/stats")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
