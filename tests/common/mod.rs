#![allow(dead_code)]

use axum_test::TestServer;
use link_shortener::domain::repositories::ShortUrlRepository;
use link_shortener::infrastructure::persistence::{
    InMemoryShortUrlRepository, PgShortUrlRepository,
};
use link_shortener::routes::router;
use link_shortener::state::AppState;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state() -> AppState {
    let repo: Arc<dyn ShortUrlRepository> = Arc::new(InMemoryShortUrlRepository::new());
    AppState::new(repo, BASE_URL)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    let repo: Arc<dyn ShortUrlRepository> = Arc::new(PgShortUrlRepository::new(Arc::new(pool)));
    AppState::new(repo, BASE_URL)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

/// Creates a short URL through the API and returns the response body.
pub async fn shorten(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/v1/shorten").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn shorten_url(server: &TestServer, url: &str) -> String {
    let json = shorten(server, json!({ "url": url })).await;
    json["shortCode"].as_str().unwrap().to_string()
}
