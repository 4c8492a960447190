//! Record view returned by the create, get, update and list endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// JSON representation of a short URL record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortUrlResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    /// `{base_url}/s/{short_code}`
    pub short_url: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
    pub active: bool,
}

impl ShortUrlResponse {
    pub fn new(url: ShortUrl, short_url: String) -> Self {
        Self {
            id: url.id,
            original_url: url.original_url,
            short_code: url.short_code,
            short_url,
            description: url.description,
            created_at: url.created_at,
            click_count: url.click_count,
            active: url.active,
        }
    }
}
