//! DTO for per-code access statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrlStats;

/// Access statistics for a short code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl From<ShortUrlStats> for StatsResponse {
    fn from(stats: ShortUrlStats) -> Self {
        Self {
            short_code: stats.short_code,
            original_url: stats.original_url,
            click_count: stats.click_count,
            created_at: stats.created_at,
            last_accessed_at: stats.last_accessed_at,
            active: stats.active,
        }
    }
}
