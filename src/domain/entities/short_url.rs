//! Short URL entity: the mapping from a short code to an original URL.

use chrono::{DateTime, Utc};

/// A persisted short URL record.
///
/// `id`, `original_url`, `short_code` and `created_at` never change after
/// creation. `click_count` only grows and is owned by the resolution path;
/// `description` and `active` are the only fields an edit may touch.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrl {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub click_count: i64,
    pub description: Option<String>,
    pub active: bool,
}

impl ShortUrl {
    /// Builds a freshly created record: no clicks, never accessed, active.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
            last_accessed_at: None,
            click_count: 0,
            description,
            active: true,
        }
    }

    /// Applies a partial edit in place. `None` fields are left untouched.
    pub fn apply(&mut self, patch: ShortUrlPatch) {
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(active) = patch.active {
            self.active = active;
        }
    }

    /// Snapshot of the access counters for this record.
    pub fn stats(&self) -> ShortUrlStats {
        ShortUrlStats {
            short_code: self.short_code.clone(),
            original_url: self.original_url.clone(),
            click_count: self.click_count,
            created_at: self.created_at,
            last_accessed_at: self.last_accessed_at,
            active: self.active,
        }
    }
}

/// Input data for inserting a new record. The store assigns `id` and
/// `created_at`.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub original_url: String,
    pub short_code: String,
    pub description: Option<String>,
}

/// Partial update for an existing record.
///
/// There is no way to clear `description`: `None` means "leave as is".
#[derive(Debug, Clone, Default)]
pub struct ShortUrlPatch {
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Access statistics for a single short code.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortUrlStats {
    pub short_code: String,
    pub original_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub active: bool,
}
