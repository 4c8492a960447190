//! Process-local implementation of the short URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, ShortUrl>,
    by_code: HashMap<String, i64>,
}

/// In-memory store keyed by id, with a unique index on short code.
///
/// Every operation runs under a single mutex, which gives the same guarantees
/// the PostgreSQL store gets from its unique constraint and single-statement
/// increments. Data does not survive a restart.
#[derive(Default)]
pub struct InMemoryShortUrlRepository {
    inner: Mutex<Inner>,
}

impl InMemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::internal("Storage lock poisoned", json!({})))
    }
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let inner = self.lock()?;
        Ok(inner
            .by_code
            .get(code)
            .and_then(|id| inner.records.get(id))
            .cloned())
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.find_by_code(code).await?.filter(|url| url.active))
    }

    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let mut inner = self.lock()?;

        if inner.by_code.contains_key(&new_url.short_code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_url.short_code }),
            ));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let short_url = ShortUrl::new(
            id,
            new_url.original_url,
            new_url.short_code,
            new_url.description,
            Utc::now(),
        );

        inner.by_code.insert(short_url.short_code.clone(), id);
        inner.records.insert(id, short_url.clone());

        Ok(short_url)
    }

    async fn update(&self, short_url: &ShortUrl) -> Result<ShortUrl, AppError> {
        let mut inner = self.lock()?;

        let stored = inner.records.get_mut(&short_url.id).ok_or_else(|| {
            AppError::not_found(
                "Short URL not found",
                json!({ "code": short_url.short_code }),
            )
        })?;

        stored.description = short_url.description.clone();
        stored.active = short_url.active;

        Ok(stored.clone())
    }

    async fn delete(&self, short_url: &ShortUrl) -> Result<bool, AppError> {
        let mut inner = self.lock()?;

        match inner.records.remove(&short_url.id) {
            Some(removed) => {
                inner.by_code.remove(&removed.short_code);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, AppError> {
        let inner = self.lock()?;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(inner
            .records
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn record_access(
        &self,
        id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        let mut inner = self.lock()?;

        let Some(stored) = inner.records.get_mut(&id).filter(|url| url.active) else {
            return Ok(None);
        };

        stored.click_count += 1;
        stored.last_accessed_at = Some(accessed_at.max(stored.created_at));

        Ok(Some(stored.clone()))
    }
}
