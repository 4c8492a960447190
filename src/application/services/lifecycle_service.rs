//! Lookup, statistics, edit, delete and listing of short URLs.

use std::sync::Arc;

use crate::domain::entities::{ShortUrl, ShortUrlPatch, ShortUrlStats};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for managing existing short URLs.
///
/// Lookups here ignore the `active` flag: an inactive record is still visible
/// to management operations, it just no longer redirects.
pub struct LifecycleService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: ShortUrlRepository + ?Sized> LifecycleService<R> {
    /// Creates a new lifecycle service.
    ///
    /// `base_url` is the public origin used to build short links, e.g.
    /// `https://sho.rt`. A trailing slash is ignored.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Retrieves a record by short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get(&self, code: &str) -> Result<ShortUrl, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Retrieves access statistics for a short code.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get`].
    pub async fn get_statistics(&self, code: &str) -> Result<ShortUrlStats, AppError> {
        Ok(self.get(code).await?.stats())
    }

    /// Applies a partial update. Fields that are `None` in `patch` keep their
    /// current value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, code: &str, patch: ShortUrlPatch) -> Result<ShortUrl, AppError> {
        let mut short_url = self.get(code).await?;
        short_url.apply(patch);

        let updated = self.repository.update(&short_url).await?;
        tracing::info!(code, active = updated.active, "Short URL updated");

        Ok(updated)
    }

    /// Permanently deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code, including
    /// when a concurrent delete removed it first.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let short_url = self.get(code).await?;

        if !self.repository.delete(&short_url).await? {
            return Err(not_found(code));
        }

        tracing::info!(code, id = short_url.id, "Short URL deleted");
        Ok(())
    }

    /// Lists records in store order.
    ///
    /// `page` is 0-indexed. Pages past the end yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(&self, page: u32, page_size: u32) -> Result<Vec<ShortUrl>, AppError> {
        let offset = i64::from(page) * i64::from(page_size);
        self.repository
            .list_page(offset, i64::from(page_size))
            .await
    }

    /// Builds the public short link for a code: `{base_url}/s/{code}`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/s/{}", self.base_url, code)
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short URL not found", json!({ "code": code }))
}
