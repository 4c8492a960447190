//! Short code resolution with click accounting.

use std::sync::Arc;

use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use chrono::Utc;
use serde_json::json;

/// Service that resolves active short codes to their original URL.
pub struct ResolutionService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository + ?Sized> ResolutionService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves `code` to its original URL and records the access.
    ///
    /// The click is counted through [`ShortUrlRepository::record_access`],
    /// which increments atomically, so concurrent resolutions never lose
    /// an update. The URL is returned only after the increment is persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist or is
    /// inactive. Both cases produce the same error.
    /// Returns [`AppError::Internal`] if the lookup or the increment fails.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let short_url = self
            .repository
            .find_active_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))?;

        let accessed = self
            .repository
            .record_access(short_url.id, Utc::now())
            .await?
            .ok_or_else(|| not_found(code))?;

        metrics::counter!("shortener_redirects_total").increment(1);
        tracing::debug!(code, clicks = accessed.click_count, "Short URL resolved");

        Ok(accessed.original_url)
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short URL not found or inactive", json!({ "code": code }))
}
