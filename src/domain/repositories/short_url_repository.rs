//! Repository trait for short URL record storage.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Durable mapping from short code to [`ShortUrl`] record.
///
/// The store is the single authority on code uniqueness: implementations must
/// reject a second record with the same `short_code` at insert time, whatever
/// the callers checked beforehand.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryShortUrlRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Finds a record by short code, regardless of its `active` flag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record by short code only if it is active.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_active_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Inserts a new record with `click_count = 0`, `active = true` and
    /// `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Persists the mutable fields (`description`, `active`) of a record.
    ///
    /// Click accounting is never written here, so an edit racing with a
    /// resolution cannot roll back the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, short_url: &ShortUrl) -> Result<ShortUrl, AppError>;

    /// Permanently removes a record.
    ///
    /// Returns `Ok(false)` if the record was already gone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, short_url: &ShortUrl) -> Result<bool, AppError>;

    /// Returns up to `limit` records starting at `offset`, ordered by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<ShortUrl>, AppError>;

    /// Atomically increments `click_count` and sets `last_accessed_at` on an
    /// active record.
    ///
    /// Returns `Ok(None)` if the record was deleted or deactivated since it was
    /// read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_access(
        &self,
        id: i64,
        accessed_at: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError>;
}
