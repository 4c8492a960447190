//! Short URL creation: URL check, custom or generated code, collision retry.

use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;
use serde_json::json;

/// Length of generated codes until the collision threshold is reached.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Number of colliding candidates tolerated at [`DEFAULT_CODE_LENGTH`] before
/// generation switches to one character longer.
///
/// This is a tuning constant, not a cap: at the longer length generation keeps
/// going until a free code is found.
pub const COLLISIONS_BEFORE_ESCALATION: usize = 10;

/// Service that turns a creation request into a persisted [`ShortUrl`].
///
/// Uniqueness is ultimately enforced by the repository's insert; the lookups
/// done here only avoid obviously doomed inserts.
pub struct AllocationService<R: ShortUrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ShortUrlRepository + ?Sized> AllocationService<R> {
    /// Creates a new allocation service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short URL.
    ///
    /// # Arguments
    ///
    /// - `url` - The original URL (must start with `http://` or `https://`)
    /// - `description` - Optional free text stored with the record
    /// - `custom_code` - Optional caller-chosen code; an empty string counts as absent
    ///
    /// # Code Generation
    ///
    /// Without a custom code, random 6-character codes are tried until one is
    /// free. After [`COLLISIONS_BEFORE_ESCALATION`] collisions the length
    /// goes up to 7 and stays there.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is malformed.
    /// Returns [`AppError::Conflict`] if the custom code is already taken, either
    /// at the pre-check or at insert time.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn allocate(
        &self,
        url: String,
        description: Option<String>,
        custom_code: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        validate_url(&url)?;

        let created = match custom_code.filter(|code| !code.is_empty()) {
            Some(custom) => self.insert_custom(url, description, custom).await?,
            None => self.insert_generated(url, description).await?,
        };

        metrics::counter!("shortener_urls_created_total").increment(1);
        tracing::info!(
            code = %created.short_code,
            id = created.id,
            "Short URL created"
        );

        Ok(created)
    }

    async fn insert_custom(
        &self,
        url: String,
        description: Option<String>,
        custom: String,
    ) -> Result<ShortUrl, AppError> {
        validate_custom_code(&custom)?;

        if self.repository.find_by_code(&custom).await?.is_some() {
            return Err(custom_code_taken(&custom));
        }

        let new_url = NewShortUrl {
            original_url: url,
            short_code: custom.clone(),
            description,
        };

        self.repository
            .insert(new_url)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => custom_code_taken(&custom),
                other => other,
            })
    }

    /// Generates candidates until one is both absent from the store and
    /// accepted by its insert. A conflict on insert means another caller
    /// took the same candidate first, and counts as a collision.
    async fn insert_generated(
        &self,
        url: String,
        description: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        let mut collisions = 0usize;

        loop {
            let length = if collisions < COLLISIONS_BEFORE_ESCALATION {
                DEFAULT_CODE_LENGTH
            } else {
                DEFAULT_CODE_LENGTH + 1
            };
            let code = generate_code(length);

            if self.repository.find_by_code(&code).await?.is_none() {
                let new_url = NewShortUrl {
                    original_url: url.clone(),
                    short_code: code.clone(),
                    description: description.clone(),
                };

                match self.repository.insert(new_url).await {
                    Ok(created) => return Ok(created),
                    Err(AppError::Conflict { .. }) => {}
                    Err(e) => return Err(e),
                }
            }

            collisions = collisions.saturating_add(1);
            metrics::counter!("shortener_code_collisions_total").increment(1);
            tracing::debug!(code = %code, collisions, "Generated short code collided");

            if collisions == COLLISIONS_BEFORE_ESCALATION {
                tracing::warn!(
                    length = DEFAULT_CODE_LENGTH + 1,
                    "Too many short code collisions, increasing code length"
                );
            }
        }
    }
}

fn custom_code_taken(code: &str) -> AppError {
    AppError::conflict("Custom code already exists", json!({ "code": code }))
}
