//! Structural check for URLs submitted for shortening.
//!
//! This is intentionally not a URL grammar check: anything with an
//! `http://` or `https://` prefix and more than ten characters is accepted.

use crate::error::AppError;
use serde_json::json;

/// Minimum length (exclusive) of an acceptable URL.
const MIN_URL_LENGTH: usize = 10;

/// Returns `true` if `url` has an HTTP(S) scheme prefix and is longer than
/// ten characters.
pub fn is_valid_url(url: &str) -> bool {
    (url.starts_with("http://") || url.starts_with("https://"))
        && url.chars().count() > MIN_URL_LENGTH
}

/// Validates a URL for shortening.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with message `Invalid URL format`.
pub fn validate_url(url: &str) -> Result<(), AppError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Invalid URL format",
            json!({ "url": url, "reason": "URL must start with http:// or https://" }),
        ))
    }
}
