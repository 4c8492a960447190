//! DTOs for the shorten endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Custom codes are 6-10 ASCII letters or digits. The empty string is let
/// through here and treated as "no custom code" by the service.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-zA-Z0-9]{6,10})?$").expect("valid custom code regex"));

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(
        length(min = 1, max = 2048, message = "URL must be 1-2048 characters"),
        custom(function = "no_control_chars")
    )]
    pub url: String,

    /// Optional free-text description.
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// Optional custom short code.
    #[validate(regex(
        path = *CUSTOM_CODE_REGEX,
        message = "Custom code must be 6-10 alphanumeric characters"
    ))]
    pub custom_code: Option<String>,
}

/// A stored URL becomes a `Location` header on redirect, which cannot carry
/// control characters.
fn no_control_chars(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) {
        let mut err = ValidationError::new("control_characters");
        err.message = Some("URL must not contain control characters".into());
        return Err(err);
    }
    Ok(())
}
