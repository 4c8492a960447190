//! Short code generation and validation utilities.
//!
//! Generated and custom codes share one alphabet: `[a-zA-Z0-9]`.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// The 62-character alphanumeric alphabet (26 lower, 26 upper, 10 digits).
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Minimum length of a custom short code.
pub const MIN_CODE_LENGTH: usize = 6;

/// Maximum length of a custom short code.
pub const MAX_CODE_LENGTH: usize = 10;

/// Generates a random short code of `length` characters.
///
/// Each character is drawn uniformly and independently from [`ALPHABET`]
/// using the thread-local CSPRNG (ChaCha, seeded from the OS).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 6-10 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 6-10 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
