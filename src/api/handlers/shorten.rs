//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::short_url::ShortUrlResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "description": "Landing page",   // optional
///   "customCode": "promo24"          // optional, 6-10 alphanumeric
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with code `validation_error` for a malformed URL or
/// custom code, and with code `conflict` if the custom code is taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortUrlResponse>), AppError> {
    payload.validate()?;

    let created = state
        .allocation_service
        .allocate(payload.url, payload.description, payload.custom_code)
        .await?;

    let short_url = state.lifecycle_service.short_url(&created.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortUrlResponse::new(created, short_url)),
    ))
}
