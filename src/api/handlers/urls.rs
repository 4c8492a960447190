//! Handlers for record management (get, update, delete, list).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::pagination::ListQueryParams;
use crate::api::dto::short_url::ShortUrlResponse;
use crate::api::dto::update_url::UpdateUrlRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a record by short code, active or not.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_url_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let url = state.lifecycle_service.get(&code).await?;
    let short_url = state.lifecycle_service.short_url(&url.short_code);

    Ok(Json(ShortUrlResponse::new(url, short_url)))
}

/// Partially updates a record.
///
/// # Endpoint
///
/// `PUT /api/v1/urls/{code}`
///
/// # Request Body
///
/// ```json
/// {
///   "description": "New text",   // optional, null = unchanged
///   "active": false              // optional, null = unchanged
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
/// Returns 400 Bad Request if validation fails.
pub async fn update_url_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<UpdateUrlRequest>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    payload.validate()?;

    let url = state
        .lifecycle_service
        .update(&code, payload.into())
        .await?;
    let short_url = state.lifecycle_service.short_url(&url.short_code);

    Ok(Json(ShortUrlResponse::new(url, short_url)))
}

/// Permanently deletes a record.
///
/// # Endpoint
///
/// `DELETE /api/v1/urls/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, AppError> {
    state.lifecycle_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists records in creation order.
///
/// # Endpoint
///
/// `GET /api/v1/urls?page=0&size=20`
///
/// # Query Parameters
///
/// - `page` (optional): 0-indexed page number (default: 0)
/// - `size` (optional): items per page (default: 20, max: 1000)
///
/// Pages past the end return an empty array.
///
/// # Errors
///
/// Returns 400 Bad Request if `size` is out of range.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<ShortUrlResponse>>, AppError> {
    let (page, size) = params
        .validate_and_get_page()
        .map_err(|e| AppError::bad_request(e, json!({ "size": params.size })))?;

    let urls = state.lifecycle_service.list(page, size).await?;

    let items = urls
        .into_iter()
        .map(|url| {
            let short_url = state.lifecycle_service.short_url(&url.short_code);
            ShortUrlResponse::new(url, short_url)
        })
        .collect();

    Ok(Json(items))
}
