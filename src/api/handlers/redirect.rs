//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// The click is counted before the redirect is returned; if counting fails,
/// the request fails.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist or is inactive.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let original_url = state.resolution_service.resolve(&code).await?;

    Ok(Redirect::temporary(&original_url))
}
