//! Handler for per-code statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns access statistics for a short code.
///
/// # Endpoint
///
/// `GET /api/v1/urls/{code}/stats`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.lifecycle_service.get_statistics(&code).await?;

    Ok(Json(stats.into()))
}
