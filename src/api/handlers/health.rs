//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Record store reachable
/// - **503 Service Unavailable**: Record store query failed
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.is_ok();

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { storage },
    };

    if healthy {
        Ok(Json(response))
    } else {
        tracing::warn!("Health check failed");
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reads a single-row page from the store.
async fn check_storage(state: &AppState) -> CheckStatus {
    match state.lifecycle_service.list(0, 1).await {
        Ok(_) => CheckStatus::ok(),
        Err(e) => CheckStatus::error(format!("Storage error: {}", e)),
    }
}
