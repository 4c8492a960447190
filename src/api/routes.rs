//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, get_url_handler, list_urls_handler, shorten_handler, stats_handler,
    update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /shorten`            - Create a short URL
/// - `GET    /urls`               - List records (paginated)
/// - `GET    /urls/{code}`        - Record details
/// - `PUT    /urls/{code}`        - Update description / active flag
/// - `DELETE /urls/{code}`        - Delete a record
/// - `GET    /urls/{code}/stats`  - Access statistics
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{code}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/urls/{code}/stats", get(stats_handler))
}
