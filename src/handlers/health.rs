use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The store lives in memory, so the service is healthy whenever it can
/// answer. The current item count is included for quick inspection.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let items = state.store.len();
    tracing::debug!("Health check passed ({} items)", items);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            items,
        }),
    )
}
