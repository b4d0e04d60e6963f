use crate::error::{ApiError, ErrorResponse};
use crate::models::ItemResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, http::StatusCode};

/// GET /items/:code handler - Retrieve a single item
///
/// `code` has already been normalised and format-checked by the item
/// dispatcher.
#[utoipa::path(
    method(get, head),
    path = routes::ITEM,
    params(
        ("code" = String, Path, description = "Item code, e.g. A12T-4GH7-QPL9-3N4M")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, description = "Invalid code format", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    state: AppState,
    code: String,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    match state.store.get(&code) {
        Some(item) => {
            tracing::debug!("Found item {}", code);
            Ok((StatusCode::OK, Json(item.into())))
        }
        None => {
            tracing::info!("Item not found: {}", code);
            Err(ApiError::ItemNotFound(code))
        }
    }
}
