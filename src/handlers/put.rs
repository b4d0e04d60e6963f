use crate::error::{ApiError, ErrorResponse};
use crate::handlers::get::get_handler;
use crate::models::{ItemPayload, ItemResponse};
use crate::routes;
use crate::state::AppState;
use crate::validation::validate_item;
use axum::{Json, body::Bytes, extract::State, http::StatusCode};

/// PUT /items/:code handler - Create or update an item
///
/// The body may omit `code`, in which case the one from the path is used.
#[utoipa::path(
    method(put, post),
    path = routes::ITEM,
    params(
        ("code" = String, Path, description = "Item code, e.g. A12T-4GH7-QPL9-3N4M")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item stored", body = ItemResponse),
        (status = 400, description = "Invalid code, invalid JSON or conflicting codes", body = ErrorResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn put_handler(
    state: AppState,
    path_code: Option<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let payload: ItemPayload = serde_json::from_slice(&body)?;
    let item = validate_item(path_code.as_deref(), payload)?;
    let code = item.code.clone();

    state.store.put(item);
    tracing::info!("Successfully stored item with code: {}", code);

    // Answer with what the store now holds
    get_handler(state, code).await
}

/// PUT /items handler - Create or update an item whose code is in the body
#[utoipa::path(
    method(put, post),
    path = routes::ITEMS,
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item stored", body = ItemResponse),
        (status = 400, description = "Invalid JSON", body = ErrorResponse),
        (status = 422, description = "Missing or invalid field", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    put_handler(state, None, body).await
}
