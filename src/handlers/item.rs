use crate::error::{ApiError, ErrorResponse};
use crate::handlers::{get::get_handler, put::put_handler};
use crate::routes;
use crate::state::AppState;
use crate::validation::parse_path_code;
use axum::{
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// /items/:code dispatcher
///
/// The path code is normalised and checked before the method is considered,
/// so a malformed code is a 400 whatever the method.
pub async fn item_handler(
    State(state): State<AppState>,
    method: Method,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let Path(raw_code) = path.map_err(|e| ApiError::InvalidCode(e.body_text()))?;
    // Catch-all captures may keep their leading slash
    let code = parse_path_code(raw_code.trim_start_matches('/'))?;

    match method {
        Method::GET | Method::HEAD => Ok(get_handler(state, code).await?.into_response()),
        Method::PUT | Method::POST => Ok(put_handler(state, Some(code), body).await?.into_response()),
        Method::DELETE => Ok(delete_handler(code).await?.into_response()),
        other => {
            tracing::debug!("Unsupported method {} on item {}", other, code);
            Err(ApiError::MethodNotAllowed)
        }
    }
}

/// /items/ handler - a path with an empty code, whatever the method
pub async fn empty_code_handler() -> ApiError {
    ApiError::InvalidCode(String::new())
}

/// DELETE /items/:code handler - Not supported
///
/// Items are never removed; the method is recognised so that clients get a
/// 501 rather than a 405.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("code" = String, Path, description = "Item code, e.g. A12T-4GH7-QPL9-3N4M")
    ),
    responses(
        (status = 400, description = "Invalid code format", body = ErrorResponse),
        (status = 501, description = "Deletion is not supported", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(code: String) -> Result<StatusCode, ApiError> {
    tracing::info!("Rejected delete of item {}", code);
    Err(ApiError::NotImplemented("deleting items"))
}

/// Fallback for methods /items does not serve
pub async fn items_method_not_allowed(method: Method) -> ApiError {
    tracing::debug!("Unsupported method {} on item list", method);
    ApiError::MethodNotAllowed
}
