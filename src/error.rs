use std::fmt;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::validation::MAX_PRICE;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub items: usize,
}

/// Semantic problems with an otherwise well-formed item payload
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Neither the path nor the body carried a code
    MissingCode,
    /// Body code does not have the canonical shape
    BadCodeFormat(String),
    MissingName,
    /// Price was zero or absent
    MissingPrice,
    NegativePrice(f64),
    PriceOutOfRange(f64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingCode => write!(f, "missing code"),
            ValidationError::BadCodeFormat(code) => write!(
                f,
                "bad code format: expected format like 'A12T-4GH7-QPL9-3N4M', got '{}'",
                code
            ),
            ValidationError::MissingName => write!(f, "missing name"),
            ValidationError::MissingPrice => write!(f, "missing price"),
            ValidationError::NegativePrice(price) => write!(f, "negative price: {}", price),
            ValidationError::PriceOutOfRange(price) => {
                write!(f, "price out of range: {} exceeds {}", price, MAX_PRICE)
            }
        }
    }
}

/// Custom error type for API endpoints
///
/// Maps every failure to its HTTP status and renders it as a JSON
/// `ErrorResponse`. Request-format problems are 400, semantic validation
/// failures 422.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed code in the URL path
    InvalidCode(String),
    /// Request body is not a valid item payload
    JsonError(serde_json::Error),
    /// Path and body name different items
    CodeMismatch { path: String, body: String },
    /// Cursor is neither empty nor a valid code
    InvalidCursor(String),
    /// Invalid query parameter
    InvalidQueryParam(String),
    Validation(ValidationError),
    ItemNotFound(String),
    MethodNotAllowed,
    NotImplemented(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidCode(code) => (
                StatusCode::BAD_REQUEST,
                format!("bad code format: expected format like 'A12T-4GH7-QPL9-3N4M', got '{}'", code),
            ),
            ApiError::JsonError(err) => (
                StatusCode::BAD_REQUEST,
                format!("invalid input: could not parse payload: {}", err),
            ),
            ApiError::CodeMismatch { path, body } => (
                StatusCode::BAD_REQUEST,
                format!("code in url and body did not match: '{}' vs '{}'", path, body),
            ),
            ApiError::InvalidCursor(cursor) => (
                StatusCode::BAD_REQUEST,
                format!("bad cursor: '{}'", cursor),
            ),
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
            ApiError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::ItemNotFound(code) => (
                StatusCode::NOT_FOUND,
                format!("no such item: {}", code),
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method not allowed".to_string(),
            ),
            ApiError::NotImplemented(what) => (
                StatusCode::NOT_IMPLEMENTED,
                format!("{} is not supported", what),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}
