//! API error handling.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// API-level error, rendered as a JSON `{"error": "<message>"}` body with
/// the matching HTTP status.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl From<claro_core::Error> for ApiError {
    fn from(err: claro_core::Error) -> Self {
        match &err {
            claro_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            claro_core::Error::DocumentNotFound(_) => {
                ApiError::NotFound("Document not found".to_string())
            }
            claro_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
