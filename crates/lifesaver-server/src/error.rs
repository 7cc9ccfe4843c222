//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use lifesaver_core::StoreError;

/// Errors surfaced to API clients. The body is always
/// `{"detail": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("API key not configured")]
    MissingApiKey,

    #[error("Chat service error: {0}")]
    ChatService(String),

    #[error("{0}")]
    Internal(String),
}

/// Store failures other than NotFound surface as a generic server
/// error; the NotFound cases carry kind-specific detail and are mapped
/// explicitly in the handlers.
impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingApiKey | ApiError::ChatService(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
