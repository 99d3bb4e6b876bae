//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error type for consistent error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required configuration is missing.
    #[error("{0}")]
    Configuration(String),

    /// Bad request - invalid input.
    #[error("{0}")]
    BadRequest(String),

    /// A remote service the endpoint depends on failed.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "status": "error",
            "message": self.to_string()
        }));
        (status, body).into_response()
    }
}
