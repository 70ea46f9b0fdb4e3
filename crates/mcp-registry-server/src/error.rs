//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mcp_registry_core::RegistryError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::ServerNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Registry(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, stable label for the `error` field.
    pub fn label(&self) -> &'static str {
        match self {
            ApiError::Registry(RegistryError::ServerNotFound { .. }) => "Server not found",
            ApiError::Registry(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let body = ErrorBody {
            error: self.label(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
