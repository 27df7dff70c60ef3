use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use tracing::{error, info, warn};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Centralized error types for consistent API error handling
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Generation failure: {0}")]
    GenerationFailure(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error context for structured logging
#[derive(Debug)]
pub struct ErrorContext {
    pub operation: String,
    pub resource_type: String,
    pub resource_id: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: &str, resource_type: &str) -> Self {
        Self {
            operation: operation.to_string(),
            resource_type: resource_type.to_string(),
            resource_id: None,
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.resource_id = Some(id.to_string());
        self
    }
}

impl ApiError {
    /// Convert the error into an HTTP response, logging with context first.
    pub fn to_response_with_context(
        self,
        context: ErrorContext,
    ) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ApiError::MissingInput(detail) => {
                warn!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    resource_id = ?context.resource_id,
                    detail = %detail,
                    "Missing input"
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse { error: detail }),
                )
            }
            ApiError::NotFound(detail) => {
                info!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    resource_id = ?context.resource_id,
                    detail = %detail,
                    "Resource not found"
                );
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: detail }))
            }
            ApiError::GenerationFailure(detail) => {
                error!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    resource_id = ?context.resource_id,
                    detail = %detail,
                    "Generation failure"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: detail }),
                )
            }
            ApiError::Internal(source) => {
                error!(
                    operation = %context.operation,
                    resource_type = %context.resource_type,
                    resource_id = ?context.resource_id,
                    error = %source,
                    "Internal server error"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "An internal error occurred. Please try again.".to_string(),
                    }),
                )
            }
        }
    }

    /// Simple conversion without context.
    #[allow(dead_code)]
    pub fn to_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let context = ErrorContext::new("unknown", "resource");
        self.to_response_with_context(context)
    }
}
