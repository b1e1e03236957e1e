//! Arbiter — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use arbiter_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// Request-level errors, mapped to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A core computation rejected its inputs.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request named a simulation algorithm that does not exist.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The authorization header was missing, malformed, or carried an
    /// invalid or expired token.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// The token is valid but its role does not grant access.
    #[error("forbidden")]
    Forbidden,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self {
            ApiError::Domain(DomainError::InvalidParameter { .. }) => {
                (StatusCode::BAD_REQUEST, "invalid_parameter")
            }
            ApiError::Domain(DomainError::InvalidIterations) => {
                (StatusCode::BAD_REQUEST, "invalid_iterations")
            }
            ApiError::UnknownAlgorithm(_) => (StatusCode::BAD_REQUEST, "unknown_algorithm"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "forbidden"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
