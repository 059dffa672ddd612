//! Anidle API — error types.

use anidle_core::error::DomainError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] DomainError),

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

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::UnknownTitle(_) => (StatusCode::NOT_FOUND, "unknown_title"),
            DomainError::NoActiveRound => (StatusCode::NOT_FOUND, "no_active_round"),
            DomainError::DuplicateGuess(_) => (StatusCode::CONFLICT, "duplicate_guess"),
            DomainError::RoundOver => (StatusCode::CONFLICT, "round_over"),
            DomainError::EmptyCatalog => (StatusCode::INTERNAL_SERVER_ERROR, "empty_catalog"),
            DomainError::DuplicateTitle(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "duplicate_title")
            }
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
