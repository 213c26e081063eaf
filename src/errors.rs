// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Comprehensive error enum for all possible failures
/// Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid input: {0}")]
    #[allow(dead_code)]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    #[allow(dead_code)]
    Forbidden,

    #[error("Internal server error")]
    InternalError,
}

/// Convert FarmError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for FarmError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            FarmError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            FarmError::AlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
            FarmError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            FarmError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            FarmError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            FarmError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            FarmError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            FarmError::InternalError => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            FarmError::NotFound(_) => StatusCode::NOT_FOUND,
            FarmError::AlreadyExists(_) => StatusCode::CONFLICT,
            FarmError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FarmError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            FarmError::ValidationError(_) => StatusCode::BAD_REQUEST,
            FarmError::Unauthorized => StatusCode::UNAUTHORIZED,
            FarmError::Forbidden => StatusCode::FORBIDDEN,
            FarmError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
