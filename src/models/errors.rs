use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        errors: Vec<FieldError>,
    },
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServiceError {
    /// Validation failure carrying every field that was rejected.
    pub fn invalid(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        ServiceError::ValidationError {
            message: message.into(),
            errors,
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::DatabaseError(_)
            | ServiceError::ConstraintViolation(_)
            | ServiceError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::ValidationError { message, errors } => {
                HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "message": message,
                    "errors": errors
                }))
            }
            ServiceError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::AuthenticationError(msg) => HttpResponse::Unauthorized().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::Forbidden(msg) => HttpResponse::Forbidden().json(json!({
                "success": false,
                "message": msg
            })),
            ServiceError::DatabaseError(msg) | ServiceError::ConstraintViolation(msg) => {
                tracing::error!(error = %msg, "Storage operation failed");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Database error occurred"
                }))
            }
            ServiceError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ServiceError::ConstraintViolation(db_err.message().to_string())
            }
            _ => ServiceError::DatabaseError(err.to_string()),
        }
    }
}

/// Failures from the outbound email provider. These never reach an HTTP
/// response; callers log them and carry on.
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Email API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Email API returned an error: {0}")]
    ApiError(String),

    #[error("Email delivery is not configured (missing API key)")]
    NotConfigured,
}
