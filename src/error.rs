//! Error types for the Roomery server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Cannot book in the past")]
    PastBooking,

    #[error("Slot conflict: {0}")]
    SlotConflict(String),

    #[error("Reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable name for the error kind
    fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFound",
            AppError::InvalidInterval(_) => "InvalidInterval",
            AppError::PastBooking => "PastBooking",
            AppError::SlotConflict(_) => "SlotConflict",
            AppError::ReferenceNotFound(_) => "ReferenceNotFound",
            AppError::InvalidStatus(_) => "InvalidStatus",
            AppError::Authentication(_) => "Authentication",
            AppError::Conflict(_) => "Conflict",
            AppError::Validation(_) => "Validation",
            AppError::Database(_) => "Database",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Booking-workflow failures surface as 500 with a descriptive
        // message; entity lookups map to conventional statuses.
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidInterval(_)
            | AppError::PastBooking
            | AppError::SlotConflict(_)
            | AppError::ReferenceNotFound(_)
            | AppError::InvalidStatus(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
