//! Error handling for the Replenishment Reports server
//!
//! Store failures are classified once, when they leave sqlx, so callers can
//! tell an unreachable database from a schema that does not match.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::OrderDraftError;
use thiserror::Error;

/// Postgres SQLSTATE for a missing relation
const UNDEFINED_TABLE: &str = "42P01";

/// Postgres SQLSTATE for a missing column
const UNDEFINED_COLUMN: &str = "42703";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    // Request errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Order draft error: {0}")]
    OrderDraft(#[from] OrderDraftError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Store errors
    #[error("Store unreachable: {0}")]
    Connectivity(String),

    #[error("Schema mismatch: {0}")]
    Schema(String),

    #[error("Database error: {0}")]
    DatabaseError(#[source] sqlx::Error),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Classify a store failure
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => AppError::Connectivity(err.to_string()),
            sqlx::Error::ColumnNotFound(column) => {
                AppError::Schema(format!("column not found: {}", column))
            }
            sqlx::Error::ColumnIndexOutOfBounds { .. } | sqlx::Error::ColumnDecode { .. } => {
                AppError::Schema(err.to_string())
            }
            sqlx::Error::Database(db)
                if matches!(db.code().as_deref(), Some(UNDEFINED_TABLE | UNDEFINED_COLUMN)) =>
            {
                AppError::Schema(db.message().to_string())
            }
            _ => AppError::DatabaseError(err),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::InsufficientPermissions => "INSUFFICIENT_PERMISSIONS",
            AppError::Validation { .. } => "VALIDATION_ERROR",
            AppError::OrderDraft(_) => "ORDER_DRAFT_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Connectivity(_) => "STORE_UNAVAILABLE",
            AppError::Schema(_) => "SCHEMA_MISMATCH",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::Internal(_) | AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InsufficientPermissions => StatusCode::FORBIDDEN,
            AppError::Validation { .. } | AppError::OrderDraft(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Schema(_)
            | AppError::DatabaseError(_)
            | AppError::Internal(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::from_sqlx(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.keys().copied().collect();
        fields.sort_unstable();

        let field = fields.first().copied().unwrap_or_default();
        let message = field_errors
            .get(field)
            .and_then(|errs| errs.first())
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value ({})", e.code),
            })
            .unwrap_or_else(|| "Invalid input".to_string());

        AppError::Validation {
            field: field.to_string(),
            message,
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::InsufficientPermissions => {
                "You do not have permission to perform this action".to_string()
            }
            AppError::Validation { message, .. } => message.clone(),
            AppError::OrderDraft(err) => err.to_string(),
            AppError::NotFound(resource) => format!("{} not found", resource),
            AppError::Connectivity(_) => {
                "The reporting database is temporarily unavailable".to_string()
            }
            AppError::Schema(_) => {
                "The reporting database does not match the expected schema".to_string()
            }
            AppError::DatabaseError(_) => "A database error occurred".to_string(),
            AppError::Internal(msg) => msg.clone(),
            AppError::InternalError(_) => "An internal server error occurred".to_string(),
        };

        let field = match &self {
            AppError::Validation { field, .. } => Some(field.clone()),
            _ => None,
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message,
                field,
            },
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
