use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use sqlx::error::ErrorKind;
use thiserror::Error as ThisError;
use tracing::{debug, error};

#[derive(Debug, ThisError)]
pub enum PeopleError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid id: {0:?}")]
    InvalidId(String),

    #[error("User not found")]
    NotFound,
}

/// Coarse classification of storage failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    NotFound,
    ConstraintViolation,
    Connection,
    Other,
}

impl StorageErrorKind {
    pub fn classify(err: &SqlxError) -> Self {
        match err {
            SqlxError::RowNotFound => StorageErrorKind::NotFound,
            SqlxError::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StorageErrorKind::ConstraintViolation,
                _ => StorageErrorKind::Other,
            },
            SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed => StorageErrorKind::Connection,
            _ => StorageErrorKind::Other,
        }
    }
}

impl IntoResponse for PeopleError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            PeopleError::NotFound => {
                debug!("person not found");
                (StatusCode::NOT_FOUND, ApiErrorBody::not_found())
            }
            PeopleError::Json(e) => {
                debug!(error = %e, "rejected request body");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorBody {
                        code: "BAD_REQUEST".to_string(),
                        message: e.to_string(),
                    },
                )
            }
            PeopleError::InvalidId(raw) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "INVALID_ID".to_string(),
                    message: format!("invalid id: {raw:?}"),
                },
            ),
            PeopleError::DatabaseError(e) => match StorageErrorKind::classify(&e) {
                StorageErrorKind::NotFound => (StatusCode::NOT_FOUND, ApiErrorBody::not_found()),
                kind => {
                    error!(error = %e, ?kind, "storage operation failed");
                    let code = match kind {
                        StorageErrorKind::ConstraintViolation => "CONSTRAINT_VIOLATION",
                        StorageErrorKind::Connection => "DATABASE_UNAVAILABLE",
                        _ => "INTERNAL_ERROR",
                    };
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiErrorBody {
                            code: code.to_string(),
                            message: e.to_string(),
                        },
                    )
                }
            },
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

impl ApiErrorBody {
    fn not_found() -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: PeopleError::NotFound.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
