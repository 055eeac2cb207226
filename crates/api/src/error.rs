use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rickmorty_core::error::CoreError;
use rickmorty_core::validation::FieldViolation;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so every failure path produces the
/// `{error, details?}` JSON envelope the wire contract specifies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input violated declared constraints. Carries the full list of
    /// violations; they are always reported together, never one at a time.
    #[error("{error}")]
    Validation {
        /// Fixed envelope message (`Validation failed` or `Invalid ID`).
        error: &'static str,
        details: Vec<FieldViolation>,
    },

    /// A domain-level error from `rickmorty_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation { error, details } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": error, "details": details }),
            ),

            // The only domain error this API produces is a missing row; its
            // Display string is the fixed wire message.
            AppError::Core(core) => (StatusCode::NOT_FOUND, json!({ "error": core.to_string() })),

            // Store failures pass the underlying message through verbatim.
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
