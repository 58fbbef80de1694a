use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thingstore_core::storage::RepositoryError;

/// Body returned for every unhandled failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Unhandled handler failure.
///
/// Wraps `anyhow::Error` so handlers can use `?` on storage and parsing
/// errors. Every unhandled failure surfaces as the same generic 500; only
/// the Read handler turns a missing record into a client-facing 404.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0.downcast_ref::<RepositoryError>() {
            Some(repo_error) if repo_error.is_condition_failure() => {
                tracing::warn!(error = %self.0, "Conditional write failed");
            }
            _ => tracing::error!(error = %self.0, "Unhandled error"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": INTERNAL_ERROR_MESSAGE })),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
