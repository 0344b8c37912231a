//! Mapping from service failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::task::{domain::TaskId, ports::TaskServiceError};

/// Errors surfaced by task handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Any other service failure.
    #[error("internal error: {0}")]
    Internal(#[source] TaskServiceError),
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(id) => Self::NotFound(id),
            other @ TaskServiceError::Repository(_) => Self::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            Self::Internal(err) => {
                error!(error = %err, "task service failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}
