//! Error types for the HTTP service.
//! Maps engine and repository errors onto HTTP responses with a JSON body.
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use forum_engine::VoteError;
use forum_repository::{CommentsRepositoryError, SubjectsRepositoryError, UsersRepositoryError};
use thiserror::Error;
use tracing::error;

/// Represents errors surfaced by the request handlers.
///
/// Database failures are logged at the conversion site and reach the client
/// only as an opaque internal error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    InvalidAction(#[from] VoteError),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidAction(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<UsersRepositoryError> for ApiError {
    fn from(e: UsersRepositoryError) -> Self {
        match e {
            UsersRepositoryError::DuplicateUser => ApiError::Conflict(e.to_string()),
            UsersRepositoryError::DatabaseError(e) => {
                error!("Users repository error: {e}");
                ApiError::Internal
            }
        }
    }
}

impl From<SubjectsRepositoryError> for ApiError {
    fn from(e: SubjectsRepositoryError) -> Self {
        error!("Subjects repository error: {e}");
        ApiError::Internal
    }
}

impl From<CommentsRepositoryError> for ApiError {
    fn from(e: CommentsRepositoryError) -> Self {
        error!("Comments repository error: {e}");
        ApiError::Internal
    }
}
