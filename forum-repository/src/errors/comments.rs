//! Error types for the comments repository.
//! Defines specific errors that can occur during database operations on comments.
use thiserror::Error;

/// Represents errors that can occur within the comments repository.
#[derive(Debug, Error)]
pub enum CommentsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
