//! Error types for the users repository.
//! Defines specific errors that can occur during database operations on users.
use thiserror::Error;

/// Represents errors that can occur within the users repository.
#[derive(Debug, Error)]
pub enum UsersRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("User with this email or username already exists")]
    DuplicateUser,
}
