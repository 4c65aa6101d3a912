//! Error types for the subjects repository.
//! Defines specific errors that can occur during database operations on subjects.
use thiserror::Error;

/// Represents errors that can occur within the subjects repository.
#[derive(Debug, Error)]
pub enum SubjectsRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}
