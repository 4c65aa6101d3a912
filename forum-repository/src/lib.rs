//! # Forum Repository
//! This crate provides traits and implementations for interacting with the
//! discussion board's data store. It includes definitions for errors,
//! interfaces, and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{CommentsRepositoryError, SubjectsRepositoryError, UsersRepositoryError};
pub use interfaces::{CommentsRepository, SubjectsRepository, UsersRepository};
pub use postgres::{
    PostgresCommentsRepository, PostgresSubjectsRepository, PostgresUsersRepository, connect_pool,
};
