//! This module defines the `UsersRepository` trait, which provides an
//! interface for interacting with the underlying data store for users.
use forum_shared::User;

use crate::errors::UsersRepositoryError;

/// A trait that defines the interface for interacting with the users store.
#[async_trait::async_trait]
pub trait UsersRepository: Send + Sync {
    /// Inserts a new `User` into the repository.
    ///
    /// # Errors
    ///
    /// Returns `UsersRepositoryError::DuplicateUser` when the username or
    /// email is already taken, or a database error otherwise.
    async fn insert_user(&self, user: &User) -> Result<(), UsersRepositoryError>;

    /// Finds a user by email, or `None` when no such user exists.
    ///
    /// # Errors
    ///
    /// Returns a `UsersRepositoryError` if the query fails.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersRepositoryError>;

    /// Finds a user matching either the username or the email, used to
    /// reject duplicate registrations up front.
    ///
    /// # Errors
    ///
    /// Returns a `UsersRepositoryError` if the query fails.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, UsersRepositoryError>;
}
