//! This module defines the `CommentsRepository` trait, which provides an
//! interface for interacting with the underlying data store for comments.
//! Comments are stored flat; threading is reconstructed by the engine on read.
use forum_shared::{Comment, VoteSets};
use uuid::Uuid;

use crate::errors::CommentsRepositoryError;

/// A trait that defines the interface for interacting with the comments store.
#[async_trait::async_trait]
pub trait CommentsRepository: Send + Sync {
    /// Inserts a new `Comment` into the repository.
    ///
    /// # Errors
    ///
    /// Returns a `CommentsRepositoryError` if the insertion fails.
    async fn insert_comment(&self, comment: &Comment) -> Result<(), CommentsRepositoryError>;

    /// Fetches the flat comment list of one subject, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a `CommentsRepositoryError` if the query fails.
    async fn list_for_subject(
        &self,
        subject_id: Uuid,
    ) -> Result<Vec<Comment>, CommentsRepositoryError>;

    /// Fetches one comment by id, or `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a `CommentsRepositoryError` if the query fails.
    async fn get_comment(&self, id: Uuid) -> Result<Option<Comment>, CommentsRepositoryError>;

    /// Persists a vote engine outcome for one comment. Same contract as
    /// `SubjectsRepository::apply_vote`: membership is replaced, the count
    /// moves by a single atomic increment.
    ///
    /// # Errors
    ///
    /// Returns a `CommentsRepositoryError` if the update fails.
    async fn apply_vote(
        &self,
        id: Uuid,
        votes: &VoteSets,
        delta: i64,
    ) -> Result<Option<Comment>, CommentsRepositoryError>;
}
