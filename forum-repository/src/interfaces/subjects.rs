//! This module defines the `SubjectsRepository` trait, which provides an
//! interface for interacting with the underlying data store for discussion
//! subjects, their vote membership, and their stored net score.
use forum_shared::{Subject, SubjectSummary, VoteSets};
use uuid::Uuid;

use crate::errors::SubjectsRepositoryError;

/// A trait that defines the interface for interacting with the subjects store.
///
/// Implementors provide methods for creating subjects, listing them for
/// display, and persisting vote engine outcomes.
#[async_trait::async_trait]
pub trait SubjectsRepository: Send + Sync {
    /// Inserts a new `Subject` into the repository.
    ///
    /// # Errors
    ///
    /// Returns a `SubjectsRepositoryError` if the insertion fails.
    async fn insert_subject(&self, subject: &Subject) -> Result<(), SubjectsRepositoryError>;

    /// Lists all subjects, newest first, each carrying its comment count.
    ///
    /// # Errors
    ///
    /// Returns a `SubjectsRepositoryError` if the query fails.
    async fn list_subjects(&self) -> Result<Vec<SubjectSummary>, SubjectsRepositoryError>;

    /// Fetches one subject by id, or `None` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns a `SubjectsRepositoryError` if the query fails.
    async fn get_subject(&self, id: Uuid) -> Result<Option<Subject>, SubjectsRepositoryError>;

    /// Persists a vote engine outcome for one subject.
    ///
    /// Writes the new membership sets and applies `delta` as a single atomic
    /// increment against the stored count, stamping `updated_at`. The count
    /// must never be persisted by read-compute-write, or concurrent voters
    /// on the same subject would lose updates.
    ///
    /// Returns the updated subject, or `None` when the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns a `SubjectsRepositoryError` if the update fails.
    async fn apply_vote(
        &self,
        id: Uuid,
        votes: &VoteSets,
        delta: i64,
    ) -> Result<Option<Subject>, SubjectsRepositoryError>;
}
