//! Error types for the forum engine.
//! Defines the errors that can occur when interpreting vote requests.
use thiserror::Error;

/// Represents errors that can occur within the vote engine.
///
/// Orphaned comments are deliberately absent here: the thread builder drops
/// them silently and is total over any input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoteError {
    #[error("Invalid action '{0}'. Must be 'like', 'dislike', or 'remove'")]
    InvalidAction(String),
}
