//! # Forum Shared
//! This crate provides the domain types shared across the discussion board
//! services: subjects, comments, users, and the vote membership model.
pub mod types;

pub use types::{
    Comment, SortOrder, Subject, SubjectSummary, User, VoteAction, VoteSets, VoteState, VoterId,
};
