//! # Forum Engine
//! This crate holds the two algorithmic pieces of the discussion board: the
//! per-voter like/dislike state machine and the comment thread builder. Both
//! are pure, synchronous functions over data owned by the caller; persistence
//! and transport live elsewhere.
pub mod errors;
pub mod thread;
pub mod vote;

pub use errors::VoteError;
pub use thread::{CommentNode, build_tree};
pub use vote::{VoteOutcome, apply_vote, parse_action};
