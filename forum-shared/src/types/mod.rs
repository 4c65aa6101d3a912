mod comment;
mod subject;
mod user;
mod vote;

pub use comment::{Comment, SortOrder};
pub use subject::{Subject, SubjectSummary};
pub use user::User;
pub use vote::{VoteAction, VoteSets, VoteState, VoterId};
