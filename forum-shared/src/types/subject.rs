use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::VoteSets;

/// A discussion topic. Created with an empty vote membership and a zero
/// count; mutated only through the vote engine.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub author_id: String,
    pub author_username: String,
    pub like_count: i64,
    pub votes: VoteSets,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A subject together with its comment count, as produced by the listing
/// query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub subject: Subject,
    pub comment_count: i64,
}
