use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::VoteSets;

/// A stored comment. Threading is flat in storage: each comment carries an
/// optional reference to its parent, and the reply tree is reconstructed on
/// read. A comment never owns its replies here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: Uuid,
    pub subject_id: Uuid,
    /// `None` means top-level, attached directly under the subject.
    pub parent_comment_id: Option<Uuid>,
    pub content: String,
    pub author_id: String,
    pub author_username: String,
    /// Stored net score, kept equal to likes minus dislikes by applying the
    /// vote engine's delta atomically on every mutation.
    pub like_count: i64,
    pub votes: VoteSets,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Display ordering for top-level comments. Replies under a parent always
/// read oldest first, independent of this toggle.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Parses the wire representation of the sort toggle.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }
}
