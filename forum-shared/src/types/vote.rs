use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an acting user. Votes are keyed by this value, so it
/// only needs to be stable and comparable, never interpreted.
pub type VoterId = String;

/// Represents the vote action requested by a user.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    /// Indicates a like or positive endorsement.
    Like,
    /// Indicates a dislike or negative endorsement.
    Dislike,
    /// Indicates the removal or retraction of a previous vote.
    Remove,
}

impl VoteAction {
    /// Parses the wire representation of an action. Returns `None` for any
    /// string outside the enumerated set.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "like" => Some(VoteAction::Like),
            "dislike" => Some(VoteAction::Dislike),
            "remove" => Some(VoteAction::Remove),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            VoteAction::Like => "like",
            VoteAction::Dislike => "dislike",
            VoteAction::Remove => "remove",
        }
    }
}

/// The standing vote of a single voter on a votable item. Absence from both
/// membership sets is the neutral state and has no variant here.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VoteState {
    Liked,
    Disliked,
}

/// Vote membership of a votable item (a subject or a comment).
///
/// A voter id appears in at most one of the two sets at any time; the vote
/// engine is the only writer and maintains that exclusivity.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteSets {
    pub liked_by: HashSet<VoterId>,
    pub disliked_by: HashSet<VoterId>,
}

impl VoteSets {
    /// Returns the standing vote of `voter`, or `None` when neutral.
    pub fn state_of(&self, voter: &str) -> Option<VoteState> {
        if self.liked_by.contains(voter) {
            Some(VoteState::Liked)
        } else if self.disliked_by.contains(voter) {
            Some(VoteState::Disliked)
        } else {
            None
        }
    }

    pub fn liked(&self, voter: &str) -> bool {
        self.liked_by.contains(voter)
    }

    pub fn disliked(&self, voter: &str) -> bool {
        self.disliked_by.contains(voter)
    }

    /// Net score implied by the membership sets alone.
    pub fn net_score(&self) -> i64 {
        self.liked_by.len() as i64 - self.disliked_by.len() as i64
    }
}
