//! The per-voter vote state machine.
//!
//! A voter is in one of three states with respect to a votable item: neutral,
//! liked, or disliked. Applying an action moves the voter between states and
//! yields the net-score delta of that move. Switching directly between liked
//! and disliked moves two units in a single step, so the stored count and the
//! membership sets never expose a half-applied switch to a concurrent reader.
use forum_shared::{VoteAction, VoteSets, VoteState};

use crate::errors::VoteError;

/// The result of applying one vote action.
///
/// `delta` is a relative change, not a new absolute count: the caller must
/// apply it as a single atomic increment against the stored count so that
/// concurrent voters on the same item cannot lose an update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteOutcome {
    /// The new membership sets to persist.
    pub sets: VoteSets,
    /// Net-score change caused by this action.
    pub delta: i64,
    /// The voter's standing after the action, `None` when neutral.
    pub state: Option<VoteState>,
}

/// Parses a wire action string, rejecting anything outside the enumerated
/// set without touching any state.
///
/// # Errors
///
/// Returns `VoteError::InvalidAction` carrying the offending string.
pub fn parse_action(value: &str) -> Result<VoteAction, VoteError> {
    VoteAction::from_wire(value).ok_or_else(|| VoteError::InvalidAction(value.to_string()))
}

/// Applies one vote action for one voter and returns the new membership plus
/// the count delta.
///
/// Pure function: the input sets are untouched and the caller is responsible
/// for persisting the outcome. Absence of the voter from both sets is the
/// neutral state, not an error.
///
/// Transition table (state before the action, then delta):
///
/// | before    | Like         | Dislike       | Remove       |
/// |-----------|--------------|---------------|--------------|
/// | neutral   | liked, +1    | disliked, -1  | neutral, 0   |
/// | liked     | neutral, -1  | disliked, -2  | neutral, -1  |
/// | disliked  | liked, +2    | neutral, +1   | neutral, +1  |
pub fn apply_vote(current: &VoteSets, voter: &str, action: VoteAction) -> VoteOutcome {
    let before = current.state_of(voter);

    let (after, delta) = match (before, action) {
        (None, VoteAction::Like) => (Some(VoteState::Liked), 1),
        (None, VoteAction::Dislike) => (Some(VoteState::Disliked), -1),
        (None, VoteAction::Remove) => (None, 0),
        (Some(VoteState::Liked), VoteAction::Like) => (None, -1),
        (Some(VoteState::Liked), VoteAction::Dislike) => (Some(VoteState::Disliked), -2),
        (Some(VoteState::Liked), VoteAction::Remove) => (None, -1),
        (Some(VoteState::Disliked), VoteAction::Like) => (Some(VoteState::Liked), 2),
        (Some(VoteState::Disliked), VoteAction::Dislike) => (None, 1),
        (Some(VoteState::Disliked), VoteAction::Remove) => (None, 1),
    };

    let mut sets = current.clone();
    sets.liked_by.remove(voter);
    sets.disliked_by.remove(voter);
    match after {
        Some(VoteState::Liked) => {
            sets.liked_by.insert(voter.to_string());
        }
        Some(VoteState::Disliked) => {
            sets.disliked_by.insert(voter.to_string());
        }
        None => {}
    }

    VoteOutcome {
        sets,
        delta,
        state: after,
    }
}
