//! Action representation: the entry points the presentation layer calls.
//!
//! Every user interaction is one `Action`. The engine applies actions one at
//! a time; an action is either applied in full or rejected with the state
//! left untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerEntry, PlayerId};
use super::timer::TimerToken;
use crate::cards::CardId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use blank_party::core::{Action, PlayerId};
/// use blank_party::cards::CardId;
///
/// let play = Action::submit(PlayerId::new(1), [CardId::new("p3")]);
/// let vote = Action::CastVote { voter: PlayerId::new(2), voted_for: PlayerId::new(1) };
/// assert_ne!(play, vote);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Reset the roster's progress, deal hands and start playing.
    StartGame {
        players: Vec<PlayerEntry>,
        win_target: u32,
    },

    /// Trade the whole hand for a fresh one (limited per game).
    ShuffleHand { player: PlayerId },

    /// Submit answer cards for the active prompt, in blank order.
    SubmitPlay {
        player: PlayerId,
        /// SmallVec covers the usual one to three blanks without allocating.
        cards: SmallVec<[CardId; 3]>,
    },

    /// Vote for another player's (or one's own) played set.
    CastVote {
        voter: PlayerId,
        voted_for: PlayerId,
    },

    /// The round-winner screen's delay has elapsed.
    WinnerTimeout { token: TimerToken },

    /// Leave the current game for the menu.
    ReturnToMenu,
}

impl Action {
    /// Build a `SubmitPlay` action.
    #[must_use]
    pub fn submit(player: PlayerId, cards: impl IntoIterator<Item = CardId>) -> Self {
        Self::SubmitPlay {
            player,
            cards: cards.into_iter().collect(),
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::StartGame { .. } => "start_game",
            Action::ShuffleHand { .. } => "shuffle_hand",
            Action::SubmitPlay { .. } => "submit_play",
            Action::CastVote { .. } => "cast_vote",
            Action::WinnerTimeout { .. } => "winner_timeout",
            Action::ReturnToMenu => "return_to_menu",
        }
    }
}

/// An applied action with metadata for the replay log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Round number when the action was applied.
    pub round: u32,

    /// Global sequence number (order of application).
    pub sequence: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: u32, sequence: u64) -> Self {
        Self {
            action,
            round,
            sequence,
        }
    }
}
