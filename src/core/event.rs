//! Events emitted by applied actions.
//!
//! The presentation layer uses these to pick screens and sounds without
//! diffing snapshots. Events describe what happened, in order.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::timer::ScheduledTransition;
use crate::cards::CardId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began and hands were dealt.
    GameStarted { players: usize, win_target: u32 },

    /// A prompt became active.
    PromptRevealed { prompt: CardId },

    /// The pool ran short and was refilled from the full answer catalog.
    DeckRecycled,

    /// A player traded in their hand.
    HandShuffled {
        player: PlayerId,
        remaining_shuffles: u32,
    },

    /// A played set was recorded. `next_player` is `None` once everyone
    /// has played.
    PlaySubmitted {
        player: PlayerId,
        next_player: Option<PlayerId>,
    },

    /// Every player has played; voting begins with `first_voter`.
    VotingStarted { first_voter: PlayerId },

    /// A vote was recorded. `next_voter` is `None` on the deciding vote.
    VoteCast {
        voter: PlayerId,
        voted_for: PlayerId,
        next_voter: Option<PlayerId>,
    },

    /// The round was decided. `tied` counts the candidates that shared the
    /// top tally (1 when there was no tie).
    RoundWon {
        player: PlayerId,
        votes: u32,
        tied: usize,
    },

    /// The round winner's score converted into a trophy.
    TrophyAwarded { player: PlayerId, trophies: u32 },

    /// A player reached the win target. The game is over.
    GameWon { player: PlayerId },

    /// A delayed transition was scheduled; fire it after `delay`.
    TimerScheduled(ScheduledTransition),

    /// Play resumed after the round-winner screen.
    Resumed,

    /// The game was left for the menu.
    ReturnedToMenu,
}
