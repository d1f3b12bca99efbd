//! Reasons an action was not applied.
//!
//! A rejected action never changes the game state. The reason is returned so
//! hosts can log it or grey out a control; nothing is thrown.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Phase;
use super::timer::TimerToken;
use crate::cards::CardId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{action} is not allowed during {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("{0} is not in this game")]
    UnknownPlayer(PlayerId),

    #[error("prompt needs {expected} card(s), got {got}")]
    WrongCardCount { expected: usize, got: usize },

    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("{0} already submitted this round")]
    AlreadySubmitted(PlayerId),

    #[error("{0} already voted this round")]
    AlreadyVoted(PlayerId),

    #[error("{0} has no played set to vote for")]
    NotSubmitted(PlayerId),

    #[error("{0} has no reshuffles left")]
    NoShufflesLeft(PlayerId),

    #[error("a game needs at least {min} players")]
    RosterTooSmall { min: usize },

    #[error("{0} appears more than once in the roster")]
    DuplicatePlayerId(PlayerId),

    #[error("player names must not be empty")]
    EmptyName,

    #[error("win target must be at least 1")]
    InvalidWinTarget,

    #[error("{0} is no longer pending")]
    StaleTimer(TimerToken),
}
