//! Game state: public snapshot and full engine state.
//!
//! ## PublicState
//!
//! Everything the presentation layer reads:
//! - Phase, active prompt, round number, win target
//! - Players with hands, scores, trophies and reshuffle allowances
//! - Played sets and votes of the current round
//! - Whose turn it is to play or vote, round and game winners
//!
//! ## GameState
//!
//! Public state plus the deck pool, the RNG and the pending timer.
//!
//! Collections are `im` persistent structures, so cloning a state for each
//! transition (and keeping old ones for undo) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, PlayerEntry, PlayerId};
use super::rng::GameRng;
use super::timer::{ScheduledTransition, TimerToken};
use crate::cards::{fill_blanks, Card, PlayedCard};
use crate::deck::Deck;

/// Top-level phase of the game.
///
/// `Menu` → `Playing` ⇄ `Voting` → `Winner` (timed, back to `Playing`) or
/// `GameOver` (left only through the menu).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Voting,
    Winner,
    GameOver,
}

/// Cards one player submitted for the current prompt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedSet {
    pub player: PlayerId,
    pub cards: SmallVec<[PlayedCard; 3]>,
}

impl PlayedSet {
    /// The answer cards without their blank tags, in blank order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().map(|played| &played.card)
    }
}

/// One voter's choice for the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: PlayerId,
    pub voted_for: PlayerId,
}

/// Public game state - the read-only snapshot handed to the presentation
/// layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    /// Current phase.
    pub phase: Phase,

    /// Active prompt. `None` only before the first game.
    pub prompt: Option<Card>,

    /// Players in seat order.
    pub players: Vector<Player>,

    /// Played sets of the current round, in submission order.
    pub played_sets: Vector<PlayedSet>,

    /// Votes of the current round, in casting order.
    pub votes: Vector<Vote>,

    /// Whose turn it is to submit.
    pub current_player: PlayerId,

    /// Whose turn it is to vote.
    pub voting_player: PlayerId,

    /// Winner of the most recent round.
    pub round_winner: Option<PlayerId>,

    /// Winner of the game, once it is over.
    pub game_winner: Option<PlayerId>,

    /// Trophies needed to win.
    pub win_target: u32,

    /// Round number (starts at 1 when a game starts).
    pub round: u32,
}

impl PublicState {
    /// Create a menu-phase state holding the given roster.
    #[must_use]
    pub fn new(roster: &[PlayerEntry], max_shuffles: u32, win_target: u32) -> Self {
        let players: Vector<Player> = roster
            .iter()
            .map(|entry| Player::new(entry, max_shuffles))
            .collect();
        let first = players.front().map_or(PlayerId::new(1), |p| p.id);

        Self {
            phase: Phase::Menu,
            prompt: None,
            players,
            played_sets: Vector::new(),
            votes: Vector::new(),
            current_player: first,
            voting_player: first,
            round_winner: None,
            game_winner: None,
            win_target,
            round: 0,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Iterate over player IDs in seat order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// The player in the first seat.
    #[must_use]
    pub fn first_player(&self) -> Option<PlayerId> {
        self.players.front().map(|p| p.id)
    }

    /// Seat index of a player.
    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == player)
    }

    /// Get a player by ID.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player)
    }

    /// Get a mutable player by ID.
    pub fn player_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        let seat = self.seat_of(player)?;
        self.players.get_mut(seat)
    }

    /// The roster as it would appear in the menu.
    #[must_use]
    pub fn roster(&self) -> Vec<PlayerEntry> {
        self.players
            .iter()
            .map(|p| PlayerEntry::new(p.id, p.name.clone()))
            .collect()
    }

    // === Round Progress ===

    /// Whether a player has submitted this round.
    #[must_use]
    pub fn has_played(&self, player: PlayerId) -> bool {
        self.played_sets.iter().any(|s| s.player == player)
    }

    /// A player's played set for this round.
    #[must_use]
    pub fn played_set(&self, player: PlayerId) -> Option<&PlayedSet> {
        self.played_sets.iter().find(|s| s.player == player)
    }

    /// Whether a player has voted this round.
    #[must_use]
    pub fn has_voted(&self, player: PlayerId) -> bool {
        self.votes.iter().any(|v| v.voter == player)
    }

    /// Votes received so far by a player's played set.
    #[must_use]
    pub fn vote_count(&self, player: PlayerId) -> usize {
        self.votes.iter().filter(|v| v.voted_for == player).count()
    }

    /// Answer cards each player must submit for the active prompt.
    #[must_use]
    pub fn required_answers(&self, marker: &str) -> usize {
        self.prompt
            .as_ref()
            .map_or(1, |prompt| prompt.required_answers(marker))
    }

    /// The active prompt with a player's played set filled in.
    #[must_use]
    pub fn rendered_play(&self, player: PlayerId, marker: &str) -> Option<String> {
        let prompt = self.prompt.as_ref()?;
        let set = self.played_set(player)?;
        Some(fill_blanks(&prompt.text, marker, &set.cards))
    }
}

/// Full game state: public snapshot plus hidden engine bookkeeping.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Public state (read by the presentation layer).
    pub public: PublicState,

    /// Answer cards not held by anyone.
    pub deck: Deck,

    /// Seedable RNG for shuffles and tie-breaks.
    pub rng: GameRng,

    /// Pending delayed transition, if any.
    pub timer: Option<ScheduledTransition>,

    next_timer_token: u64,
}

impl GameState {
    /// Create a menu-phase state.
    #[must_use]
    pub fn new(roster: &[PlayerEntry], max_shuffles: u32, win_target: u32, rng: GameRng) -> Self {
        Self {
            public: PublicState::new(roster, max_shuffles, win_target),
            deck: Deck::new(),
            rng,
            timer: None,
            next_timer_token: 1,
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.public.player_count()
    }

    /// Schedule a delayed transition, replacing any pending one.
    pub fn schedule(&mut self, delay: std::time::Duration) -> ScheduledTransition {
        let scheduled = ScheduledTransition {
            token: TimerToken(self.next_timer_token),
            delay,
        };
        self.next_timer_token += 1;
        self.timer = Some(scheduled);
        scheduled
    }

    /// Cancel the pending delayed transition.
    pub fn cancel_timer(&mut self) -> Option<ScheduledTransition> {
        self.timer.take()
    }

    /// Total answer cards in circulation: pool, hands and played sets.
    #[must_use]
    pub fn cards_in_circulation(&self) -> usize {
        let in_hands: usize = self.public.players.iter().map(|p| p.hand.len()).sum();
        let in_play: usize = self.public.played_sets.iter().map(|s| s.cards.len()).sum();
        self.deck.len() + in_hands + in_play
    }
}
