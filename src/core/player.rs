//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Stable identifier chosen in the menu (traditionally 1..N). Ids are not
//! indices: turn rotation walks players in seat order, so a roster with gaps
//! (after removing a player) still rotates correctly.
//!
//! ## Player
//!
//! Hand, round score, trophies and reshuffle allowance for one player.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Player identifier, stable for a whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A roster line from the menu: who is playing and under what name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: PlayerId,
    pub name: String,
}

impl PlayerEntry {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One player's in-game data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Answer cards in hand, in draw order.
    pub hand: Vec<Card>,

    /// Round wins since the last trophy (0..likes_for_trophy).
    pub score: u32,

    /// Trophies won this game. Never decreases within a game.
    pub trophies: u32,

    /// Hand reshuffles left this game. Never increases within a game.
    pub remaining_shuffles: u32,
}

impl Player {
    /// Create a player with an empty hand and a fresh allowance.
    #[must_use]
    pub fn new(entry: &PlayerEntry, max_shuffles: u32) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            hand: Vec::new(),
            score: 0,
            trophies: 0,
            remaining_shuffles: max_shuffles,
        }
    }

    /// Whether the hand holds a card with this ID.
    #[must_use]
    pub fn holds(&self, card: &CardId) -> bool {
        self.hand.iter().any(|c| &c.id == card)
    }

    /// Remove one copy of a card from the hand.
    ///
    /// Returns the removed card, or `None` if it wasn't held.
    pub fn take_from_hand(&mut self, card: &CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| &c.id == card)?;
        Some(self.hand.remove(pos))
    }
}
