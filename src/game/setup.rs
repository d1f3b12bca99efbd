//! Menu-side roster editing.
//!
//! The menu edits a `Roster` and hands its entries to `Action::StartGame`.
//! Returning to the menu gives back the roster of the last game, names and
//! ids intact, for re-editing.

use rustc_hash::FxHashSet;

use crate::core::player::{PlayerEntry, PlayerId};
use crate::core::rejection::Rejection;

/// Check that a roster can start a game.
///
/// Needs at least `min_players` entries, unique ids and non-blank names.
pub fn validate_roster(entries: &[PlayerEntry], min_players: usize) -> Result<(), Rejection> {
    if entries.len() < min_players {
        return Err(Rejection::RosterTooSmall { min: min_players });
    }

    let mut seen = FxHashSet::default();
    for entry in entries {
        if !seen.insert(entry.id) {
            return Err(Rejection::DuplicatePlayerId(entry.id));
        }
        if entry.name.trim().is_empty() {
            return Err(Rejection::EmptyName);
        }
    }
    Ok(())
}

/// Players configured in the menu.
///
/// ## Example
///
/// ```
/// use blank_party::game::Roster;
/// use blank_party::core::PlayerId;
///
/// let mut roster = Roster::new(2);
/// let third = roster.add();
/// assert_eq!(third, PlayerId::new(3));
/// assert_eq!(roster.entries()[2].name, "Player 3");
///
/// roster.remove(third).unwrap();
/// assert!(roster.remove(PlayerId::new(1)).is_err()); // already at the minimum
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<PlayerEntry>,
    min_players: usize,
}

impl Roster {
    /// A roster of `min_players` default players ("Player 1", "Player 2", ...).
    #[must_use]
    pub fn new(min_players: usize) -> Self {
        let entries = (1..=min_players)
            .map(|i| {
                let id = PlayerId::new(u32::try_from(i).unwrap_or(u32::MAX));
                PlayerEntry::new(id, default_name(id))
            })
            .collect();
        Self {
            entries,
            min_players,
        }
    }

    /// Wrap existing entries.
    #[must_use]
    pub fn from_entries(entries: Vec<PlayerEntry>, min_players: usize) -> Self {
        Self {
            entries,
            min_players,
        }
    }

    /// The entries in seat order.
    #[must_use]
    pub fn entries(&self) -> &[PlayerEntry] {
        &self.entries
    }

    /// Consume the roster, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<PlayerEntry> {
        self.entries
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a player with the next free id and a default name.
    pub fn add(&mut self) -> PlayerId {
        let next = self.entries.iter().map(|e| e.id.raw()).max().unwrap_or(0) + 1;
        let id = PlayerId::new(next);
        self.entries.push(PlayerEntry::new(id, default_name(id)));
        id
    }

    /// Remove a player. Rejected at the minimum roster size.
    pub fn remove(&mut self, id: PlayerId) -> Result<(), Rejection> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(Rejection::UnknownPlayer(id))?;
        if self.entries.len() <= self.min_players {
            return Err(Rejection::RosterTooSmall {
                min: self.min_players,
            });
        }
        self.entries.remove(pos);
        Ok(())
    }

    /// Rename a player. Blank names are rejected.
    pub fn rename(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), Rejection> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Rejection::EmptyName);
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Rejection::UnknownPlayer(id))?;
        entry.name = name;
        Ok(())
    }

    /// Check that this roster can start a game.
    pub fn validate(&self) -> Result<(), Rejection> {
        validate_roster(&self.entries, self.min_players)
    }
}

fn default_name(id: PlayerId) -> String {
    format!("Player {}", id.raw())
}
