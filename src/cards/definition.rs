//! Card data: prompts ("common" cards) and answers ("private" cards).
//!
//! Cards are static. The engine moves clones of them between the deck pool,
//! hands and played sets but never edits their text.

use serde::{Deserialize, Serialize};

use super::blanks;

/// Unique identifier for a card within its catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Which catalog a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Shared prompt revealed once per round. Contains blank markers.
    Common,
    /// Answer card held in a player's hand.
    Private,
}

/// A prompt or answer card.
///
/// ```
/// use blank_party::cards::{Card, CardKind};
///
/// let prompt = Card::common("c1", "I never leave home without _____ and _____.");
/// assert_eq!(prompt.kind, CardKind::Common);
/// assert_eq!(prompt.blank_count("_____"), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub kind: CardKind,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id: CardId::new(id),
            text: text.into(),
            kind,
        }
    }

    /// Create a prompt card.
    #[must_use]
    pub fn common(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, text, CardKind::Common)
    }

    /// Create an answer card.
    #[must_use]
    pub fn private(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, text, CardKind::Private)
    }

    /// Number of blank markers in the card text.
    #[must_use]
    pub fn blank_count(&self, marker: &str) -> usize {
        blanks::count_blanks(&self.text, marker)
    }

    /// Number of answer cards a player must submit for this prompt.
    ///
    /// A prompt without markers still takes a single answer.
    #[must_use]
    pub fn required_answers(&self, marker: &str) -> usize {
        self.blank_count(marker).max(1)
    }
}

/// An answer card as submitted, tagged with the blank it fills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub card: Card,
    /// Zero-based blank slot in the prompt.
    pub blank_index: usize,
}

impl PlayedCard {
    #[must_use]
    pub fn new(card: Card, blank_index: usize) -> Self {
        Self { card, blank_index }
    }
}
