//! Static card catalogs.
//!
//! A `Catalog` holds every prompt and answer card available to a game. It
//! is read-only to the engine: the Deck Manager shuffles clones of the
//! answer list, and the Round Resolver picks prompts from the prompt list.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::{Card, CardId, CardKind};

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no prompt cards")]
    NoPrompts,

    #[error("catalog has no answer cards")]
    NoAnswers,

    #[error("card id {0} appears more than once")]
    DuplicateId(CardId),

    #[error("{id} is filed under {expected:?} cards but has the wrong kind")]
    WrongKind { id: CardId, expected: CardKind },

    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk shape of a catalog: kinds are implied by the list a card is in.
#[derive(Deserialize)]
struct CatalogDocument {
    common: Vec<CardEntry>,
    private: Vec<CardEntry>,
}

#[derive(Deserialize)]
struct CardEntry {
    id: String,
    text: String,
}

/// Prompt and answer cards for one game.
///
/// ## Example
///
/// ```
/// use blank_party::cards::Catalog;
///
/// let catalog = Catalog::from_json(r#"{
///     "common":  [{ "id": "c1", "text": "Best excuse ever: _____." }],
///     "private": [{ "id": "p1", "text": "My cat" }, { "id": "p2", "text": "Traffic" }]
/// }"#).unwrap();
///
/// assert_eq!(catalog.prompts().len(), 1);
/// assert_eq!(catalog.answers().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogParts")]
pub struct Catalog {
    prompts: Vec<Card>,
    answers: Vec<Card>,
}

/// Serialized form of a [`Catalog`], checked by `Catalog::new` on the way in.
#[derive(Deserialize)]
struct CatalogParts {
    prompts: Vec<Card>,
    answers: Vec<Card>,
}

impl TryFrom<CatalogParts> for Catalog {
    type Error = CatalogError;

    fn try_from(parts: CatalogParts) -> Result<Self, Self::Error> {
        Self::new(parts.prompts, parts.answers)
    }
}

impl Catalog {
    /// Build a catalog, checking that both lists are usable.
    ///
    /// Ids must be unique across the whole catalog; prompts must be
    /// `Common` and answers `Private`.
    pub fn new(prompts: Vec<Card>, answers: Vec<Card>) -> Result<Self, CatalogError> {
        if prompts.is_empty() {
            return Err(CatalogError::NoPrompts);
        }
        if answers.is_empty() {
            return Err(CatalogError::NoAnswers);
        }

        let mut seen = FxHashSet::default();
        for (cards, expected) in [(&prompts, CardKind::Common), (&answers, CardKind::Private)] {
            for card in cards {
                if card.kind != expected {
                    return Err(CatalogError::WrongKind {
                        id: card.id.clone(),
                        expected,
                    });
                }
                if !seen.insert(card.id.clone()) {
                    return Err(CatalogError::DuplicateId(card.id.clone()));
                }
            }
        }

        Ok(Self { prompts, answers })
    }

    /// Parse a `{ "common": [...], "private": [...] }` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        let prompts = doc
            .common
            .into_iter()
            .map(|e| Card::common(e.id, e.text))
            .collect();
        let answers = doc
            .private
            .into_iter()
            .map(|e| Card::private(e.id, e.text))
            .collect();
        Self::new(prompts, answers)
    }

    /// Small built-in catalog for demos and tests.
    ///
    /// Large enough for four players to hold full hands and answer a
    /// two-blank prompt without recycling the deck.
    #[must_use]
    pub fn sample() -> Self {
        const PROMPTS: [&str; 8] = [
            "The real reason I was late: _____.",
            "My grandmother's secret recipe calls for _____.",
            "_____ is the new _____.",
            "Nobody expected the wedding speech to mention _____.",
            "Step one: _____. Step two: _____. Step three: profit.",
            "The museum's newest exhibit is entirely about _____.",
            "I lost my job because of _____.",
            "Tonight on the news: _____ versus _____.",
        ];
        const ANSWERS: [&str; 40] = [
            "A suspicious amount of glitter",
            "My ex's playlist",
            "Interpretive dance",
            "A very confident pigeon",
            "Tax season",
            "Unlimited breadsticks",
            "The group chat",
            "A haunted printer",
            "Crying in the car",
            "Grandpa's conspiracy theories",
            "An emotional support cactus",
            "Mandatory fun",
            "Cold pizza for breakfast",
            "A motivational poster",
            "Reply-all",
            "The last slice of cake",
            "A dramatic exit",
            "Socks with sandals",
            "An awkward hug",
            "The neighbor's leaf blower",
            "A free trial I forgot to cancel",
            "Karaoke night",
            "A llama in a hat",
            "Passive-aggressive sticky notes",
            "The Wi-Fi password",
            "A midlife crisis",
            "Too much hot sauce",
            "An unpaid intern",
            "A self-help podcast",
            "Spontaneous applause",
            "Pineapple on pizza",
            "A mysterious rash",
            "My browser history",
            "A perfectly good nap",
            "Sourdough starter",
            "The office microwave",
            "A goose with a grudge",
            "Aggressive networking",
            "Three raccoons in a trench coat",
            "An alarm set for PM",
        ];

        let prompts = PROMPTS
            .iter()
            .enumerate()
            .map(|(i, text)| Card::common(format!("c{}", i + 1), *text))
            .collect();
        let answers = ANSWERS
            .iter()
            .enumerate()
            .map(|(i, text)| Card::private(format!("p{}", i + 1), *text))
            .collect();

        Self { prompts, answers }
    }

    /// All prompt cards.
    #[must_use]
    pub fn prompts(&self) -> &[Card] {
        &self.prompts
    }

    /// All answer cards.
    #[must_use]
    pub fn answers(&self) -> &[Card] {
        &self.answers
    }

    /// Look up an answer card by ID.
    #[must_use]
    pub fn answer(&self, id: &CardId) -> Option<&Card> {
        self.answers.iter().find(|c| &c.id == id)
    }

    /// Look up a prompt card by ID.
    #[must_use]
    pub fn prompt(&self, id: &CardId) -> Option<&Card> {
        self.prompts.iter().find(|c| &c.id == id)
    }
}
