//! Deck Manager: the shared pool of answer cards.
//!
//! The pool holds every answer card nobody is holding. Cards move between
//! the pool, hands and played sets; they are never created or dropped,
//! with one exception: when a draw asks for more cards than the pool holds,
//! the pool is replaced by a fresh shuffle of the whole catalog. Cards may
//! then exist twice in a game. Play is never blocked by a short deck.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::config::EngineConfig;
use crate::core::player::Player;
use crate::core::rejection::Rejection;
use crate::core::rng::GameRng;

/// The pool of undealt answer cards. Draws come off the front.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pool: Vector<Card>,
    recycled: u32,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck holding a uniform shuffle of `answers`.
    #[must_use]
    pub fn shuffled(answers: &[Card], rng: &mut GameRng) -> Self {
        Self {
            pool: fresh_pool(answers, rng),
            recycled: 0,
        }
    }

    /// Cards left in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    /// The pool in draw order.
    #[must_use]
    pub fn pool(&self) -> &Vector<Card> {
        &self.pool
    }

    /// How many times the pool was refilled from the catalog this game.
    #[must_use]
    pub fn recycled(&self) -> u32 {
        self.recycled
    }

    /// Remove `count` cards from the front of the pool.
    ///
    /// If the pool holds fewer than `count` cards it is replaced by a fresh
    /// shuffle of `answers` first, so the result always has exactly `count`
    /// cards (as long as `answers` is not empty).
    pub fn draw(&mut self, count: usize, answers: &[Card], rng: &mut GameRng) -> Vec<Card> {
        if count == 0 || answers.is_empty() {
            return Vec::new();
        }

        if self.pool.len() < count {
            debug!(pool = self.pool.len(), count, "Pool short, recycling catalog");
            self.pool = fresh_pool(answers, rng);
            self.recycled += 1;
            while self.pool.len() < count {
                self.pool.append(fresh_pool(answers, rng));
            }
        }

        let rest = self.pool.split_off(count);
        let drawn = std::mem::replace(&mut self.pool, rest);
        drawn.into_iter().collect()
    }

    /// Put cards back at the bottom of the pool.
    pub fn return_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.pool.extend(cards);
    }
}

fn fresh_pool(answers: &[Card], rng: &mut GameRng) -> Vector<Card> {
    let mut cards = answers.to_vec();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Deal a new game.
///
/// Builds a freshly shuffled deck from the full answer catalog, gives each
/// player `hand_size` cards in seat order and resets their score and
/// reshuffle allowance. Returns the deck holding the remainder.
pub fn deal(
    players: &mut Vector<Player>,
    answers: &[Card],
    rng: &mut GameRng,
    config: &EngineConfig,
) -> Deck {
    let mut deck = Deck::shuffled(answers, rng);

    for player in players.iter_mut() {
        player.hand = deck.draw(config.hand_size, answers, rng);
        player.score = 0;
        player.remaining_shuffles = config.max_shuffles;
    }

    debug!(players = players.len(), pool = deck.len(), "Hands dealt");
    deck
}

/// Trade a player's hand for a fresh one.
///
/// The old hand goes back to the pool before the new hand is drawn. Rejected
/// (with nothing changed) once the allowance is used up.
pub fn reshuffle(
    deck: &mut Deck,
    player: &mut Player,
    answers: &[Card],
    rng: &mut GameRng,
    hand_size: usize,
) -> Result<(), Rejection> {
    if player.remaining_shuffles == 0 {
        return Err(Rejection::NoShufflesLeft(player.id));
    }

    deck.return_cards(std::mem::take(&mut player.hand));
    player.hand = deck.draw(hand_size, answers, rng);
    player.remaining_shuffles -= 1;
    Ok(())
}
