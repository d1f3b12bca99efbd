//! # blank-party
//!
//! Game-state engine for a pass-and-play "fill-in-the-blank" party card game.
//! One device goes around the table: each player answers the round's prompt
//! with cards from their hand, everyone votes for the funniest answer, and
//! round wins add up to trophies.
//!
//! ## Design Principles
//!
//! 1. **One State Record**: All game data lives in a single `GameState`.
//!    Every action is a transition `(state, action) -> state'`.
//!
//! 2. **Rejections Change Nothing**: An invalid action returns the reason and
//!    leaves the state exactly as it was.
//!
//! 3. **Configuration Over Constants**: Hand size, reshuffle allowance and
//!    trophy threshold come from `EngineConfig`.
//!
//! 4. **Reproducible Randomness**: Shuffles and tie-breaks draw from a
//!    seedable ChaCha RNG carried in the state.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `im` collections make per-transition
//!   clones O(1), which keeps undo history cheap.
//!
//! - **Host-Driven Time**: The engine never sleeps. Timed phases hand the
//!   host a cancellable token to fire later.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, events, rejections, RNG, configuration
//! - `cards`: Prompt and answer cards, blank markers, catalogs
//! - `deck`: Deck Manager (deal, draw, reshuffle)
//! - `rules`: Turn Sequencer and Round Resolver
//! - `game`: Game Controller (`Engine`) and menu roster

pub mod cards;
pub mod core;
pub mod deck;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, EngineConfig, GameEvent, GameRng, GameRngState, GameState,
    Phase, PlayedSet, Player, PlayerEntry, PlayerId, PublicState, Rejection, ScheduledTransition,
    TimerToken, Vote,
};

pub use crate::cards::{
    count_blanks, fill_blanks, Card, CardId, CardKind, Catalog, CatalogError, PlayedCard,
};

pub use crate::deck::Deck;

pub use crate::rules::{Award, next_turn};

pub use crate::game::{Engine, Roster};
