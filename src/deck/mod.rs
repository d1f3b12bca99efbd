//! Deck Manager: dealing, drawing and reshuffling answer cards.
//!
//! ## Key Types
//!
//! - `Deck`: The shared pool of answer cards nobody holds
//! - `deal`: Start-of-game hands for every player
//! - `reshuffle`: Trade a hand for a fresh one, limited per game

pub mod manager;

pub use manager::{deal, reshuffle, Deck};
