//! Core engine types: players, state, actions, events, RNG, configuration.
//!
//! This module holds the data the state machine operates on. The rules that
//! move it live in `deck`, `rules` and `game`.

pub mod action;
pub mod config;
pub mod event;
pub mod player;
pub mod rejection;
pub mod rng;
pub mod state;
pub mod timer;

pub use action::{Action, ActionRecord};
pub use config::{ConfigError, EngineConfig};
pub use event::GameEvent;
pub use player::{Player, PlayerEntry, PlayerId};
pub use rejection::Rejection;
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase, PlayedSet, PublicState, Vote};
pub use timer::{ScheduledTransition, TimerToken};
