//! Round rules: turn order, submissions, voting and scoring.
//!
//! - `turn`: Turn Sequencer (who plays next, recording played sets)
//! - `resolver`: Round Resolver (votes, tie-breaks, likes and trophies)
//!
//! Both operate on a `GameState` the controller has already checked the
//! phase of.

pub mod resolver;
pub mod turn;

pub use resolver::{award, break_tie, cast_vote, leaders, tally, Award};
pub use turn::{next_turn, submit};
