//! Game Controller and menu setup.
//!
//! ## Key Types
//!
//! - `Engine`: Owns the state, applies actions, keeps undo history and
//!   drives the winner-screen delay
//! - `reduce` / `apply`: The state machine as a function of (state, action)
//! - `Roster`: Player list edited in the menu

mod controller;
mod setup;

pub use controller::{apply, reduce, Engine};
pub use setup::{validate_roster, Roster};
