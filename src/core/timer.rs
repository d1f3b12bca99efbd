//! Cancellable delayed transitions.
//!
//! The engine never sleeps. When it enters a timed phase it records a
//! `ScheduledTransition` and hands a copy to the host, which fires it later
//! with `Action::WinnerTimeout`. Any transition that leaves the timed phase
//! clears the record, so a late firing carries a token that no longer
//! matches and is rejected.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one scheduling of a delayed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimerToken(pub u64);

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A pending delayed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    pub token: TimerToken,
    pub delay: Duration,
}
