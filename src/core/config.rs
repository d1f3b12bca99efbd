//! Engine configuration.
//!
//! Every rule constant of the game lives here instead of being hardcoded in
//! the state machine. Hosts build an `EngineConfig` once and pass it to
//! `Engine::new`; a partial JSON document can override individual fields.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building or validating an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("likes required for a trophy must be at least 1")]
    ZeroTrophyThreshold,

    #[error("minimum roster size must be at least 2, got {0}")]
    TooFewPlayers(usize),

    #[error("default win target must be at least 1")]
    ZeroWinTarget,

    #[error("blank marker must not be empty")]
    EmptyBlankMarker,

    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rule constants for one engine instance.
///
/// ## Defaults
///
/// | field                | default   |
/// |----------------------|-----------|
/// | `hand_size`          | 7         |
/// | `max_shuffles`       | 3         |
/// | `likes_for_trophy`   | 5         |
/// | `min_players`        | 2         |
/// | `default_win_target` | 5         |
/// | `winner_display_ms`  | 5000      |
/// | `blank_marker`       | `_____`   |
/// | `history_limit`      | 64        |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards held by every player outside of a submission.
    pub hand_size: usize,

    /// Hand reshuffles granted to each player per game.
    pub max_shuffles: u32,

    /// Round wins ("likes") that convert into one trophy.
    pub likes_for_trophy: u32,

    /// Smallest roster that can start a game.
    pub min_players: usize,

    /// Trophy target offered by a fresh menu.
    pub default_win_target: u32,

    /// How long the round-winner screen stays up, in milliseconds.
    pub winner_display_ms: u64,

    /// Marker that denotes a blank in prompt text.
    pub blank_marker: String,

    /// Number of past states kept for `Engine::undo`.
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hand_size: 7,
            max_shuffles: 3,
            likes_for_trophy: 5,
            min_players: 2,
            default_win_target: 5,
            winner_display_ms: 5000,
            blank_marker: "_____".to_string(),
            history_limit: 64,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON document and validate it.
    ///
    /// ```
    /// use blank_party::core::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(r#"{ "hand_size": 5 }"#).unwrap();
    /// assert_eq!(config.hand_size, 5);
    /// assert_eq!(config.likes_for_trophy, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the rules describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.likes_for_trophy == 0 {
            return Err(ConfigError::ZeroTrophyThreshold);
        }
        if self.min_players < 2 {
            return Err(ConfigError::TooFewPlayers(self.min_players));
        }
        if self.default_win_target == 0 {
            return Err(ConfigError::ZeroWinTarget);
        }
        if self.blank_marker.is_empty() {
            return Err(ConfigError::EmptyBlankMarker);
        }
        Ok(())
    }

    /// How long the round-winner screen stays up.
    #[must_use]
    pub fn winner_display(&self) -> Duration {
        Duration::from_millis(self.winner_display_ms)
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the per-game reshuffle allowance.
    #[must_use]
    pub fn with_max_shuffles(mut self, shuffles: u32) -> Self {
        self.max_shuffles = shuffles;
        self
    }

    /// Set the likes needed for a trophy.
    #[must_use]
    pub fn with_likes_for_trophy(mut self, likes: u32) -> Self {
        self.likes_for_trophy = likes;
        self
    }

    /// Set the winner screen duration.
    #[must_use]
    pub fn with_winner_display(mut self, display: Duration) -> Self {
        self.winner_display_ms = u64::try_from(display.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the blank marker.
    #[must_use]
    pub fn with_blank_marker(mut self, marker: impl Into<String>) -> Self {
        self.blank_marker = marker.into();
        self
    }

    /// Set how many past states are kept for undo.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}
