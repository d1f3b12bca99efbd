//! Game Controller: phase transitions and the engine facade.
//!
//! `reduce` is the whole state machine as a pure function
//! `(state, action) -> state'`. `Engine` wraps it for hosts: it owns the
//! current state, the catalog and the rules, keeps recent states for undo,
//! logs applied actions and drives the winner-screen delay.

use std::time::Duration;

use im::Vector;
use tracing::{debug, info, info_span};

use super::setup::{validate_roster, Roster};
use crate::cards::{CardId, Catalog};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::{ConfigError, EngineConfig};
use crate::core::event::GameEvent;
use crate::core::player::{Player, PlayerEntry, PlayerId};
use crate::core::rejection::Rejection;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase, PublicState};
use crate::core::timer::TimerToken;
use crate::deck;
use crate::rules;

/// Apply one action to a copy of `state`.
///
/// Returns the next state and the events it produced, or the reason the
/// action was refused. `state` itself is never modified.
pub fn reduce(
    state: &GameState,
    action: &Action,
    config: &EngineConfig,
    catalog: &Catalog,
) -> Result<(GameState, Vec<GameEvent>), Rejection> {
    let mut next = state.clone();
    let events = apply(&mut next, action, config, catalog)?;
    Ok((next, events))
}

/// Apply one action in place.
///
/// Every check runs before the first write, so on `Err` the state is
/// exactly as it was.
pub fn apply(
    state: &mut GameState,
    action: &Action,
    config: &EngineConfig,
    catalog: &Catalog,
) -> Result<Vec<GameEvent>, Rejection> {
    let phase = state.public.phase;
    let wrong_phase = || Rejection::WrongPhase {
        action: action.name(),
        phase,
    };

    match action {
        Action::StartGame {
            players,
            win_target,
        } => {
            if phase != Phase::Menu {
                return Err(wrong_phase());
            }
            start(state, players, *win_target, config, catalog)
        }

        Action::ShuffleHand { player } => {
            if phase != Phase::Playing {
                return Err(wrong_phase());
            }
            shuffle_hand(state, *player, config, catalog)
        }

        Action::SubmitPlay { player, cards } => {
            if phase != Phase::Playing {
                return Err(wrong_phase());
            }
            rules::submit(state, *player, cards, catalog.answers(), config)
        }

        Action::CastVote { voter, voted_for } => {
            if phase != Phase::Voting {
                return Err(wrong_phase());
            }
            rules::cast_vote(state, *voter, *voted_for, catalog.prompts(), config)
        }

        Action::WinnerTimeout { token } => {
            if phase != Phase::Winner {
                return Err(wrong_phase());
            }
            if state.timer.map(|t| t.token) != Some(*token) {
                return Err(Rejection::StaleTimer(*token));
            }
            state.cancel_timer();
            state.public.phase = Phase::Playing;
            Ok(vec![GameEvent::Resumed])
        }

        Action::ReturnToMenu => {
            if phase == Phase::Menu {
                return Err(wrong_phase());
            }
            state.cancel_timer();
            state.public.phase = Phase::Menu;
            Ok(vec![GameEvent::ReturnedToMenu])
        }
    }
}

/// Reset every player, deal and reveal the first prompt.
fn start(
    state: &mut GameState,
    roster: &[PlayerEntry],
    win_target: u32,
    config: &EngineConfig,
    catalog: &Catalog,
) -> Result<Vec<GameEvent>, Rejection> {
    validate_roster(roster, config.min_players)?;
    if win_target == 0 {
        return Err(Rejection::InvalidWinTarget);
    }
    let first = roster
        .first()
        .map(|entry| entry.id)
        .ok_or(Rejection::RosterTooSmall {
            min: config.min_players.max(1),
        })?;

    let mut players: Vector<Player> = roster
        .iter()
        .map(|entry| Player::new(entry, config.max_shuffles))
        .collect();
    state.deck = deck::deal(&mut players, catalog.answers(), &mut state.rng, config);

    let mut prompts = catalog.prompts().to_vec();
    state.rng.shuffle(&mut prompts);
    let prompt = prompts.into_iter().next();

    let public = &mut state.public;
    public.players = players;
    public.prompt = prompt.clone();
    public.played_sets.clear();
    public.votes.clear();
    public.current_player = first;
    public.voting_player = first;
    public.round_winner = None;
    public.game_winner = None;
    public.win_target = win_target;
    public.round = 1;
    public.phase = Phase::Playing;
    state.cancel_timer();

    info!(players = roster.len(), win_target, "Game started");

    let mut events = vec![GameEvent::GameStarted {
        players: roster.len(),
        win_target,
    }];
    if let Some(prompt) = prompt {
        events.push(GameEvent::PromptRevealed { prompt: prompt.id });
    }
    Ok(events)
}

fn shuffle_hand(
    state: &mut GameState,
    player_id: PlayerId,
    config: &EngineConfig,
    catalog: &Catalog,
) -> Result<Vec<GameEvent>, Rejection> {
    let mut player = state
        .public
        .player(player_id)
        .cloned()
        .ok_or(Rejection::UnknownPlayer(player_id))?;

    let recycled = state.deck.recycled();
    deck::reshuffle(
        &mut state.deck,
        &mut player,
        catalog.answers(),
        &mut state.rng,
        config.hand_size,
    )?;

    let mut events = Vec::new();
    if state.deck.recycled() != recycled {
        events.push(GameEvent::DeckRecycled);
    }
    events.push(GameEvent::HandShuffled {
        player: player_id,
        remaining_shuffles: player.remaining_shuffles,
    });
    if let Some(slot) = state.public.player_mut(player_id) {
        *slot = player;
    }
    Ok(events)
}

/// The game engine: one consolidated state plus the host-facing actions.
///
/// ## Example
///
/// ```
/// use blank_party::cards::Catalog;
/// use blank_party::core::{EngineConfig, Phase};
/// use blank_party::game::Engine;
///
/// let mut engine = Engine::new(EngineConfig::default(), Catalog::sample(), 42).unwrap();
/// let roster = engine.roster().into_entries();
///
/// engine.start_game(roster, 3).unwrap();
/// assert_eq!(engine.public().phase, Phase::Playing);
/// assert_eq!(engine.public().players[0].hand.len(), 7);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    catalog: Catalog,
    state: GameState,
    history: Vector<GameState>,
    log: Vector<ActionRecord>,
    sequence: u64,
    timer_elapsed: Duration,
}

impl Engine {
    /// Create an engine in the menu with a default roster.
    ///
    /// `seed` drives every shuffle and tie-break.
    pub fn new(config: EngineConfig, catalog: Catalog, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, catalog, GameRng::new(seed))
    }

    /// Create an engine seeded from the operating system.
    pub fn from_entropy(config: EngineConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        Self::with_rng(config, catalog, GameRng::from_entropy())
    }

    fn with_rng(config: EngineConfig, catalog: Catalog, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let roster = Roster::new(config.min_players);
        let state = GameState::new(
            roster.entries(),
            config.max_shuffles,
            config.default_win_target,
            rng,
        );
        debug!(seed = state.rng.seed(), "Engine created");

        Ok(Self {
            config,
            catalog,
            state,
            history: Vector::new(),
            log: Vector::new(),
            sequence: 0,
            timer_elapsed: Duration::ZERO,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Full state, including the deck pool and RNG.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The read-only snapshot for the presentation layer.
    #[must_use]
    pub fn public(&self) -> &PublicState {
        &self.state.public
    }

    /// An owned copy of the public snapshot (O(1)).
    #[must_use]
    pub fn snapshot(&self) -> PublicState {
        self.state.public.clone()
    }

    /// The current roster, for editing in the menu.
    #[must_use]
    pub fn roster(&self) -> Roster {
        Roster::from_entries(self.state.public.roster(), self.config.min_players)
    }

    /// Answer cards required for the active prompt.
    #[must_use]
    pub fn required_answers(&self) -> usize {
        self.state.public.required_answers(&self.config.blank_marker)
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    /// Number of states available to `undo`.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // === Dispatch ===

    /// Apply an action.
    ///
    /// On `Err` nothing changed: the state, history and log are exactly as
    /// before the call.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<GameEvent>, Rejection> {
        let _span = info_span!("dispatch", action = action.name(), round = self.state.public.round)
            .entered();

        let (next, events) = match reduce(&self.state, &action, &self.config, &self.catalog) {
            Ok(applied) => applied,
            Err(reason) => {
                debug!(%reason, "Action rejected");
                return Err(reason);
            }
        };

        if next.timer != self.state.timer {
            self.timer_elapsed = Duration::ZERO;
        }
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push_back(previous);
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }

        self.sequence += 1;
        self.log
            .push_back(ActionRecord::new(action, self.state.public.round, self.sequence));

        debug!(phase = ?self.state.public.phase, events = events.len(), "Action applied");
        Ok(events)
    }

    /// Start a game with the given roster and trophy target.
    pub fn start_game(
        &mut self,
        players: Vec<PlayerEntry>,
        win_target: u32,
    ) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Action::StartGame {
            players,
            win_target,
        })
    }

    /// Trade a player's hand for a fresh one.
    pub fn shuffle_hand(&mut self, player: PlayerId) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Action::ShuffleHand { player })
    }

    /// Submit answer cards, in blank order.
    pub fn submit_play(
        &mut self,
        player: PlayerId,
        cards: &[CardId],
    ) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Action::submit(player, cards.iter().cloned()))
    }

    /// Cast a vote.
    pub fn cast_vote(
        &mut self,
        voter: PlayerId,
        voted_for: PlayerId,
    ) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Action::CastVote { voter, voted_for })
    }

    /// Fire the winner-screen timer.
    pub fn winner_timeout(&mut self, token: TimerToken) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Action::WinnerTimeout { token })
    }

    /// Leave the game for the menu. The roster is kept.
    pub fn return_to_menu(&mut self) -> Result<Vec<GameEvent>, Rejection> {
        self.dispatch(Action::ReturnToMenu)
    }

    // === Time ===

    /// Let `elapsed` pass on the pending timer, firing it when due.
    ///
    /// For hosts without their own timers. Returns no events when nothing
    /// was pending or the delay has not run out yet.
    pub fn advance_time(&mut self, elapsed: Duration) -> Result<Vec<GameEvent>, Rejection> {
        let Some(pending) = self.state.timer else {
            return Ok(Vec::new());
        };

        self.timer_elapsed += elapsed;
        if self.timer_elapsed < pending.delay {
            return Ok(Vec::new());
        }
        self.winner_timeout(pending.token)
    }

    // === Undo ===

    /// Restore the state before the last applied action.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_back() else {
            return false;
        };
        self.state = previous;
        self.log.pop_back();
        self.timer_elapsed = Duration::ZERO;
        debug!(phase = ?self.state.public.phase, "Undid last action");
        true
    }
}
