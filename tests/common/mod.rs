//! Shared helpers for integration tests.
//!
//! Logging stays at `warn` unless `TEST_LOG` (or `RUST_LOG`) says otherwise, e.g.
//! `TEST_LOG=blank_party=debug cargo test`.

#![allow(dead_code)]

use blank_party::cards::{Card, CardId, Catalog};
use blank_party::core::{EngineConfig, GameEvent, Phase, PlayerEntry, PlayerId};
use blank_party::game::{Engine, Roster};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A roster of `count` default players (ids 1..=count).
pub fn roster(count: usize) -> Vec<PlayerEntry> {
    let mut roster = Roster::new(2);
    while roster.len() < count {
        roster.add();
    }
    roster.into_entries()
}

/// Engine over the sample catalog.
pub fn engine(seed: u64) -> Engine {
    init_logging();
    Engine::new(EngineConfig::default(), Catalog::sample(), seed).expect("valid config")
}

/// Engine over a custom catalog.
pub fn engine_with(config: EngineConfig, catalog: Catalog, seed: u64) -> Engine {
    init_logging();
    Engine::new(config, catalog, seed).expect("valid config")
}

/// Engine with a started game.
pub fn started(seed: u64, players: usize, win_target: u32) -> Engine {
    let mut engine = engine(seed);
    engine
        .start_game(roster(players), win_target)
        .expect("game starts");
    engine
}

/// Catalog with single-blank prompts and `answers` answer cards.
pub fn single_blank_catalog(answers: usize) -> Catalog {
    let prompts = (1..=3)
        .map(|i| Card::common(format!("c{i}"), format!("Prompt {i}: _____.")))
        .collect();
    let answers = (1..=answers)
        .map(|i| Card::private(format!("p{i}"), format!("Answer {i}")))
        .collect();
    Catalog::new(prompts, answers).expect("valid catalog")
}

/// The first cards in a player's hand, as many as the prompt needs.
pub fn pick_cards(engine: &Engine, player: PlayerId) -> Vec<CardId> {
    let needed = engine.required_answers();
    engine
        .public()
        .player(player)
        .expect("player exists")
        .hand
        .iter()
        .take(needed)
        .map(|c| c.id.clone())
        .collect()
}

/// Everyone submits, in seat order.
pub fn play_all(engine: &mut Engine) -> Vec<GameEvent> {
    let ids: Vec<_> = engine.public().player_ids().collect();
    let mut events = Vec::new();
    for id in ids {
        let cards = pick_cards(engine, id);
        events.extend(engine.submit_play(id, &cards).expect("submission accepted"));
    }
    assert_eq!(engine.public().phase, Phase::Voting);
    events
}

/// Everyone votes according to `choice(voter)`, in seat order.
pub fn vote_all(engine: &mut Engine, choice: impl Fn(PlayerId) -> PlayerId) -> Vec<GameEvent> {
    let ids: Vec<_> = engine.public().player_ids().collect();
    let mut events = Vec::new();
    for id in ids {
        events.extend(engine.cast_vote(id, choice(id)).expect("vote accepted"));
    }
    events
}

/// Play a full round in which everyone votes for `winner`.
pub fn win_round(engine: &mut Engine, winner: PlayerId) -> Vec<GameEvent> {
    let mut events = play_all(engine);
    events.extend(vote_all(engine, |_| winner));
    events
}

/// Fire the pending winner timer, if any.
pub fn dismiss_winner(engine: &mut Engine) {
    let pending = engine.state().timer;
    if let Some(pending) = pending {
        engine
            .winner_timeout(pending.token)
            .expect("timer accepted");
    }
}
