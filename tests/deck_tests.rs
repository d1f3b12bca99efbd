//! Deck tests: dealing, refills, reshuffles and card conservation.

mod common;

use std::collections::HashSet;

use blank_party::cards::{CardId, Catalog};
use blank_party::core::{EngineConfig, GameEvent, Phase, PlayerId, Rejection};

use common::*;

fn circulating_ids(engine: &blank_party::game::Engine) -> Vec<CardId> {
    let state = engine.state();
    let mut ids: Vec<CardId> = state.deck.pool().iter().map(|c| c.id.clone()).collect();
    for player in state.public.players.iter() {
        ids.extend(player.hand.iter().map(|c| c.id.clone()));
    }
    for set in state.public.played_sets.iter() {
        ids.extend(set.cards().map(|c| c.id.clone()));
    }
    ids
}

#[test]
fn test_deal_gives_disjoint_full_hands() {
    let engine = started(1, 5, 3);
    let mut seen = HashSet::new();

    for player in engine.public().players.iter() {
        assert_eq!(player.hand.len(), 7);
        assert_eq!(player.remaining_shuffles, 3);
        for card in &player.hand {
            assert!(seen.insert(card.id.clone()), "{} dealt twice", card.id);
        }
    }
    assert_eq!(engine.state().deck.len(), 40 - 35);
}

#[test]
fn test_restart_deals_fresh_game() {
    let mut engine = started(2, 2, 3);
    win_round(&mut engine, PlayerId::new(1));
    engine.return_to_menu().unwrap();

    let roster = engine.roster().into_entries();
    engine.start_game(roster, 3).unwrap();

    let public = engine.public();
    assert!(public.players.iter().all(|p| p.score == 0 && p.trophies == 0));
    assert_eq!(public.round, 1);
    assert_eq!(engine.state().cards_in_circulation(), 40);
    assert_eq!(engine.state().deck.recycled(), 0);
}

/// Scenario: every answer card stays accounted for across rounds.
#[test]
fn test_cards_are_conserved_across_rounds() {
    let mut engine = started(3, 3, 5);
    let mut expected: Vec<CardId> = engine.catalog().answers().iter().map(|c| c.id.clone()).collect();
    expected.sort();

    for round in 0..6 {
        let ids: Vec<_> = engine.public().player_ids().collect();
        for id in ids {
            let cards = pick_cards(&engine, id);
            engine.submit_play(id, &cards).unwrap();
            assert_eq!(engine.state().cards_in_circulation(), 40);
        }
        vote_all(&mut engine, |_| PlayerId::new(round % 3 + 1));
        assert_eq!(engine.state().cards_in_circulation(), 40);
        dismiss_winner(&mut engine);

        let mut ids = circulating_ids(&engine);
        ids.sort();
        assert_eq!(ids, expected, "round {round}");
    }

    assert_eq!(engine.state().deck.recycled(), 0);
}

#[test]
fn test_shuffle_returns_hand_to_pool() {
    let mut engine = started(4, 2, 5);
    let old: HashSet<CardId> = engine.public().players[0]
        .hand
        .iter()
        .map(|c| c.id.clone())
        .collect();

    engine.shuffle_hand(PlayerId::new(1)).unwrap();

    let player = &engine.public().players[0];
    assert_eq!(player.hand.len(), 7);
    assert_eq!(player.remaining_shuffles, 2);
    assert!(player.hand.iter().all(|c| !old.contains(&c.id)));
    let bottom: HashSet<CardId> = engine
        .state()
        .deck
        .pool()
        .iter()
        .rev()
        .take(7)
        .map(|c| c.id.clone())
        .collect();
    assert_eq!(bottom, old);
    assert_eq!(engine.state().cards_in_circulation(), 40);
}

/// Scenario: reshuffle with no allowance left.
#[test]
fn test_shuffle_allowance_runs_out() {
    let mut engine = started(5, 2, 5);
    for remaining in (0..3).rev() {
        let events = engine.shuffle_hand(PlayerId::new(2)).unwrap();
        assert!(events.contains(&GameEvent::HandShuffled {
            player: PlayerId::new(2),
            remaining_shuffles: remaining,
        }));
    }
    let before = engine.snapshot();

    assert_eq!(
        engine.shuffle_hand(PlayerId::new(2)),
        Err(Rejection::NoShufflesLeft(PlayerId::new(2)))
    );
    assert_eq!(engine.snapshot(), before);

    // The other player's allowance is separate.
    assert!(engine.shuffle_hand(PlayerId::new(1)).is_ok());
}

#[test]
fn test_zero_allowance_config() {
    let config = EngineConfig::default().with_max_shuffles(0);
    let mut engine = engine_with(config, Catalog::sample(), 6);
    engine.start_game(roster(2), 5).unwrap();
    let hand = engine.public().players[0].hand.clone();

    assert_eq!(
        engine.shuffle_hand(PlayerId::new(1)),
        Err(Rejection::NoShufflesLeft(PlayerId::new(1)))
    );
    assert_eq!(engine.public().players[0].hand, hand);
    assert_eq!(engine.public().players[0].remaining_shuffles, 0);
}

#[test]
fn test_allowance_resets_each_game() {
    let mut engine = started(7, 2, 5);
    engine.shuffle_hand(PlayerId::new(1)).unwrap();
    engine.return_to_menu().unwrap();
    engine.start_game(roster(2), 5).unwrap();

    assert_eq!(engine.public().players[0].remaining_shuffles, 3);
}

/// Scenario: a draw larger than the pool refills it from the catalog.
#[test]
fn test_short_pool_recycles_catalog() {
    // 3 players hold 21 of 22 cards, leaving one in the pool.
    let mut engine = engine_with(EngineConfig::default(), single_blank_catalog(22), 8);
    engine.start_game(roster(3), 5).unwrap();
    assert_eq!(engine.state().deck.len(), 1);

    let cards = pick_cards(&engine, PlayerId::new(1));
    let events = engine.submit_play(PlayerId::new(1), &cards).unwrap();
    assert!(!events.contains(&GameEvent::DeckRecycled));
    assert!(engine.state().deck.is_empty());

    let cards = pick_cards(&engine, PlayerId::new(2));
    let events = engine.submit_play(PlayerId::new(2), &cards).unwrap();
    assert!(events.contains(&GameEvent::DeckRecycled));
    assert_eq!(engine.state().deck.recycled(), 1);
    assert_eq!(engine.state().deck.len(), 21);

    assert!(engine.public().players.iter().all(|p| p.hand.len() == 7));
}

#[test]
fn test_play_continues_on_tiny_catalog() {
    // Fewer answers than a single hand.
    let mut engine = engine_with(EngineConfig::default(), single_blank_catalog(4), 9);
    engine.start_game(roster(2), 1).unwrap();

    for player in engine.public().players.iter() {
        assert_eq!(player.hand.len(), 7);
    }
    assert!(engine.state().deck.recycled() > 0);

    for _ in 0..3 {
        win_round(&mut engine, PlayerId::new(2));
        dismiss_winner(&mut engine);
        assert_eq!(engine.public().phase, Phase::Playing);
        assert!(engine.public().players.iter().all(|p| p.hand.len() == 7));
    }
}
