//! Round Resolver: votes, tie-breaks, scores and trophies.
//!
//! A round resolves on the vote that brings the vote count up to the
//! player count. Resolution happens inside that same action, so the tally
//! always includes the deciding vote.

use rustc_hash::FxHashMap;
use tracing::info;

use crate::cards::Card;
use crate::core::config::EngineConfig;
use crate::core::event::GameEvent;
use crate::core::player::{Player, PlayerId};
use crate::core::rejection::Rejection;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Phase, Vote};

/// What a round win did to the winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Award {
    /// Score went up without reaching a trophy.
    Like { score: u32 },
    /// Score reached the threshold and became a trophy.
    Trophy { trophies: u32 },
    /// The new trophy reached the win target.
    GameWon { trophies: u32 },
}

/// Votes received per player.
#[must_use]
pub fn tally<'a>(votes: impl IntoIterator<Item = &'a Vote>) -> FxHashMap<PlayerId, u32> {
    let mut counts = FxHashMap::default();
    for vote in votes {
        *counts.entry(vote.voted_for).or_insert(0) += 1;
    }
    counts
}

/// Players sharing the highest tally, sorted by ID, with that tally.
#[must_use]
pub fn leaders(counts: &FxHashMap<PlayerId, u32>) -> (Vec<PlayerId>, u32) {
    let max = counts.values().copied().max().unwrap_or(0);
    let mut top: Vec<PlayerId> = counts
        .iter()
        .filter(|(_, count)| **count == max)
        .map(|(&player, _)| player)
        .collect();
    top.sort_unstable();
    (top, max)
}

/// Pick the round winner uniformly among the tied leaders.
#[must_use]
pub fn break_tie(leaders: &[PlayerId], rng: &mut GameRng) -> Option<PlayerId> {
    match leaders {
        [] => None,
        [only] => Some(*only),
        _ => rng.choose(leaders).copied(),
    }
}

/// Credit a round win.
///
/// Reaching `likes_for_trophy` resets the score and adds a trophy; a trophy
/// count reaching `win_target` wins the game.
pub fn award(player: &mut Player, likes_for_trophy: u32, win_target: u32) -> Award {
    player.score += 1;
    if player.score < likes_for_trophy {
        return Award::Like {
            score: player.score,
        };
    }

    player.score = 0;
    player.trophies += 1;
    if player.trophies >= win_target {
        Award::GameWon {
            trophies: player.trophies,
        }
    } else {
        Award::Trophy {
            trophies: player.trophies,
        }
    }
}

/// Record a vote and resolve the round if it was the last one.
///
/// Each voter votes once per round, for any player with a played set
/// (their own included). Otherwise the turn to vote passes to the next
/// seat after the voter.
pub fn cast_vote(
    state: &mut GameState,
    voter: PlayerId,
    voted_for: PlayerId,
    prompts: &[Card],
    config: &EngineConfig,
) -> Result<Vec<GameEvent>, Rejection> {
    let public = &state.public;
    let seat = public.seat_of(voter).ok_or(Rejection::UnknownPlayer(voter))?;
    if public.seat_of(voted_for).is_none() {
        return Err(Rejection::UnknownPlayer(voted_for));
    }
    if public.has_voted(voter) {
        return Err(Rejection::AlreadyVoted(voter));
    }
    if !public.has_played(voted_for) {
        return Err(Rejection::NotSubmitted(voted_for));
    }

    state.public.votes.push_back(Vote { voter, voted_for });

    if state.public.votes.len() < state.public.player_count() {
        let count = state.public.player_count();
        let next = state.public.players[(seat + 1) % count].id;
        state.public.voting_player = next;
        return Ok(vec![GameEvent::VoteCast {
            voter,
            voted_for,
            next_voter: Some(next),
        }]);
    }

    let mut events = vec![GameEvent::VoteCast {
        voter,
        voted_for,
        next_voter: None,
    }];
    events.extend(resolve_round(state, prompts, config));
    Ok(events)
}

/// Tally the round, credit the winner and set up the next round.
fn resolve_round(state: &mut GameState, prompts: &[Card], config: &EngineConfig) -> Vec<GameEvent> {
    let counts = tally(state.public.votes.iter());
    let (top, votes) = leaders(&counts);
    let mut events = Vec::new();

    let Some(winner_id) = break_tie(&top, &mut state.rng) else {
        return events;
    };

    let win_target = state.public.win_target;
    let outcome = state
        .public
        .player_mut(winner_id)
        .map(|winner| award(winner, config.likes_for_trophy, win_target));

    info!(
        round = state.public.round,
        winner = %winner_id,
        votes,
        tied = top.len(),
        "Round resolved"
    );
    events.push(GameEvent::RoundWon {
        player: winner_id,
        votes,
        tied: top.len(),
    });

    // Played answers go back under the pool.
    let played: Vec<Card> = state
        .public
        .played_sets
        .iter()
        .flat_map(|set| set.cards())
        .cloned()
        .collect();
    state.deck.return_cards(played);
    state.public.played_sets.clear();
    state.public.votes.clear();

    if let Some(prompt) = state.rng.choose(prompts).cloned() {
        events.push(GameEvent::PromptRevealed {
            prompt: prompt.id.clone(),
        });
        state.public.prompt = Some(prompt);
    }

    let first = state.public.first_player().unwrap_or(winner_id);
    state.public.current_player = first;
    state.public.voting_player = first;
    state.public.round_winner = Some(winner_id);
    state.public.round += 1;

    match outcome {
        Some(Award::GameWon { trophies }) => {
            state.cancel_timer();
            state.public.phase = Phase::GameOver;
            state.public.game_winner = Some(winner_id);

            info!(winner = %winner_id, trophies, "Game won");
            events.push(GameEvent::TrophyAwarded {
                player: winner_id,
                trophies,
            });
            events.push(GameEvent::GameWon { player: winner_id });
        }
        other => {
            if let Some(Award::Trophy { trophies }) = other {
                events.push(GameEvent::TrophyAwarded {
                    player: winner_id,
                    trophies,
                });
            }
            state.public.phase = Phase::Winner;
            let scheduled = state.schedule(config.winner_display());
            events.push(GameEvent::TimerScheduled(scheduled));
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerEntry;
    use crate::core::state::PlayedSet;
    use smallvec::SmallVec;

    fn vote(voter: u32, voted_for: u32) -> Vote {
        Vote {
            voter: PlayerId::new(voter),
            voted_for: PlayerId::new(voted_for),
        }
    }

    fn player() -> Player {
        Player::new(&PlayerEntry::new(PlayerId::new(1), "Ada"), 3)
    }

    #[test]
    fn test_tally_and_single_leader() {
        let votes = [vote(1, 2), vote(2, 2), vote(3, 1)];
        let counts = tally(votes.iter());

        assert_eq!(counts.get(&PlayerId::new(2)), Some(&2));
        assert_eq!(counts.get(&PlayerId::new(1)), Some(&1));
        assert_eq!(leaders(&counts), (vec![PlayerId::new(2)], 2));
    }

    #[test]
    fn test_leaders_with_tie() {
        let votes = [vote(1, 3), vote(2, 1), vote(3, 2)];
        let (top, max) = leaders(&tally(votes.iter()));

        assert_eq!(max, 1);
        assert_eq!(top, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn test_leaders_empty() {
        let (top, max) = leaders(&FxHashMap::default());
        assert!(top.is_empty());
        assert_eq!(max, 0);
    }

    #[test]
    fn test_break_tie() {
        let mut rng = GameRng::new(3);

        assert_eq!(break_tie(&[], &mut rng), None);
        assert_eq!(break_tie(&[PlayerId::new(5)], &mut rng), Some(PlayerId::new(5)));

        let tied = [PlayerId::new(1), PlayerId::new(2)];
        let picked = break_tie(&tied, &mut rng);
        assert!(picked.is_some_and(|p| tied.contains(&p)));
    }

    #[test]
    fn test_award_like_then_trophy() {
        let mut p = player();

        for expected in 1..5 {
            assert_eq!(award(&mut p, 5, 3), Award::Like { score: expected });
        }
        assert_eq!(award(&mut p, 5, 3), Award::Trophy { trophies: 1 });
        assert_eq!(p.score, 0);
        assert_eq!(p.trophies, 1);
    }

    fn voting_table(played: &[u32]) -> GameState {
        let roster: Vec<_> = (1..=3)
            .map(|i| PlayerEntry::new(PlayerId::new(i), format!("P{i}")))
            .collect();
        let mut state = GameState::new(&roster, 3, 5, GameRng::new(1));
        state.public.phase = Phase::Voting;
        for &id in played {
            state.public.played_sets.push_back(PlayedSet {
                player: PlayerId::new(id),
                cards: SmallVec::new(),
            });
        }
        state
    }

    #[test]
    fn test_cast_vote_needs_played_set() {
        let mut state = voting_table(&[2]);
        let config = EngineConfig::default();

        assert_eq!(
            cast_vote(&mut state, PlayerId::new(1), PlayerId::new(3), &[], &config),
            Err(Rejection::NotSubmitted(PlayerId::new(3)))
        );
        assert!(state.public.votes.is_empty());

        let events = cast_vote(&mut state, PlayerId::new(1), PlayerId::new(2), &[], &config).unwrap();
        assert_eq!(
            events,
            vec![GameEvent::VoteCast {
                voter: PlayerId::new(1),
                voted_for: PlayerId::new(2),
                next_voter: Some(PlayerId::new(2)),
            }]
        );
        assert_eq!(state.public.voting_player, PlayerId::new(2));
    }

    #[test]
    fn test_deciding_vote_resolves_round() {
        let mut state = voting_table(&[1, 2, 3]);
        let config = EngineConfig::default();
        let prompts = [Card::common("c1", "_____?")];

        for (voter, target) in [(1, 3), (2, 3)] {
            cast_vote(&mut state, PlayerId::new(voter), PlayerId::new(target), &prompts, &config)
                .unwrap();
        }
        assert_eq!(state.public.phase, Phase::Voting);

        let events =
            cast_vote(&mut state, PlayerId::new(3), PlayerId::new(1), &prompts, &config).unwrap();

        assert!(events.contains(&GameEvent::RoundWon {
            player: PlayerId::new(3),
            votes: 2,
            tied: 1,
        }));
        assert_eq!(state.public.phase, Phase::Winner);
        assert_eq!(state.public.round_winner, Some(PlayerId::new(3)));
        assert_eq!(state.public.player(PlayerId::new(3)).map(|p| p.score), Some(1));
        assert_eq!(state.public.prompt.as_ref().map(|p| p.id.as_str()), Some("c1"));
        assert!(state.timer.is_some());
    }

    #[test]
    fn test_award_game_won_at_target() {
        let mut p = player();
        p.trophies = 1;
        p.score = 4;

        assert_eq!(award(&mut p, 5, 2), Award::GameWon { trophies: 2 });
        assert_eq!(p.score, 0);
    }
}
