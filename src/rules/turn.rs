//! Turn Sequencer: who submits next, and recording submissions.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, CardId, PlayedCard};
use crate::core::config::EngineConfig;
use crate::core::event::GameEvent;
use crate::core::player::PlayerId;
use crate::core::rejection::Rejection;
use crate::core::state::{GameState, Phase, PlayedSet, PublicState};

/// The next player, after `current` in seat order, who has not submitted
/// this round.
///
/// Wraps around the table. If every other player has already submitted the
/// scan comes back to `current` and returns it; callers move to voting once
/// everyone has played instead of asking again.
#[must_use]
pub fn next_turn(state: &PublicState, current: PlayerId) -> PlayerId {
    let count = state.player_count();
    let Some(start) = state.seat_of(current) else {
        return state.first_player().unwrap_or(current);
    };

    (1..=count)
        .map(|offset| state.players[(start + offset) % count].id)
        .find(|&candidate| candidate == current || !state.has_played(candidate))
        .unwrap_or(current)
}

/// Record a player's answers for the active prompt.
///
/// Requires exactly as many cards as the prompt has blanks, all held by the
/// player, and no earlier submission this round. Played cards leave the
/// hand, which is then topped up to the hand size from the pool. The last
/// submission of the round opens voting.
pub fn submit(
    state: &mut GameState,
    player_id: PlayerId,
    cards: &[CardId],
    answers: &[Card],
    config: &EngineConfig,
) -> Result<Vec<GameEvent>, Rejection> {
    let mut player = state
        .public
        .player(player_id)
        .cloned()
        .ok_or(Rejection::UnknownPlayer(player_id))?;

    if state.public.has_played(player_id) {
        return Err(Rejection::AlreadySubmitted(player_id));
    }

    let expected = state.public.required_answers(&config.blank_marker);
    if cards.len() != expected {
        return Err(Rejection::WrongCardCount {
            expected,
            got: cards.len(),
        });
    }

    let mut played: SmallVec<[PlayedCard; 3]> = SmallVec::with_capacity(cards.len());
    for (blank_index, id) in cards.iter().enumerate() {
        let card = player
            .take_from_hand(id)
            .ok_or_else(|| Rejection::CardNotInHand {
                player: player_id,
                card: id.clone(),
            })?;
        played.push(PlayedCard::new(card, blank_index));
    }

    let mut events = Vec::new();
    let needed = config.hand_size.saturating_sub(player.hand.len());
    let recycled = state.deck.recycled();
    let replacements = state.deck.draw(needed, answers, &mut state.rng);
    if state.deck.recycled() != recycled {
        events.push(GameEvent::DeckRecycled);
    }
    player.hand.extend(replacements);

    if let Some(slot) = state.public.player_mut(player_id) {
        *slot = player;
    }
    state.public.played_sets.push_back(PlayedSet {
        player: player_id,
        cards: played,
    });

    let everyone_played = state.public.played_sets.len() == state.public.player_count();
    if everyone_played {
        let first = state.public.first_player().unwrap_or(player_id);
        state.public.phase = Phase::Voting;
        state.public.voting_player = first;
        state.public.votes.clear();

        debug!(player = %player_id, "Last play in, voting opens");
        events.push(GameEvent::PlaySubmitted {
            player: player_id,
            next_player: None,
        });
        events.push(GameEvent::VotingStarted { first_voter: first });
    } else {
        let next = next_turn(&state.public, player_id);
        state.public.current_player = next;

        debug!(player = %player_id, next = %next, "Play submitted");
        events.push(GameEvent::PlaySubmitted {
            player: player_id,
            next_player: Some(next),
        });
    }

    Ok(events)
}
