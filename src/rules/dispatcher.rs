//! Action dispatcher: the only code path that changes a `MatchState`.
//!
//! Every entry point takes the current state by reference and returns a new
//! state or a `Rejection`. Validation runs first on the untouched input; the
//! new state is built on a clone (O(1) thanks to persistent vectors), so a
//! refused action can never leave partial changes behind.

use log::{debug, trace};

use crate::cards::{Ability, Card, CardId, CardKind, Row, Weather};
use crate::core::{Action, MatchState, Phase, Side};
use crate::power;

use super::error::Rejection;
use super::events::{MatchEnded, RoundEnded};
use super::legal;
use super::round::resolve_round;

/// Result of an accepted action.
#[derive(Clone, Debug)]
pub struct Transition {
    /// State after the action.
    pub state: MatchState,
    /// Set when this action ended a round.
    pub round_ended: Option<RoundEnded>,
    /// Set when this action ended the match.
    pub match_ended: Option<MatchEnded>,
}

impl Transition {
    fn quiet(state: MatchState) -> Self {
        Self {
            state,
            round_ended: None,
            match_ended: None,
        }
    }
}

/// Deal the opening hands. Allowed exactly once, in `PreMatch`.
pub fn deal_initial_hands(state: &MatchState) -> Result<MatchState, Rejection> {
    if state.phase() != Phase::PreMatch {
        return Err(Rejection::WrongPhase(state.phase()));
    }

    let mut next = state.clone();
    let size = next.config.initial_hand_size;
    for side in Side::BOTH {
        let drawn = next.players[side].draw(size);
        debug!("{} dealt {} cards", side, drawn);
    }
    next.phase = Phase::InProgress;
    Ok(next)
}

/// Validate and apply one action for `side`.
///
/// ```
/// use gwent_engine::cards::{Card, Faction, Row};
/// use gwent_engine::core::{Action, MatchConfig, MatchState, Side, SideMap};
/// use gwent_engine::rules::{deal_initial_hands, submit_action, Rejection};
///
/// let deck = vec![Card::unit("grunt", "Grunt", Faction::Nilfgaard, 4, Row::CloseCombat); 12];
/// let state = MatchState::new(SideMap::with_value(deck), MatchConfig::default());
/// let state = deal_initial_hands(&state).unwrap();
///
/// let next = submit_action(&state, Side::Player, &Action::play("grunt", Row::CloseCombat)).unwrap();
/// assert_eq!(next.state.side_power(Side::Player), 4);
/// assert_eq!(next.state.current_turn(), Side::Opponent);
///
/// let refused = submit_action(&next.state, Side::Player, &Action::Pass);
/// assert!(matches!(refused, Err(Rejection::NotYourTurn { .. })));
/// ```
pub fn submit_action(state: &MatchState, side: Side, action: &Action) -> Result<Transition, Rejection> {
    let hand_index = legal::validate(state, side, action).inspect_err(|err| {
        trace!("rejected {} from {}: {}", action, side, err);
    })?;

    let mut next = state.clone();
    next.record(side, action.clone());

    let transition = match (action, hand_index) {
        (Action::PlayCard { row, .. }, Some(index)) => {
            play_card(&mut next, side, index, *row);
            Transition::quiet(next)
        }
        _ => pass(next, side),
    };

    debug!(
        "{} {} (round {}, power {} vs {})",
        side,
        action,
        transition.state.round(),
        transition.state.side_power(Side::Player),
        transition.state.side_power(Side::Opponent),
    );
    Ok(transition)
}

fn play_card(state: &mut MatchState, side: Side, index: usize, row: Row) {
    let card = state.players[side].hand.remove(index);
    let scorches = card.kind != CardKind::Unit && card.has_ability(Ability::Scorch);

    match card.kind {
        CardKind::Unit => state.board.rows[side][row].push_back(card),
        CardKind::Spell | CardKind::Leader => state.players[side].discard.push_back(card),
    }
    if scorches {
        resolve_scorch(state);
    }

    state.selected_card = None;
    if !state.players[side.other()].has_passed {
        state.current_turn = side.other();
    }
}

fn pass(mut state: MatchState, side: Side) -> Transition {
    state.players[side].has_passed = true;

    if !state.players[side.other()].has_passed {
        state.current_turn = side.other();
        return Transition::quiet(state);
    }

    let (round_ended, match_ended) = resolve_round(&mut state);
    Transition {
        state,
        round_ended: Some(round_ended),
        match_ended,
    }
}

/// Burn the strongest non-hero card(s) across both boards into their
/// owners' discard piles.
fn resolve_scorch(state: &mut MatchState) {
    let threshold = {
        let board = &state.board;
        let all = Side::BOTH.into_iter().flat_map(|side| board.cards(side));
        match power::strongest_cards(all).first() {
            Some(card) => card.power,
            None => return,
        }
    };

    for side in Side::BOTH {
        for row in Row::ALL {
            let (burned, kept): (im::Vector<Card>, im::Vector<Card>) = state.board.rows[side][row]
                .iter()
                .cloned()
                .partition(|c| c.power == threshold && !c.is_hero);
            if burned.is_empty() {
                continue;
            }
            debug!("scorch burns {} card(s) from {}'s {}", burned.len(), side, row);
            state.board.rows[side][row] = kept;
            state.players[side].discard.append(burned);
        }
    }
}

/// Set a row's weather for both seats. Cleared automatically at round end.
pub fn apply_weather(state: &MatchState, row: Row, weather: Weather) -> Result<MatchState, Rejection> {
    legal::check_in_progress(state)?;

    let mut next = state.clone();
    next.board.weather[row] = weather;
    debug!("weather on {} is now {}", row, weather);
    Ok(next)
}

/// Highlight (or clear with `None`) a card in `side`'s hand.
pub fn select_card(state: &MatchState, side: Side, card_id: Option<&CardId>) -> Result<MatchState, Rejection> {
    legal::check_in_progress(state)?;
    if let Some(id) = card_id {
        state
            .player(side)
            .hand_position(id)
            .ok_or_else(|| Rejection::CardNotInHand(id.clone()))?;
    }

    let mut next = state.clone();
    next.selected_card = card_id.cloned();
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Faction;
    use crate::core::{MatchConfig, SideMap};

    fn unit(id: &str, power: u32, row: Row) -> Card {
        Card::unit(id, id, Faction::Nilfgaard, power, row)
    }

    fn dealt(player: Vec<Card>, opponent: Vec<Card>) -> MatchState {
        let config = MatchConfig::new().with_initial_hand_size(player.len().max(opponent.len()));
        let state = MatchState::with_ordered_decks(SideMap { player, opponent }, config);
        deal_initial_hands(&state).unwrap()
    }

    #[test]
    fn test_deal_only_once() {
        let state = MatchState::with_ordered_decks(
            SideMap::with_value(vec![unit("a", 1, Row::Siege); 12]),
            MatchConfig::default(),
        );
        let dealt = deal_initial_hands(&state).unwrap();

        assert_eq!(dealt.phase(), Phase::InProgress);
        assert_eq!(dealt.player(Side::Player).hand.len(), 10);
        assert_eq!(dealt.player(Side::Player).deck.len(), 2);
        assert_eq!(deal_initial_hands(&dealt).unwrap_err(), Rejection::WrongPhase(Phase::InProgress));
    }

    #[test]
    fn test_actions_refused_before_deal() {
        let state = MatchState::with_ordered_decks(SideMap::with_value(vec![]), MatchConfig::default());
        assert_eq!(
            submit_action(&state, Side::Player, &Action::Pass).unwrap_err(),
            Rejection::WrongPhase(Phase::PreMatch)
        );
    }

    #[test]
    fn test_play_moves_card_to_row_and_flips_turn() {
        let state = dealt(vec![unit("a", 5, Row::Ranged)], vec![unit("b", 2, Row::Siege)]);
        let next = submit_action(&state, Side::Player, &Action::play("a", Row::Ranged)).unwrap();

        assert!(next.state.player(Side::Player).hand.is_empty());
        assert_eq!(next.state.board().row(Side::Player, Row::Ranged).len(), 1);
        assert_eq!(next.state.current_turn(), Side::Opponent);
        assert_eq!(next.state.history().len(), 1);
        assert!(next.round_ended.is_none());
    }

    #[test]
    fn test_spell_goes_to_discard() {
        let rain = Card::spell("rain", "Torrential Rain", Faction::Nilfgaard);
        let state = dealt(vec![rain], vec![unit("b", 2, Row::Siege)]);
        let next = submit_action(&state, Side::Player, &Action::play("rain", Row::Siege)).unwrap();

        assert_eq!(next.state.player(Side::Player).discard.len(), 1);
        assert_eq!(next.state.board().card_count(Side::Player), 0);
    }

    #[test]
    fn test_scorch_burns_strongest_non_hero() {
        let scorch = Card::spell("scorch", "Scorch", Faction::Nilfgaard).with_ability(Ability::Scorch);
        let mut state = dealt(
            vec![scorch, unit("p8", 8, Row::Siege)],
            vec![unit("o8", 8, Row::Ranged), unit("o3", 3, Row::Ranged)],
        );

        state = submit_action(&state, Side::Player, &Action::play("p8", Row::Siege)).unwrap().state;
        state = submit_action(&state, Side::Opponent, &Action::play("o8", Row::Ranged)).unwrap().state;
        state = submit_action(&state, Side::Player, &Action::play("scorch", Row::CloseCombat)).unwrap().state;

        assert_eq!(state.board().card_count(Side::Player), 0);
        assert_eq!(state.board().card_count(Side::Opponent), 0);
        assert_eq!(state.player(Side::Player).discard.len(), 2);
        assert_eq!(state.player(Side::Opponent).discard.len(), 1);
        assert_eq!(state.card_count(Side::Opponent), 2);
    }

    #[test]
    fn test_scorch_spares_heroes_at_the_top() {
        let scorch = Card::spell("scorch", "Scorch", Faction::Nilfgaard).with_ability(Ability::Scorch);
        let mut state = dealt(vec![scorch], vec![unit("o1", 1, Row::Siege)]);
        state.board.rows[Side::Opponent][Row::CloseCombat].push_back(unit("hero", 10, Row::CloseCombat).hero());
        state.board.rows[Side::Opponent][Row::Ranged].push_back(unit("o8", 8, Row::Ranged));

        let state = submit_action(&state, Side::Player, &Action::play("scorch", Row::CloseCombat)).unwrap().state;
        assert_eq!(state.board().card_count(Side::Opponent), 2);
        assert!(state.player(Side::Opponent).discard.is_empty());
    }

    #[test]
    fn test_passed_side_is_skipped() {
        let state = dealt(
            vec![unit("a", 5, Row::Ranged)],
            vec![unit("b", 2, Row::Siege), unit("c", 2, Row::Siege)],
        );
        let state = submit_action(&state, Side::Player, &Action::Pass).unwrap().state;
        assert_eq!(state.current_turn(), Side::Opponent);

        let state = submit_action(&state, Side::Opponent, &Action::play("b", Row::Siege)).unwrap().state;
        assert_eq!(state.current_turn(), Side::Opponent);

        let refused = submit_action(&state, Side::Player, &Action::play("a", Row::Ranged));
        assert!(matches!(refused, Err(Rejection::NotYourTurn { expected: Side::Opponent, .. })));
    }

    #[test]
    fn test_weather_and_selection() {
        let state = dealt(vec![unit("a", 5, Row::Ranged)], vec![unit("b", 2, Row::Siege)]);

        let selected = select_card(&state, Side::Player, Some(&CardId::new("a"))).unwrap();
        assert_eq!(selected.selected_card(), Some(&CardId::new("a")));
        assert_eq!(
            select_card(&state, Side::Player, Some(&CardId::new("b"))).unwrap_err(),
            Rejection::CardNotInHand(CardId::new("b"))
        );

        let played = submit_action(&selected, Side::Player, &Action::play("a", Row::Ranged)).unwrap().state;
        assert_eq!(played.selected_card(), None);

        let frosted = apply_weather(&played, Row::Ranged, Weather::Frost).unwrap();
        assert_eq!(frosted.side_power(Side::Player), 1);
        assert_eq!(played.side_power(Side::Player), 5);
    }
}
