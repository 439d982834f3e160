//! Legality checks shared by the dispatcher, callers and the AI.
//!
//! Validation is read-only and runs to completion before the dispatcher
//! touches anything.

use crate::cards::{Card, CardKind, Row};
use crate::core::{Action, MatchState, Phase, Side};

use super::error::Rejection;

/// Check that `side` may act at all right now.
pub fn check_turn(state: &MatchState, side: Side) -> Result<(), Rejection> {
    check_in_progress(state)?;
    if state.current_turn() != side {
        return Err(Rejection::NotYourTurn {
            expected: state.current_turn(),
            actual: side,
        });
    }
    Ok(())
}

/// Check the match is accepting actions.
pub fn check_in_progress(state: &MatchState) -> Result<(), Rejection> {
    match state.phase() {
        Phase::InProgress => Ok(()),
        Phase::MatchEnd => Err(Rejection::MatchOver),
        other => Err(Rejection::WrongPhase(other)),
    }
}

/// Check that `card` may go into `row`.
///
/// Units must match their affinity. Spells ignore the row. Leaders never
/// leave the hand.
pub fn check_row(card: &Card, row: Row) -> Result<(), Rejection> {
    match card.kind {
        CardKind::Unit if card.row == Some(row) => Ok(()),
        CardKind::Unit => Err(Rejection::RowMismatch {
            card: card.id.clone(),
            expected: card.row,
            actual: row,
        }),
        CardKind::Spell => Ok(()),
        CardKind::Leader => Err(Rejection::NotPlayable(card.id.clone())),
    }
}

/// Validate an action and, for plays, return the hand index of the card.
pub fn validate(state: &MatchState, side: Side, action: &Action) -> Result<Option<usize>, Rejection> {
    check_turn(state, side)?;

    match action {
        Action::Pass => Ok(None),
        Action::PlayCard { card_id, row } => {
            let hand = &state.player(side).hand;
            let index = state
                .player(side)
                .hand_position(card_id)
                .ok_or_else(|| Rejection::CardNotInHand(card_id.clone()))?;
            check_row(&hand[index], *row)?;
            Ok(Some(index))
        }
    }
}

/// Every action `side` could submit right now.
///
/// Pass is always legal on your turn. Each distinct playable card appears
/// once per row `check_row` accepts: units into their affinity row, spells
/// into all three rows.
#[must_use]
pub fn legal_actions(state: &MatchState, side: Side) -> Vec<Action> {
    if check_turn(state, side).is_err() {
        return Vec::new();
    }

    let mut actions = vec![Action::Pass];
    for card in state.player(side).playable_cards() {
        for row in Row::ALL {
            if check_row(card, row).is_err() {
                continue;
            }
            let action = Action::play(card.id.clone(), row);
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Ability, Faction};

    #[test]
    fn test_check_row() {
        let unit = Card::unit("u", "U", Faction::Nilfgaard, 4, Row::Ranged);
        let spell = Card::spell("rain", "Torrential Rain", Faction::Nilfgaard);
        let leader = Card::leader("emhyr", "Emhyr", Faction::Nilfgaard);
        let rowless = Card::unit("m", "M", Faction::Monsters, 2, Row::Siege)
            .with_ability(Ability::Muster)
            .with_row(None);

        assert!(check_row(&unit, Row::Ranged).is_ok());
        assert!(matches!(
            check_row(&unit, Row::Siege),
            Err(Rejection::RowMismatch { expected: Some(Row::Ranged), actual: Row::Siege, .. })
        ));
        for row in Row::ALL {
            assert!(check_row(&spell, row).is_ok());
            assert!(matches!(check_row(&leader, row), Err(Rejection::NotPlayable(_))));
            assert!(matches!(check_row(&rowless, row), Err(Rejection::RowMismatch { expected: None, .. })));
        }
    }

    #[test]
    fn test_legal_actions_list_spells_in_every_row() {
        use crate::core::{MatchConfig, SideMap};
        use crate::rules::deal_initial_hands;

        let spell = Card::spell("rain", "Torrential Rain", Faction::Nilfgaard);
        let unit = Card::unit("u", "U", Faction::Nilfgaard, 4, Row::Ranged);
        let config = MatchConfig::new().with_initial_hand_size(3);
        let decks = SideMap {
            player: vec![spell.clone(), unit, spell],
            opponent: vec![],
        };
        let state = deal_initial_hands(&MatchState::with_ordered_decks(decks, config)).unwrap();

        let actions = legal_actions(&state, Side::Player);
        assert_eq!(
            actions,
            vec![
                Action::Pass,
                Action::play("rain", Row::CloseCombat),
                Action::play("rain", Row::Ranged),
                Action::play("rain", Row::Siege),
                Action::play("u", Row::Ranged),
            ]
        );
    }
}
