//! Whole-match flow: round resolution, match end, conservation and full
//! AI-driven matches.

use gwent_engine::ai::Difficulty;
use gwent_engine::cards::{Ability, Card, Faction, Row, Weather};
use gwent_engine::core::{query_state, Action, MatchConfig, MatchState, Phase, Side, SideMap};
use gwent_engine::rules::{
    apply_weather, deal_initial_hands, legal_actions, submit_action, Rejection, RoundOutcome,
};
use gwent_engine::sim::{MatchRunner, SimConfig};
use proptest::prelude::*;

fn unit(id: &str, power: u32, row: Row) -> Card {
    Card::unit(id, id, Faction::Monsters, power, row)
}

fn filler(prefix: &str, count: usize) -> Vec<Card> {
    (0..count).map(|i| unit(&format!("{prefix}{i}"), 1, Row::Siege)).collect()
}

/// Hands as given, then `deck_extra` filler cards left in each deck.
fn dealt(player: Vec<Card>, opponent: Vec<Card>, deck_extra: usize) -> MatchState {
    let size = player.len().max(opponent.len());
    let pad = |mut hand: Vec<Card>, prefix: &str| {
        while hand.len() < size {
            hand.push(unit(&format!("{prefix}pad{}", hand.len()), 0, Row::Siege));
        }
        hand.extend(filler(prefix, deck_extra));
        hand
    };
    let decks = SideMap {
        player: pad(player, "p"),
        opponent: pad(opponent, "o"),
    };
    let config = MatchConfig::new().with_initial_hand_size(size);
    deal_initial_hands(&MatchState::with_ordered_decks(decks, config)).unwrap()
}

fn apply(state: MatchState, side: Side, action: Action) -> MatchState {
    submit_action(&state, side, &action).unwrap().state
}

// =============================================================================
// Round Resolution
// =============================================================================

#[test]
fn test_round_twenty_versus_fifteen() {
    let state = dealt(
        vec![unit("p20", 20, Row::CloseCombat)],
        vec![unit("o15", 15, Row::Ranged)],
        4,
    );
    let state = apply(state, Side::Player, Action::play("p20", Row::CloseCombat));
    let state = apply(state, Side::Opponent, Action::play("o15", Row::Ranged));
    let state = apply_weather(&state, Row::Siege, Weather::Frost).unwrap();
    let hands_before = (
        state.player(Side::Player).hand.len(),
        state.player(Side::Opponent).hand.len(),
    );

    let state = apply(state, Side::Player, Action::Pass);
    let transition = submit_action(&state, Side::Opponent, &Action::Pass).unwrap();
    let ended = transition.round_ended.unwrap();
    let state = transition.state;

    assert_eq!(ended.outcome, RoundOutcome::Winner(Side::Player));
    assert_eq!(ended.power, SideMap { player: 20, opponent: 15 });
    assert!(transition.match_ended.is_none());

    assert_eq!(state.round_wins()[Side::Player], 1);
    assert_eq!(state.round_wins()[Side::Opponent], 0);
    assert_eq!(state.round(), 2);
    assert_eq!(state.board().card_count(Side::Player), 0);
    assert_eq!(state.board().card_count(Side::Opponent), 0);
    for row in Row::ALL {
        assert_eq!(state.board().weather[row], Weather::Clear);
    }
    assert_eq!(state.player(Side::Player).hand.len(), hands_before.0 + 2);
    assert_eq!(state.player(Side::Opponent).hand.len(), hands_before.1 + 2);
    assert!(!state.player(Side::Player).has_passed);
    assert_eq!(state.rounds().len(), 1);
}

#[test]
fn test_draw_is_capped_by_deck() {
    let state = dealt(vec![unit("a", 2, Row::Siege)], vec![unit("b", 1, Row::Siege)], 1);
    let state = apply(state, Side::Player, Action::Pass);
    let state = apply(state, Side::Opponent, Action::Pass);

    assert_eq!(state.player(Side::Player).hand.len(), 2);
    assert!(state.player(Side::Player).deck.is_empty());
}

#[test]
fn test_tie_round_credits_nobody() {
    let state = dealt(vec![unit("a", 5, Row::Siege)], vec![unit("b", 5, Row::Siege)], 0);
    let state = apply(state, Side::Player, Action::play("a", Row::Siege));
    let state = apply(state, Side::Opponent, Action::play("b", Row::Siege));
    let state = apply(state, Side::Player, Action::Pass);
    let transition = submit_action(&state, Side::Opponent, &Action::Pass).unwrap();

    assert_eq!(transition.round_ended.unwrap().outcome, RoundOutcome::Tie);
    assert_eq!(transition.state.round_wins(), &SideMap::with_value(0));
    assert_eq!(transition.state.round(), 2);
}

// =============================================================================
// Match End
// =============================================================================

#[test]
fn test_two_round_wins_end_the_match() {
    let state = dealt(
        vec![unit("p1", 9, Row::CloseCombat), unit("p2", 9, Row::CloseCombat)],
        vec![unit("o1", 1, Row::Siege)],
        0,
    );

    let state = apply(state, Side::Player, Action::play("p1", Row::CloseCombat));
    let state = apply(state, Side::Opponent, Action::Pass);
    let state = apply(state, Side::Player, Action::Pass);
    assert_eq!(state.round_wins()[Side::Player], 1);

    let state = apply(state, Side::Player, Action::play("p2", Row::CloseCombat));
    let state = apply(state, Side::Opponent, Action::Pass);
    let transition = submit_action(&state, Side::Player, &Action::Pass).unwrap();

    let ended = transition.match_ended.unwrap();
    assert_eq!(ended.winner, Side::Player);
    assert_eq!(ended.round_wins[Side::Player], 2);

    let state = transition.state;
    assert_eq!(state.phase(), Phase::MatchEnd);
    assert_eq!(state.winner(), Some(Side::Player));
    assert!(state.is_game_over());

    let before = query_state(&state);
    for side in Side::BOTH {
        assert_eq!(submit_action(&state, side, &Action::Pass).unwrap_err(), Rejection::MatchOver);
        assert_eq!(
            submit_action(&state, side, &Action::play("o1", Row::Siege)).unwrap_err(),
            Rejection::MatchOver
        );
        assert!(legal_actions(&state, side).is_empty());
    }
    assert_eq!(
        apply_weather(&state, Row::Siege, Weather::Fog).unwrap_err(),
        Rejection::MatchOver
    );
    assert_eq!(query_state(&state), before);
}

#[test]
fn test_last_passer_opens_next_round() {
    let state = dealt(vec![unit("a", 3, Row::Siege)], vec![unit("b", 1, Row::Siege)], 0);
    let state = apply(state, Side::Player, Action::Pass);
    let state = apply(state, Side::Opponent, Action::Pass);
    assert_eq!(state.current_turn(), Side::Opponent);

    let state = apply(state, Side::Opponent, Action::Pass);
    let state = apply(state, Side::Player, Action::Pass);
    assert_eq!(state.current_turn(), Side::Player);
}

// =============================================================================
// Full Matches
// =============================================================================

fn faction_deck(faction: Faction) -> Vec<Card> {
    let rows = Row::ALL;
    let mut deck: Vec<Card> = (0..18u32)
        .map(|i| {
            Card::unit(
                format!("{faction}_{i}"),
                format!("{faction} soldier {}", i % 6),
                faction,
                i % 10 + 1,
                rows[i as usize % 3],
            )
        })
        .collect();
    let bond = |id: &str| {
        Card::unit(format!("{faction}_{id}"), "Bonded", faction, 4, Row::Ranged)
            .with_ability(Ability::TightBond)
    };
    deck.push(bond("bond_a"));
    deck.push(bond("bond_b"));
    deck.push(
        Card::unit(format!("{faction}_horn"), "Booster", faction, 2, Row::Siege)
            .with_ability(Ability::MoralBoost),
    );
    deck.push(Card::unit(format!("{faction}_hero"), "Hero", faction, 12, Row::CloseCombat).hero());
    deck.push(
        Card::unit(format!("{faction}_medic"), "Medic", faction, 5, Row::Siege)
            .with_ability(Ability::Medic),
    );
    deck.push(
        Card::unit(format!("{faction}_spy"), "Spy", faction, 4, Row::CloseCombat)
            .with_ability(Ability::Spy),
    );
    deck.push(Card::spell(format!("{faction}_scorch"), "Scorch", faction).with_ability(Ability::Scorch));
    deck.push(Card::spell(format!("{faction}_frost"), "Biting Frost", faction));
    deck
}

fn decks(_seed: u64) -> SideMap<Vec<Card>> {
    SideMap {
        player: faction_deck(Faction::Nilfgaard),
        opponent: faction_deck(Faction::Skellige),
    }
}

#[test]
fn test_ai_matches_conserve_cards_and_finish() {
    for player in Difficulty::ALL {
        for opponent in Difficulty::ALL {
            let config = SimConfig::new()
                .with_difficulty(Side::Player, player)
                .with_difficulty(Side::Opponent, opponent)
                .with_seed_offset(1_000);
            let reports = MatchRunner::new(config).play_matches(decks, 5).unwrap();

            for report in reports {
                for side in Side::BOTH {
                    assert_eq!(report.final_state.card_count(side), 26);
                }
                if let Some(winner) = report.winner {
                    assert_eq!(report.final_state.round_wins()[winner], 2);
                    assert_eq!(report.final_state.phase(), Phase::MatchEnd);
                }
            }
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Every seat's card count is fixed for the whole match, whatever legal
    /// actions are taken.
    #[test]
    fn card_count_is_conserved(seed in 0u64..1_000, picks in prop::collection::vec(0usize..16, 1..60)) {
        let config = MatchConfig::default().with_seed(seed);
        let state = MatchState::new(decks(seed), config);
        let mut state = deal_initial_hands(&state).unwrap();
        let totals = SideMap::new(|side| state.card_count(side));

        for pick in picks {
            if state.is_game_over() {
                break;
            }
            let side = state.current_turn();
            let actions = legal_actions(&state, side);
            prop_assert!(!actions.is_empty());
            let action = &actions[pick % actions.len()];

            state = submit_action(&state, side, action).unwrap().state;
            for side in Side::BOTH {
                prop_assert_eq!(state.card_count(side), totals[side]);
            }
        }
    }

    /// A refused action leaves the state exactly as it was.
    #[test]
    fn rejection_never_mutates(seed in 0u64..1_000, row in 0usize..3) {
        let state = MatchState::new(decks(seed), MatchConfig::default().with_seed(seed));
        let state = deal_initial_hands(&state).unwrap();
        let before = query_state(&state);

        let stranger = Action::play("not_a_card", Row::ALL[row]);
        prop_assert!(submit_action(&state, Side::Player, &stranger).is_err());
        prop_assert!(submit_action(&state, Side::Opponent, &Action::Pass).is_err());
        prop_assert_eq!(query_state(&state), before);
    }
}
