//! Round resolution and round reset.

use log::debug;

use crate::core::{Board, MatchState, Phase, RoundSummary, Side, SideMap};

use super::events::{MatchEnded, RoundEnded, RoundOutcome};

/// Resolve the current round. Called once both seats have passed.
///
/// The higher total takes the round; a tie credits nobody. Reaching the
/// configured number of round wins ends the match, otherwise the next round
/// starts with a clean board and a fresh draw.
pub(crate) fn resolve_round(state: &mut MatchState) -> (RoundEnded, Option<MatchEnded>) {
    state.phase = Phase::RoundEnd;

    let power = SideMap::new(|side| state.side_power(side));
    let outcome = RoundOutcome::from_powers(&power);
    if let Some(side) = outcome.winner() {
        state.round_wins[side] += 1;
    }

    debug!(
        "round {} resolved: player {} vs opponent {} -> {:?}",
        state.round, power.player, power.opponent, outcome
    );

    state.rounds.push_back(RoundSummary {
        round: state.round,
        power: power.clone(),
        winner: outcome.winner(),
    });
    let round_ended = RoundEnded {
        round: state.round,
        outcome,
        power,
    };

    let target = state.config.rounds_to_win;
    let champion = Side::BOTH
        .into_iter()
        .find(|&side| state.round_wins[side] >= target);

    if let Some(winner) = champion {
        state.phase = Phase::MatchEnd;
        state.winner = Some(winner);
        debug!("match over: {} wins {:?}", winner, state.round_wins);
        let match_ended = MatchEnded {
            winner,
            round_wins: state.round_wins.clone(),
        };
        return (round_ended, Some(match_ended));
    }

    start_next_round(state);
    (round_ended, None)
}

/// Clear the board into the discard piles, reset weather and passes, and
/// deal the inter-round draw.
fn start_next_round(state: &mut MatchState) {
    let Board { rows, .. } = std::mem::take(&mut state.board);

    for side in Side::BOTH {
        let player = &mut state.players[side];
        for row in rows[side].values() {
            player.discard.append(row.clone());
        }
        player.has_passed = false;
    }

    state.round += 1;
    state.phase = Phase::RoundStart;

    let draw = state.config.round_draw;
    for side in Side::BOTH {
        let drawn = state.players[side].draw(draw);
        debug!("{} draws {} for round {}", side, drawn, state.round);
    }

    state.selected_card = None;
    state.phase = Phase::InProgress;
}
