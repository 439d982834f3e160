//! Read-only views of a match for presentation layers and workers.
//!
//! `query_state` flattens a `MatchState` into a plain `MatchSnapshot`
//! carrying everything a screen needs, including each side's current power
//! so callers never recompute it. Snapshots encode to a compact binary form
//! with bincode for hand-off across threads or processes.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::config::Phase;
use super::player::{Side, SideMap};
use super::state::{MatchState, Rows};
use crate::cards::{Card, CardId, RowMap, Weather};

/// Failure to encode or decode a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] bincode::Error),
}

/// What one side looks like from the outside.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SideView {
    pub hand: Vector<Card>,
    pub discard: Vector<Card>,
    pub rows: Rows,
    pub deck_size: usize,
    pub hand_size: usize,
    pub has_passed: bool,
    pub lives_remaining: u8,
    /// Total power under the current weather.
    pub power: u32,
}

/// Flattened, serializable view of a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub current_turn: Side,
    pub round_wins: SideMap<u8>,
    pub winner: Option<Side>,
    pub weather: RowMap<Weather>,
    pub selected_card: Option<CardId>,
    pub sides: SideMap<SideView>,
}

impl MatchSnapshot {
    /// Encode to bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode bytes produced by [`MatchSnapshot::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }

    /// Side currently ahead on power, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;

        match self.sides.player.power.cmp(&self.sides.opponent.power) {
            Ordering::Greater => Some(Side::Player),
            Ordering::Less => Some(Side::Opponent),
            Ordering::Equal => None,
        }
    }
}

/// Current match view. Pure read.
///
/// ```
/// use gwent_engine::cards::{Card, Faction, Row};
/// use gwent_engine::core::{query_state, MatchConfig, MatchState, Phase, SideMap};
///
/// let deck = vec![Card::unit("grunt", "Grunt", Faction::Monsters, 3, Row::Siege); 12];
/// let state = MatchState::new(SideMap::with_value(deck), MatchConfig::default());
///
/// let snapshot = query_state(&state);
/// assert_eq!(snapshot.phase, Phase::PreMatch);
/// assert_eq!(snapshot.sides.player.deck_size, 12);
/// assert_eq!(snapshot.sides.opponent.power, 0);
/// ```
#[must_use]
pub fn query_state(state: &MatchState) -> MatchSnapshot {
    let board = state.board();
    let sides = SideMap::new(|side| {
        let player = state.player(side);
        SideView {
            hand: player.hand.clone(),
            discard: player.discard.clone(),
            rows: board.rows[side].clone(),
            deck_size: player.deck.len(),
            hand_size: player.hand.len(),
            has_passed: player.has_passed,
            lives_remaining: player.lives_remaining,
            power: board.side_power(side),
        }
    });

    MatchSnapshot {
        phase: state.phase(),
        round: state.round(),
        current_turn: state.current_turn(),
        round_wins: state.round_wins().clone(),
        winner: state.winner(),
        weather: board.weather.clone(),
        selected_card: state.selected_card().cloned(),
        sides,
    }
}
