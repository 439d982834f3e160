//! Events emitted by accepted transitions. Pure data.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// How a round (or a match) came out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Winner(Side),
    /// Equal power. Neither side is credited.
    Tie,
}

impl RoundOutcome {
    /// Compare two totals. Equal totals are a tie.
    #[must_use]
    pub fn from_powers(power: &SideMap<u32>) -> Self {
        use std::cmp::Ordering;

        match power.player.cmp(&power.opponent) {
            Ordering::Greater => RoundOutcome::Winner(Side::Player),
            Ordering::Less => RoundOutcome::Winner(Side::Opponent),
            Ordering::Equal => RoundOutcome::Tie,
        }
    }

    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Winner(side) => Some(side),
            RoundOutcome::Tie => None,
        }
    }
}

/// A round was resolved after both seats passed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEnded {
    /// The round that just ended.
    pub round: u32,
    pub outcome: RoundOutcome,
    /// Final power of each side.
    pub power: SideMap<u32>,
}

/// The match reached its terminal state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEnded {
    pub winner: Side,
    pub round_wins: SideMap<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_powers() {
        assert_eq!(
            RoundOutcome::from_powers(&SideMap { player: 20, opponent: 15 }),
            RoundOutcome::Winner(Side::Player)
        );
        assert_eq!(
            RoundOutcome::from_powers(&SideMap { player: 3, opponent: 4 }),
            RoundOutcome::Winner(Side::Opponent)
        );
        assert_eq!(RoundOutcome::from_powers(&SideMap::with_value(9)), RoundOutcome::Tie);
        assert_eq!(RoundOutcome::Tie.winner(), None);
    }

    #[test]
    fn test_event_serialization() {
        let event = RoundEnded {
            round: 1,
            outcome: RoundOutcome::Winner(Side::Opponent),
            power: SideMap { player: 10, opponent: 12 },
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""outcome":{"winner":"opponent"}"#));

        let deserialized: RoundEnded = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
