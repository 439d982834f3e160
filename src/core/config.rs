//! Match configuration and phases.
//!
//! `MatchConfig` holds the numbers that shape a match (hand size, draws,
//! rounds to win). Defaults are the standard rules; tests shrink them.

use serde::{Deserialize, Serialize};

/// Match phase.
///
/// `Menu` and `DeckBuilding` belong to the presentation layer but live in
/// shared state so screens and engine agree on one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Menu,
    DeckBuilding,
    /// Decks shuffled, hands not dealt yet.
    PreMatch,
    RoundStart,
    /// Actions are accepted only here.
    InProgress,
    RoundEnd,
    /// Terminal.
    MatchEnd,
}

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards each side draws in the one-time initial deal.
    pub initial_hand_size: usize,

    /// Cards each side draws when a new round starts.
    pub round_draw: usize,

    /// Round wins that end the match.
    pub rounds_to_win: u8,

    /// Lives each side starts with. Tracked but not consulted.
    pub starting_lives: u8,

    /// Seed for deck shuffling.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: 10,
            round_draw: 2,
            rounds_to_win: 2,
            starting_lives: 2,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a config with the standard rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial hand size.
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the per-round draw.
    pub fn with_round_draw(mut self, draw: usize) -> Self {
        self.round_draw = draw;
        self
    }

    /// Set the round wins needed to take the match.
    pub fn with_rounds_to_win(mut self, rounds: u8) -> Self {
        self.rounds_to_win = rounds.max(1);
        self
    }

    /// Set the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
