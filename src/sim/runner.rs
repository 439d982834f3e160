//! AI-vs-AI match runner.
//!
//! Drives a whole match through the public dispatcher path: deal, then ask
//! the seat to move for a recommendation and submit it, until the match
//! ends or the action guard trips. Useful for integration tests and for
//! comparing difficulty tiers over many seeds.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ai::{decide_with, AiTuning, Difficulty};
use crate::cards::Card;
use crate::core::{GameRng, MatchConfig, MatchState, Side, SideMap};
use crate::rules::{deal_initial_hands, submit_action, Rejection, RoundEnded};

/// Configuration for simulated matches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimConfig {
    /// Rules for each match. Its seed is replaced per match.
    pub match_config: MatchConfig,

    /// Difficulty of each seat.
    pub difficulty: SideMap<Difficulty>,

    /// Tuning shared by both seats.
    pub tuning: AiTuning,

    /// Maximum accepted actions per match (guards against endless ties).
    pub max_actions: usize,

    /// Seed offset (combined with the match index for unique seeds).
    pub seed_offset: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            match_config: MatchConfig::default(),
            difficulty: SideMap::with_value(Difficulty::Medium),
            tuning: AiTuning::default(),
            max_actions: 500,
            seed_offset: 0,
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the difficulty of one seat.
    pub fn with_difficulty(mut self, side: Side, difficulty: Difficulty) -> Self {
        self.difficulty[side] = difficulty;
        self
    }

    /// Set the match rules.
    pub fn with_match_config(mut self, config: MatchConfig) -> Self {
        self.match_config = config;
        self
    }

    /// Set the AI tuning.
    pub fn with_tuning(mut self, tuning: AiTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Set the action guard.
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Outcome of one simulated match.
#[derive(Clone, Debug)]
pub struct MatchReport {
    pub seed: u64,
    pub final_state: MatchState,
    /// `None` if the action guard tripped first.
    pub winner: Option<Side>,
    pub rounds: Vec<RoundEnded>,
    pub actions: usize,
}

impl MatchReport {
    /// Whether the match reached its terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.winner.is_some()
    }
}

/// Plays matches between two AI seats.
#[derive(Clone, Debug, Default)]
pub struct MatchRunner {
    config: SimConfig,
}

impl MatchRunner {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Play one match from the given decks.
    ///
    /// A rejected recommendation is returned as an error; it means a
    /// strategy proposed something the rules refuse.
    pub fn play_match(&self, decks: SideMap<Vec<Card>>, seed: u64) -> Result<MatchReport, Rejection> {
        let match_config = self.config.match_config.clone().with_seed(seed);
        let mut state = deal_initial_hands(&MatchState::new(decks, match_config))?;

        let base = GameRng::new(seed);
        let mut rngs = SideMap {
            player: base.for_context("ai:player"),
            opponent: base.for_context("ai:opponent"),
        };

        let mut rounds = Vec::new();
        let mut actions = 0;
        while !state.is_game_over() && actions < self.config.max_actions {
            let side = state.current_turn();
            let recommendation = decide_with(
                &state,
                side,
                self.config.difficulty[side],
                &self.config.tuning,
                &mut rngs[side],
            );

            let transition = submit_action(&state, side, &recommendation.action)?;
            actions += 1;
            rounds.extend(transition.round_ended);
            state = transition.state;
        }

        debug!(
            "match {} finished after {} actions: winner {:?}",
            seed,
            actions,
            state.winner()
        );

        Ok(MatchReport {
            seed,
            winner: state.winner(),
            final_state: state,
            rounds,
            actions,
        })
    }

    /// Play `count` matches, building decks per seed.
    pub fn play_matches(
        &self,
        deck_builder: impl Fn(u64) -> SideMap<Vec<Card>>,
        count: usize,
    ) -> Result<Vec<MatchReport>, Rejection> {
        (0..count)
            .map(|i| {
                let seed = self.config.seed_offset.wrapping_add(i as u64);
                self.play_match(deck_builder(seed), seed)
            })
            .collect()
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
