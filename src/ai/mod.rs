//! Three-tier AI that recommends actions for either seat.
//!
//! ## Overview
//!
//! - **Easy**: random plays with a fixed chance of passing.
//! - **Medium**: compares board power, protects large leads, catches up
//!   when behind, otherwise commits a mid-tier card.
//! - **Hard**: adds card saving in round 2, situational spy/medic/scorch
//!   use, final-round management and a scoring function.
//!
//! The AI is read-only. It returns a `Recommendation`; the caller submits
//! `recommendation.action` through `rules::submit_action` exactly as a
//! human seat would.
//!
//! ## Usage
//!
//! ```rust
//! use gwent_engine::ai::{decide, Difficulty};
//! use gwent_engine::cards::{Card, Faction, Row};
//! use gwent_engine::core::{GameRng, MatchConfig, MatchState, Side, SideMap};
//! use gwent_engine::rules::{deal_initial_hands, submit_action};
//!
//! let deck = vec![Card::unit("knight", "Knight", Faction::NorthernRealms, 5, Row::CloseCombat); 12];
//! let state = MatchState::new(SideMap::with_value(deck), MatchConfig::default());
//! let state = deal_initial_hands(&state).unwrap();
//!
//! let mut rng = GameRng::new(7);
//! let rec = decide(&state, Side::Player, Difficulty::Hard, &mut rng);
//! let next = submit_action(&state, Side::Player, &rec.action).unwrap();
//! assert_eq!(next.state.history().len(), 1);
//! ```
//!
//! ## Off-thread decisions
//!
//! `decide_detached` moves a state snapshot onto a worker thread. Dropping
//! the handle abandons the decision with nothing to clean up.

pub mod config;
pub mod scoring;
pub mod strategy;

use std::thread::{self, JoinHandle};

use log::debug;

use crate::core::{GameRng, MatchState, RandomSource, Side};

pub use config::{AiTuning, Difficulty};
pub use scoring::{card_priority, hard_score, sort_by_priority};
pub use strategy::{
    EasyStrategy, HardStrategy, MediumStrategy, Rationale, Recommendation, Situation, Strategy,
};

impl Difficulty {
    /// The strategy for this tier.
    #[must_use]
    pub fn strategy(self, tuning: AiTuning) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(EasyStrategy { tuning }),
            Difficulty::Medium => Box::new(MediumStrategy { tuning }),
            Difficulty::Hard => Box::new(HardStrategy { tuning }),
        }
    }
}

/// Recommend an action for `side` with the default tuning.
pub fn decide(
    state: &MatchState,
    side: Side,
    difficulty: Difficulty,
    rng: &mut dyn RandomSource,
) -> Recommendation {
    decide_with(state, side, difficulty, &AiTuning::default(), rng)
}

/// Recommend an action for `side` with explicit tuning.
pub fn decide_with(
    state: &MatchState,
    side: Side,
    difficulty: Difficulty,
    tuning: &AiTuning,
    rng: &mut dyn RandomSource,
) -> Recommendation {
    let situation = Situation::read(state, side);
    let recommendation = difficulty.strategy(tuning.clone()).decide(&situation, rng);
    debug!(
        "{} ai for {}: {} ({})",
        difficulty, side, recommendation.action, recommendation.rationale
    );
    recommendation
}

/// Decide on a worker thread.
///
/// The state is an owned snapshot, so the caller's copy may keep serving
/// reads meanwhile. The worker draws from a fork of `rng`; the caller's
/// stream only advances its fork counter.
pub fn decide_detached(
    state: MatchState,
    side: Side,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> JoinHandle<Recommendation> {
    let mut worker = rng.fork();
    thread::spawn(move || decide(&state, side, difficulty, &mut worker))
}
