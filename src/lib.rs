//! # gwent-engine
//!
//! Rule and turn engine for a two-seat, three-row card battle in the style
//! of Gwent.
//!
//! ## Design Principles
//!
//! 1. **Immutable in, immutable out**: every transition takes a
//!    `MatchState` by reference and returns a new one or a `Rejection`.
//!    There is no global store; the caller owns the match.
//!
//! 2. **Closed tags**: rows, abilities, weather, phases and card kinds are
//!    enums, so an unhandled variant is a compile error.
//!
//! 3. **Explicit randomness**: shuffles and AI coin flips draw from a
//!    `RandomSource` handed in by the caller, seedable for replays.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: zones and rows are `im` vectors, so a
//!   snapshot clone is O(1). The AI works on snapshots, optionally on
//!   another thread.
//!
//! - **One power pipeline**: round resolution, snapshots and the AI all use
//!   the same `power` functions.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, actions, configuration, match state, snapshots
//! - `cards`: card tags, definitions and the catalog
//! - `power`: tight bond, moral boost and weather power calculation
//! - `rules`: validation, the action dispatcher and round resolution
//! - `ai`: Easy, Medium and Hard decision strategies
//! - `sim`: AI-vs-AI match runner

pub mod core;
pub mod cards;
pub mod power;
pub mod rules;
pub mod ai;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    GameRng, RandomSource, shuffle,
    Action, ActionRecord,
    MatchConfig, Phase,
    MatchState, PlayerState, Board, RoundSummary,
    query_state, MatchSnapshot, SnapshotError,
};

pub use crate::cards::{
    Ability, CardKind, Faction, Row, RowMap, Weather,
    Card, CardId, CardCatalog, CardRegistry, CatalogError, is_deck_valid,
};

pub use crate::power::{row_power, side_power};

pub use crate::rules::{
    submit_action, deal_initial_hands, apply_weather, select_card, legal_actions,
    Transition, Rejection, RoundEnded, RoundOutcome, MatchEnded,
};

pub use crate::ai::{
    decide, decide_with, decide_detached,
    AiTuning, Difficulty, Recommendation, Rationale, Strategy,
};

pub use crate::sim::{MatchReport, MatchRunner, SimConfig};
