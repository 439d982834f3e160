//! Core types: seats, randomness, actions, configuration, state, and
//! snapshots.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{MatchConfig, Phase};
pub use player::{Side, SideMap};
pub use rng::{shuffle, GameRng, RandomSource};
pub use snapshot::{query_state, MatchSnapshot, SideView, SnapshotError};
pub use state::{Board, MatchState, PlayerState, RoundSummary, Rows};
