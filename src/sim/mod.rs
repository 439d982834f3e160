//! Caller-side match simulation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gwent_engine::ai::Difficulty;
//! use gwent_engine::core::Side;
//! use gwent_engine::sim::{MatchRunner, SimConfig};
//!
//! let runner = MatchRunner::new(SimConfig::new().with_difficulty(Side::Opponent, Difficulty::Hard));
//! let reports = runner.play_matches(|seed| build_decks(seed), 100)?;
//! let hard_wins = reports.iter().filter(|r| r.winner == Some(Side::Opponent)).count();
//! ```

pub mod runner;

pub use runner::{MatchReport, MatchRunner, SimConfig};
