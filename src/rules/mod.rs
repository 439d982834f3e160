//! Match rules: validation, the action dispatcher and round resolution.
//!
//! Every state change goes through `submit_action` (or one of the
//! out-of-turn helpers `deal_initial_hands`, `apply_weather`,
//! `select_card`). Each takes the current `MatchState` by reference and
//! returns either a new state or a `Rejection`; the input is never touched.

pub mod dispatcher;
pub mod error;
pub mod events;
pub mod legal;
mod round;

pub use dispatcher::{apply_weather, deal_initial_hands, select_card, submit_action, Transition};
pub use error::Rejection;
pub use events::{MatchEnded, RoundEnded, RoundOutcome};
pub use legal::{check_row, check_turn, legal_actions, validate};
