//! Power calculation.
//!
//! Pure functions from rows of cards (plus weather) to integer power. Used
//! by round resolution, scorch, and every AI tier.

pub mod calculator;

pub use calculator::{effective_powers, row_power, side_power, strongest_cards, PowerBreakdown};
