//! Actions a seat can submit, and the record kept of accepted ones.
//!
//! There are exactly two externally triggered actions: play a card from
//! hand into a row, or pass for the rest of the round. Both the human seat
//! and the AI submit them through the same dispatcher.

use serde::{Deserialize, Serialize};

use super::player::Side;
use crate::cards::{CardId, ParseTagError, Row};

/// A complete action.
///
/// ## Example
///
/// ```
/// use gwent_engine::cards::Row;
/// use gwent_engine::core::Action;
///
/// let play = Action::play("letho", Row::CloseCombat);
/// assert!(!play.is_pass());
/// assert!(Action::Pass.is_pass());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Play a card from hand. `row` is binding for units and advisory for
    /// spells.
    PlayCard { card_id: CardId, row: Row },
    /// Pass for the rest of the round.
    Pass,
}

impl Action {
    /// Create a play action.
    #[must_use]
    pub fn play(card_id: impl Into<CardId>, row: Row) -> Self {
        Action::PlayCard {
            card_id: card_id.into(),
            row,
        }
    }

    /// Build a play action from external strings.
    ///
    /// The card id is taken as-is (an unknown id is refused later as "not
    /// in hand"); the row must be a known tag.
    pub fn parse_play(card_id: &str, row: &str) -> Result<Self, ParseTagError> {
        Ok(Self::play(card_id, row.parse::<Row>()?))
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass)
    }

    /// Card referenced by this action, if any.
    #[must_use]
    pub fn card_id(&self) -> Option<&CardId> {
        match self {
            Action::PlayCard { card_id, .. } => Some(card_id),
            Action::Pass => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlayCard { card_id, row } => write!(f, "play {} -> {}", card_id, row),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// An accepted action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Round in which the action was taken.
    pub round: u32,

    /// Sequence number within the match (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            side,
            action,
            round,
            sequence,
        }
    }
}
