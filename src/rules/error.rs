//! Typed refusals.
//!
//! A rejected action never mutates state. Malformed input (unknown card
//! id, unparsable row tag) is reported through the same type as a rules
//! violation; there is no separate fatal class.

use thiserror::Error;

use crate::cards::{CardId, ParseTagError, Row};
use crate::core::{Phase, Side};

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Side, actual: Side },

    #[error("card `{0}` is not in hand")]
    CardNotInHand(CardId),

    #[error("card `{card}` cannot be played into {actual} (affinity {expected:?})")]
    RowMismatch {
        card: CardId,
        expected: Option<Row>,
        actual: Row,
    },

    #[error("card `{0}` cannot be played from hand")]
    NotPlayable(CardId),

    #[error("not allowed during {0:?}")]
    WrongPhase(Phase),

    #[error("the match is over")]
    MatchOver,

    #[error("malformed action: {0}")]
    Malformed(#[from] ParseTagError),
}
