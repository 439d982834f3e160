//! Match state: the single owned aggregate the dispatcher mutates.
//!
//! ## MatchState
//!
//! Holds both seats' zones, the board (rows per seat plus shared weather),
//! turn and round counters, scores, and terminal status. Fields are
//! crate-private: callers read through accessors and change state only by
//! submitting actions to `rules`.
//!
//! ## Cheap snapshots
//!
//! Zones and rows are `im::Vector`s, so `clone()` is O(1). The AI and any
//! worker thread operate on such clones and never see a half-applied
//! transition.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::config::{MatchConfig, Phase};
use super::player::{Side, SideMap};
use super::rng::{shuffle, GameRng};
use crate::cards::{Card, CardId, Row, RowMap, Weather};
use crate::power;

/// One seat's battlefield rows.
pub type Rows = RowMap<Vector<Card>>;

/// Per-seat card zones and round flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub side: Side,

    /// Drawn from the front.
    pub deck: Vector<Card>,

    /// Unordered bag; duplicate ids are legal.
    pub hand: Vector<Card>,

    pub discard: Vector<Card>,

    /// Tracked for match-level elimination; not consulted by the rules.
    pub lives_remaining: u8,

    /// Set when this seat passes; cleared when a new round starts.
    pub has_passed: bool,
}

impl PlayerState {
    fn new(side: Side, deck: Vec<Card>, lives: u8) -> Self {
        Self {
            side,
            deck: deck.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
            lives_remaining: lives,
            has_passed: false,
        }
    }

    /// Position of the first copy of `card_id` in hand.
    #[must_use]
    pub fn hand_position(&self, card_id: &CardId) -> Option<usize> {
        self.hand.iter().position(|c| &c.id == card_id)
    }

    /// Hand cards that can be played at all.
    pub fn playable_cards(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().filter(|c| c.is_playable())
    }

    /// Draw up to `count` cards from the front of the deck.
    ///
    /// Returns how many were drawn; an empty deck simply yields fewer.
    pub(crate) fn draw(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            match self.deck.pop_front() {
                Some(card) => {
                    self.hand.push_back(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }
}

/// Battlefield: each seat's rows plus per-row weather shared by both seats.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub rows: SideMap<Rows>,
    pub weather: RowMap<Weather>,
}

impl Board {
    /// A seat's row.
    #[must_use]
    pub fn row(&self, side: Side, row: Row) -> &Vector<Card> {
        &self.rows[side][row]
    }

    /// Every card a seat has on the board, close combat first.
    pub fn cards(&self, side: Side) -> impl Iterator<Item = &Card> {
        self.rows[side].values().flat_map(|row| row.iter())
    }

    /// Number of cards a seat has on the board.
    #[must_use]
    pub fn card_count(&self, side: Side) -> usize {
        self.rows[side].values().map(|row| row.len()).sum()
    }

    /// Total power of a seat under the current weather.
    #[must_use]
    pub fn side_power(&self, side: Side) -> u32 {
        power::side_power(&self.rows[side], &self.weather)
    }
}

/// Outcome of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub power: SideMap<u32>,
    /// `None` on a tie.
    pub winner: Option<Side>,
}

/// Complete match state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) config: MatchConfig,
    pub(crate) phase: Phase,
    pub(crate) round: u32,
    pub(crate) current_turn: Side,
    pub(crate) players: SideMap<PlayerState>,
    pub(crate) board: Board,
    pub(crate) round_wins: SideMap<u8>,
    pub(crate) winner: Option<Side>,
    pub(crate) selected_card: Option<CardId>,
    pub(crate) rounds: Vector<RoundSummary>,
    pub(crate) history: Vector<ActionRecord>,
}

impl MatchState {
    /// Create a match from two decks, shuffling each with the config seed.
    ///
    /// The state starts in `PreMatch`; call `rules::deal_initial_hands`
    /// before submitting actions.
    #[must_use]
    pub fn new(decks: SideMap<Vec<Card>>, config: MatchConfig) -> Self {
        let base = GameRng::new(config.seed);
        let mut player_rng = base.for_context("shuffle:player");
        let mut opponent_rng = base.for_context("shuffle:opponent");
        let SideMap { player, opponent } = decks;
        let shuffled = SideMap {
            player: shuffle(player, &mut player_rng),
            opponent: shuffle(opponent, &mut opponent_rng),
        };
        Self::with_ordered_decks(shuffled, config)
    }

    /// Create a match keeping the decks in the given order.
    #[must_use]
    pub fn with_ordered_decks(decks: SideMap<Vec<Card>>, config: MatchConfig) -> Self {
        let lives = config.starting_lives;
        let SideMap { player, opponent } = decks;
        Self {
            config,
            phase: Phase::PreMatch,
            round: 1,
            current_turn: Side::Player,
            players: SideMap {
                player: PlayerState::new(Side::Player, player, lives),
                opponent: PlayerState::new(Side::Opponent, opponent, lives),
            },
            board: Board::default(),
            round_wins: SideMap::with_value(0),
            winner: None,
            selected_card: None,
            rounds: Vector::new(),
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Seat whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &PlayerState {
        &self.players[side]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round_wins(&self) -> &SideMap<u8> {
        &self.round_wins
    }

    /// Match winner; `None` until the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::MatchEnd
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&CardId> {
        self.selected_card.as_ref()
    }

    /// Summaries of every resolved round, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<RoundSummary> {
        &self.rounds
    }

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Total power of a seat under the current weather.
    #[must_use]
    pub fn side_power(&self, side: Side) -> u32 {
        self.board.side_power(side)
    }

    /// Cards a seat owns across deck, hand, board and discard.
    #[must_use]
    pub fn card_count(&self, side: Side) -> usize {
        let p = &self.players[side];
        p.deck.len() + p.hand.len() + p.discard.len() + self.board.card_count(side)
    }

    pub(crate) fn record(&mut self, side: Side, action: Action) {
        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(side, action, self.round, sequence));
    }
}
