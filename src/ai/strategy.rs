//! Decision strategies for the three AI tiers.
//!
//! A strategy reads a `Situation` (the acting side's hand plus the full
//! board, both sides visible) and recommends one `Action`. Strategies never
//! touch the match state; the caller submits the recommendation through
//! the dispatcher like any other action.
//!
//! Every random branch draws from the `RandomSource` handed in, and only
//! when its precondition holds, so a scripted source sees exactly the coin
//! flips the decision depended on.

use serde::{Deserialize, Serialize};

use crate::cards::{Ability, Card, Row};
use crate::core::{Action, MatchState, RandomSource, Side};

use super::config::AiTuning;
use super::scoring;

// =============================================================================
// Recommendation
// =============================================================================

/// Why a strategy chose its action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rationale {
    NoPlayableCards,
    RandomPass,
    RandomPlay,
    ProtectLead,
    EarlySpy,
    CatchUp,
    MidTierPick,
    SaveForDecider,
    SpyForCardAdvantage,
    MedicRevive,
    ScorchThreat,
    FinalRoundPush,
    FinalRoundMinimal,
    BestScore,
}

impl std::fmt::Display for Rationale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Rationale::NoPlayableCards => "no playable cards",
            Rationale::RandomPass => "random pass",
            Rationale::RandomPlay => "random play",
            Rationale::ProtectLead => "protecting a comfortable lead",
            Rationale::EarlySpy => "spy for card advantage",
            Rationale::CatchUp => "strongest card while behind",
            Rationale::MidTierPick => "mid-tier pick",
            Rationale::SaveForDecider => "saving cards for the final round",
            Rationale::SpyForCardAdvantage => "spy while the hand is small",
            Rationale::MedicRevive => "medic with a strong card in discard",
            Rationale::ScorchThreat => "scorch against a strong enemy card",
            Rationale::FinalRoundPush => "final round, strongest card",
            Rationale::FinalRoundMinimal => "final round, minimal play",
            Rationale::BestScore => "highest scoring card",
        };
        f.write_str(text)
    }
}

/// A recommended action and the reason for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation {
    pub action: Action,
    pub rationale: Rationale,
}

impl Recommendation {
    #[must_use]
    pub fn pass(rationale: Rationale) -> Self {
        Self {
            action: Action::Pass,
            rationale,
        }
    }

    /// Play `card` into its affinity row, or `fallback` when it has none.
    #[must_use]
    pub fn play(card: &Card, fallback: Row, rationale: Rationale) -> Self {
        Self {
            action: Action::play(card.id.clone(), card.row_or(fallback)),
            rationale,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.action.is_pass()
    }
}

// =============================================================================
// Situation
// =============================================================================

/// What a strategy sees when deciding for `side`.
#[derive(Clone, Debug)]
pub struct Situation<'a> {
    pub side: Side,
    pub round: u32,
    /// Playable hand cards, in hand order.
    pub playable: Vec<&'a Card>,
    /// Whole hand size, playable or not.
    pub hand_size: usize,
    pub own_power: u32,
    pub other_power: u32,
    pub own_wins: u8,
    pub other_wins: u8,
    pub own_discard: Vec<&'a Card>,
    pub other_board: Vec<&'a Card>,
}

impl<'a> Situation<'a> {
    /// Read the situation for `side` out of a match.
    #[must_use]
    pub fn read(state: &'a MatchState, side: Side) -> Self {
        let player = state.player(side);
        let other = side.other();
        Self {
            side,
            round: state.round(),
            playable: player.playable_cards().collect(),
            hand_size: player.hand.len(),
            own_power: state.side_power(side),
            other_power: state.side_power(other),
            own_wins: state.round_wins()[side],
            other_wins: state.round_wins()[other],
            own_discard: player.discard.iter().collect(),
            other_board: state.board().cards(other).collect(),
        }
    }

    /// Own power minus the other side's.
    #[must_use]
    pub fn power_lead(&self) -> i64 {
        i64::from(self.own_power) - i64::from(self.other_power)
    }

    /// First playable card carrying `ability`.
    #[must_use]
    pub fn first_with(&self, ability: Ability) -> Option<&'a Card> {
        self.playable.iter().copied().find(|c| c.has_ability(ability))
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// A decision policy for one AI tier.
pub trait Strategy: Send + Sync {
    /// Recommend an action. Read-only; never fails.
    fn decide(&self, situation: &Situation<'_>, rng: &mut dyn RandomSource) -> Recommendation;
}

/// Random play with an occasional random pass.
#[derive(Clone, Debug, Default)]
pub struct EasyStrategy {
    pub tuning: AiTuning,
}

impl Strategy for EasyStrategy {
    fn decide(&self, situation: &Situation<'_>, rng: &mut dyn RandomSource) -> Recommendation {
        if situation.playable.is_empty() {
            return Recommendation::pass(Rationale::NoPlayableCards);
        }
        if rng.chance(self.tuning.easy_pass_chance) {
            return Recommendation::pass(Rationale::RandomPass);
        }

        let index = rng.index(situation.playable.len()).min(situation.playable.len() - 1);
        Recommendation::play(situation.playable[index], Row::CloseCombat, Rationale::RandomPlay)
    }
}

/// Power-aware play: protect big leads, catch up when behind, otherwise
/// commit a mid-tier card.
#[derive(Clone, Debug, Default)]
pub struct MediumStrategy {
    pub tuning: AiTuning,
}

impl Strategy for MediumStrategy {
    fn decide(&self, situation: &Situation<'_>, rng: &mut dyn RandomSource) -> Recommendation {
        if situation.playable.is_empty() {
            return Recommendation::pass(Rationale::NoPlayableCards);
        }

        if situation.round > 1
            && situation.power_lead() > self.tuning.protect_lead_margin
            && rng.chance(self.tuning.protect_lead_chance)
        {
            return Recommendation::pass(Rationale::ProtectLead);
        }

        if situation.round == 1 {
            if let Some(spy) = situation.first_with(Ability::Spy) {
                return Recommendation::play(spy, Row::CloseCombat, Rationale::EarlySpy);
            }
        }

        if situation.other_power > situation.own_power {
            if let Some(card) = scoring::strongest(situation.playable.iter().copied()) {
                return Recommendation::play(card, Row::CloseCombat, Rationale::CatchUp);
            }
        }

        let ranked = scoring::sort_by_priority(situation.playable.iter().copied());
        let card = ranked[ranked.len() / 3];
        Recommendation::play(card, Row::CloseCombat, Rationale::MidTierPick)
    }
}

/// Resource-aware play: saves cards when a round is already banked, uses
/// spies, medics and scorch situationally, and manages the final round.
#[derive(Clone, Debug, Default)]
pub struct HardStrategy {
    pub tuning: AiTuning,
}

impl HardStrategy {
    fn should_save_cards(&self, situation: &Situation<'_>, rng: &mut dyn RandomSource) -> bool {
        situation.own_wins > situation.other_wins
            && situation.round == 2
            && (situation.power_lead() > self.tuning.save_cards_lead
                || situation.hand_size > self.tuning.save_cards_hand)
            && rng.chance(self.tuning.save_cards_chance)
    }

    fn revive_worthy(&self, situation: &Situation<'_>) -> bool {
        situation
            .own_discard
            .iter()
            .any(|c| !c.is_hero && c.power >= self.tuning.medic_revive_power)
    }

    fn scorch_worthy(&self, situation: &Situation<'_>) -> bool {
        scoring::strongest(situation.other_board.iter().copied())
            .is_some_and(|c| !c.is_hero && c.power >= self.tuning.scorch_threat_power)
    }
}

impl Strategy for HardStrategy {
    fn decide(&self, situation: &Situation<'_>, rng: &mut dyn RandomSource) -> Recommendation {
        if situation.playable.is_empty() {
            return Recommendation::pass(Rationale::NoPlayableCards);
        }

        if self.should_save_cards(situation, rng) {
            return Recommendation::pass(Rationale::SaveForDecider);
        }

        if situation.round <= 2 && situation.hand_size <= self.tuning.spy_hand_limit {
            if let Some(spy) = situation.first_with(Ability::Spy) {
                return Recommendation::play(spy, Row::CloseCombat, Rationale::SpyForCardAdvantage);
            }
        }

        if let Some(medic) = situation.first_with(Ability::Medic) {
            if self.revive_worthy(situation) {
                return Recommendation::play(medic, Row::Siege, Rationale::MedicRevive);
            }
        }

        if let Some(scorch) = situation.first_with(Ability::Scorch) {
            if self.scorch_worthy(situation) {
                return Recommendation::play(scorch, Row::Siege, Rationale::ScorchThreat);
            }
        }

        if situation.round == 3 {
            let lead = situation.power_lead();
            if lead < -self.tuning.final_push_deficit {
                if let Some(card) = scoring::strongest(situation.playable.iter().copied()) {
                    return Recommendation::play(card, Row::CloseCombat, Rationale::FinalRoundPush);
                }
            } else if lead > self.tuning.final_minimal_lead {
                if let Some(card) = scoring::weakest_viable(&situation.playable) {
                    return Recommendation::play(card, Row::CloseCombat, Rationale::FinalRoundMinimal);
                }
            }
        }

        let behind = situation.other_wins > situation.own_wins;
        match scoring::best_scored(&situation.playable, situation.round, behind) {
            Some(card) => Recommendation::play(card, Row::CloseCombat, Rationale::BestScore),
            None => Recommendation::pass(Rationale::NoPlayableCards),
        }
    }
}
