//! AI difficulty tiers and tuning parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::cards::ParseTagError;

/// Which strategy drives a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseTagError {
                kind: "difficulty",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probabilities and thresholds the strategies branch on.
///
/// Defaults are the standard AI behaviour; tests override single knobs with
/// the `with_*` builders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiTuning {
    /// Easy: chance of passing with playable cards in hand.
    pub easy_pass_chance: f64,

    /// Medium: power lead (exclusive) above which the AI may sit on it.
    pub protect_lead_margin: i64,

    /// Medium: chance of passing once `protect_lead_margin` is exceeded.
    pub protect_lead_chance: f64,

    /// Hard: power lead (exclusive) that justifies saving cards in round 2.
    pub save_cards_lead: i64,

    /// Hard: hand size (exclusive) that justifies saving cards in round 2.
    pub save_cards_hand: usize,

    /// Hard: chance of passing when saving cards applies.
    pub save_cards_chance: f64,

    /// Hard: largest hand size at which spies are still worth playing.
    pub spy_hand_limit: usize,

    /// Hard: minimum power of a discarded card worth a medic.
    pub medic_revive_power: u32,

    /// Hard: minimum power of an enemy card worth a scorch.
    pub scorch_threat_power: u32,

    /// Hard, round 3: deficit (exclusive) that forces the strongest card.
    pub final_push_deficit: i64,

    /// Hard, round 3: lead (exclusive) that allows the weakest card.
    pub final_minimal_lead: i64,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            easy_pass_chance: 0.3,
            protect_lead_margin: 15,
            protect_lead_chance: 0.6,
            save_cards_lead: 10,
            save_cards_hand: 5,
            save_cards_chance: 0.7,
            spy_hand_limit: 8,
            medic_revive_power: 6,
            scorch_threat_power: 8,
            final_push_deficit: 5,
            final_minimal_lead: 3,
        }
    }
}

impl AiTuning {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Easy tier's random pass chance.
    pub fn with_easy_pass_chance(mut self, chance: f64) -> Self {
        self.easy_pass_chance = chance;
        self
    }

    /// Set the Medium tier's lead-protection chance.
    pub fn with_protect_lead_chance(mut self, chance: f64) -> Self {
        self.protect_lead_chance = chance;
        self
    }

    /// Set the Hard tier's card-saving chance.
    pub fn with_save_cards_chance(mut self, chance: f64) -> Self {
        self.save_cards_chance = chance;
        self
    }
}
