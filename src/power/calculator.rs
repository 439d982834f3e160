//! Row power pipeline.
//!
//! Three stages, always in this order:
//!
//! 1. **Tight bond**: a tight-bond card's power is multiplied by the number
//!    of tight-bond cards with the same name in the row (itself included).
//! 2. **Moral boost**: if any moral-boost card is present, every unit in the
//!    row that is not a moral-boost card gains +1. Presence check only, so
//!    several boosters still grant +1 in total.
//! 3. **Weather**: when the row's weather is active, every non-hero card is
//!    clamped to exactly 1, overriding stages 1 and 2.
//!
//! The pipeline is pure and works on borrowed cards, so the AI evaluates
//! candidate boards with exactly the function that settles rounds.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{Ability, Card, Row, RowMap, Weather};

/// Effective power of each card in a row, in row order.
pub type PowerBreakdown = SmallVec<[u32; 16]>;

/// Effective power of every card in the row after all three stages.
#[must_use]
pub fn effective_powers<'a>(
    cards: impl IntoIterator<Item = &'a Card>,
    weather_active: bool,
) -> PowerBreakdown {
    let cards: SmallVec<[&Card; 16]> = cards.into_iter().collect();

    let mut bonds: FxHashMap<&str, u32> = FxHashMap::default();
    for card in cards.iter().filter(|c| c.has_ability(Ability::TightBond)) {
        *bonds.entry(card.name.as_str()).or_insert(0) += 1;
    }
    let boosted = cards.iter().any(|c| c.has_ability(Ability::MoralBoost));

    cards
        .iter()
        .map(|card| {
            if weather_active && !card.is_hero {
                return 1;
            }

            let mut power = card.power;
            if card.has_ability(Ability::TightBond) {
                power = power.saturating_mul(bonds.get(card.name.as_str()).copied().unwrap_or(1));
            }
            if boosted && card.is_unit() && !card.has_ability(Ability::MoralBoost) {
                power = power.saturating_add(1);
            }
            power
        })
        .collect()
}

/// Total power of one row.
///
/// ```
/// use gwent_engine::cards::{Card, Faction, Row};
/// use gwent_engine::power::row_power;
///
/// let hero = Card::unit("geralt", "Geralt", Faction::Nilfgaard, 15, Row::CloseCombat).hero();
/// let grunt = Card::unit("grunt", "Grunt", Faction::Nilfgaard, 6, Row::CloseCombat);
///
/// assert_eq!(row_power(&[hero.clone(), grunt.clone()], false), 21);
/// assert_eq!(row_power(&[hero, grunt], true), 16);
/// ```
#[must_use]
pub fn row_power<'a>(cards: impl IntoIterator<Item = &'a Card>, weather_active: bool) -> u32 {
    effective_powers(cards, weather_active)
        .iter()
        .fold(0, |total: u32, &power| total.saturating_add(power))
}

/// Total power of one side: each row under its own weather.
#[must_use]
pub fn side_power<R>(rows: &RowMap<R>, weather: &RowMap<Weather>) -> u32
where
    for<'a> &'a R: IntoIterator<Item = &'a Card>,
{
    Row::ALL
        .iter()
        .map(|&row| {
            let power = row_power(&rows[row], weather[row].is_active());
            log::trace!("row {} ({}): {}", row, weather[row], power);
            power
        })
        .fold(0, u32::saturating_add)
}

/// Cards a scorch would burn: those at the highest base power on the
/// board, excluding heroes.
///
/// The maximum is taken over all cards, heroes included, so a lone hero at
/// the top shields everything below it.
#[must_use]
pub fn strongest_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<&'a Card> {
    let cards: Vec<&Card> = cards.into_iter().collect();
    let Some(max) = cards.iter().map(|c| c.power).max() else {
        return Vec::new();
    };
    cards
        .into_iter()
        .filter(|c| c.power == max && !c.is_hero)
        .collect()
}
