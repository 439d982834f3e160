//! Card ranking helpers shared by the strategies.
//!
//! All pickers return the *first* card among equals, in the order given, so
//! decisions depend only on hand order and never on sort instability.

use std::cmp::Reverse;

use crate::cards::{Ability, Card};

/// Coarse importance of a card: hero 5, spy/medic 4, scorch 3, then by
/// power (8+ is 3, 5+ is 2, anything else 1).
#[must_use]
pub fn card_priority(card: &Card) -> u8 {
    if card.is_hero {
        return 5;
    }
    match card.ability {
        Some(Ability::Spy | Ability::Medic) => 4,
        Some(Ability::Scorch) => 3,
        _ if card.power >= 8 => 3,
        _ if card.power >= 5 => 2,
        _ => 1,
    }
}

/// Cards by descending priority; equal priorities keep their order.
#[must_use]
pub fn sort_by_priority<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<&'a Card> {
    let mut sorted: Vec<&Card> = cards.into_iter().collect();
    sorted.sort_by_key(|card| Reverse(card_priority(card)));
    sorted
}

/// Hard-tier desirability of playing `card` now.
///
/// Base power plus ability and hero bonuses, a spy bonus in round 1, a
/// power bonus in round 3, and another power bonus when behind on rounds.
#[must_use]
pub fn hard_score(card: &Card, round: u32, behind_on_rounds: bool) -> f64 {
    let power = f64::from(card.power);
    let mut score = power;

    score += match card.ability {
        Some(Ability::Spy) => 20.0,
        Some(Ability::Medic) => 15.0,
        Some(Ability::Scorch) => 10.0,
        _ => 0.0,
    };
    if card.is_hero {
        score += 25.0;
    }

    if round == 1 && card.has_ability(Ability::Spy) {
        score += 10.0;
    } else if round == 3 {
        score += power * 0.5;
    }
    if behind_on_rounds {
        score += power * 0.3;
    }
    score
}

/// First card with the highest base power.
#[must_use]
pub fn strongest<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Option<&'a Card> {
    cards
        .into_iter()
        .fold(None, |best: Option<&Card>, card| match best {
            Some(b) if card.power <= b.power => Some(b),
            _ => Some(card),
        })
}

/// First non-spy card with the lowest base power.
///
/// Falls back to the first card when every card is a spy.
#[must_use]
pub fn weakest_viable<'a>(cards: &[&'a Card]) -> Option<&'a Card> {
    let weakest = cards
        .iter()
        .copied()
        .filter(|c| !c.has_ability(Ability::Spy))
        .fold(None, |best: Option<&Card>, card| match best {
            Some(b) if card.power >= b.power => Some(b),
            _ => Some(card),
        });
    weakest.or_else(|| cards.first().copied())
}

/// First card with the highest `hard_score`.
#[must_use]
pub fn best_scored<'a>(cards: &[&'a Card], round: u32, behind_on_rounds: bool) -> Option<&'a Card> {
    let mut best: Option<(&Card, f64)> = None;
    for &card in cards {
        let score = hard_score(card, round, behind_on_rounds);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((card, score)),
        }
    }
    best.map(|(card, _)| card)
}
