//! Card catalog.
//!
//! The engine consumes cards through the `CardCatalog` trait so the static
//! card content can live anywhere. `CardRegistry` is the in-memory
//! implementation: it validates entries on registration and hands out
//! cards by value.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::attributes::{CardKind, Faction};
use super::definition::{Card, CardId};

/// Minimum deck size for a legal deck.
pub const MIN_DECK_SIZE: usize = 22;

/// Minimum number of unit cards in a legal deck.
pub const MIN_DECK_UNITS: usize = 15;

/// Invalid catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("card `{0}` is already registered")]
    DuplicateId(CardId),
    #[error("unit card `{0}` has neither a row nor an ability")]
    UnitWithoutRow(CardId),
}

/// Source of card definitions for seeding matches.
pub trait CardCatalog {
    /// Every card in the catalog, in registration order.
    fn list_cards(&self) -> Vec<Card>;

    /// The deck a faction brings to a match, unshuffled.
    fn deck_for(&self, faction: Faction) -> Vec<Card>;
}

/// In-memory card catalog.
///
/// ## Example
///
/// ```
/// use gwent_engine::cards::{Card, CardCatalog, CardRegistry, Faction, Row};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(Card::unit("cynthia", "Cynthia", Faction::Nilfgaard, 4, Row::CloseCombat))
///     .unwrap();
///
/// assert_eq!(registry.deck_for(Faction::Nilfgaard).len(), 1);
/// assert!(registry.deck_for(Faction::Monsters).is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    order: Vec<CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of cards, stopping at the first bad entry.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card definition.
    pub fn register(&mut self, card: Card) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateId(card.id));
        }
        if card.kind == CardKind::Unit && card.row.is_none() && card.ability.is_none() {
            return Err(CatalogError::UnitWithoutRow(card.id));
        }
        self.order.push(card.id.clone());
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.iter().filter(move |c| predicate(c))
    }
}

impl CardCatalog for CardRegistry {
    fn list_cards(&self) -> Vec<Card> {
        self.iter().cloned().collect()
    }

    fn deck_for(&self, faction: Faction) -> Vec<Card> {
        self.find(|c| c.faction == faction && c.kind != CardKind::Leader)
            .cloned()
            .collect()
    }
}

/// Deck construction check: at least 22 cards, at least 15 of them units.
///
/// The engine never enforces this; it is offered to deck-building callers.
#[must_use]
pub fn is_deck_valid(deck: &[Card]) -> bool {
    let units = deck.iter().filter(|c| c.is_unit()).count();
    deck.len() >= MIN_DECK_SIZE && units >= MIN_DECK_UNITS
}
