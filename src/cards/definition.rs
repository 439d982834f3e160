//! Card definitions.
//!
//! A `Card` is an immutable catalog entry handled by value: zones and rows
//! hold copies, and the engine never edits one. Effective power during a
//! round is computed by the power pipeline, not stored on the card.

use serde::{Deserialize, Serialize};

use super::attributes::{Ability, CardKind, Faction, Row};

/// Catalog identifier of a card (e.g. `"letho"`).
///
/// Several copies with the same id may sit in one hand.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use gwent_engine::cards::{Ability, Card, Faction, Row};
///
/// let rider = Card::unit("rider", "Cavalry Rider", Faction::Nilfgaard, 2, Row::CloseCombat)
///     .with_ability(Ability::TightBond);
///
/// assert!(rider.has_ability(Ability::TightBond));
/// assert!(rider.is_playable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub faction: Faction,
    pub kind: CardKind,
    /// Base power before any row modifiers.
    pub power: u32,
    /// Row affinity. Required for plain units.
    pub row: Option<Row>,
    pub ability: Option<Ability>,
    /// Heroes ignore weather.
    pub is_hero: bool,
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create a unit card bound to `row`.
    #[must_use]
    pub fn unit(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        power: u32,
        row: Row,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faction,
            kind: CardKind::Unit,
            power,
            row: Some(row),
            ability: None,
            is_hero: false,
            description: String::new(),
        }
    }

    /// Create a rowless spell card.
    #[must_use]
    pub fn spell(id: impl Into<CardId>, name: impl Into<String>, faction: Faction) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faction,
            kind: CardKind::Spell,
            power: 0,
            row: None,
            ability: None,
            is_hero: false,
            description: String::new(),
        }
    }

    /// Create a leader card.
    #[must_use]
    pub fn leader(id: impl Into<CardId>, name: impl Into<String>, faction: Faction) -> Self {
        Self {
            kind: CardKind::Leader,
            is_hero: true,
            ..Self::spell(id, name, faction)
        }
    }

    /// Attach an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Mark as hero (builder pattern).
    #[must_use]
    pub fn hero(mut self) -> Self {
        self.is_hero = true;
        self
    }

    /// Override the row affinity (builder pattern).
    #[must_use]
    pub fn with_row(mut self, row: Option<Row>) -> Self {
        self.row = row;
        self
    }

    /// Set the flavour text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.kind == CardKind::Unit
    }

    #[must_use]
    pub fn has_ability(&self, ability: Ability) -> bool {
        self.ability == Some(ability)
    }

    /// Whether the card can be played at all: a unit with a row, or a spell.
    ///
    /// Leaders and rowless units are never playable from hand.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        match self.kind {
            CardKind::Unit => self.row.is_some(),
            CardKind::Spell => true,
            CardKind::Leader => false,
        }
    }

    /// Row a play of this card targets when the caller has no preference.
    #[must_use]
    pub fn row_or(&self, fallback: Row) -> Row {
        self.row.unwrap_or(fallback)
    }
}
