//! Closed card tags: faction, kind, row, ability, weather.
//!
//! Every tag the rules branch on is a sum type, so adding a variant makes
//! the compiler point at every `match` that has to learn about it.
//!
//! Tags parse from and print to the snake_case names the card catalog and
//! the presentation layer use (`"close_combat"`, `"tight_bond"`, ...).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// A string that is not a known tag name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} tag `{value}`")]
pub struct ParseTagError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_tags {
    ($ty:ident, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Catalog name of this tag.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ParseTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    _ => Err(ParseTagError { kind: $kind, value: s.to_string() }),
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Card faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Nilfgaard,
    NorthernRealms,
    ScoiaTael,
    Monsters,
    Skellige,
}

string_tags!(Faction, "faction", {
    Nilfgaard => "nilfgaard",
    NorthernRealms => "northern_realms",
    ScoiaTael => "scoia_tael",
    Monsters => "monsters",
    Skellige => "skellige",
});

/// What kind of card this is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Placed on a battlefield row and counted towards power.
    Unit,
    /// One-shot effect; never occupies a row.
    Spell,
    /// Faction leader. Carried as metadata only.
    Leader,
}

string_tags!(CardKind, "card kind", {
    Unit => "unit",
    Spell => "spell",
    Leader => "leader",
});

/// Battlefield lane. Each side owns one of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Row {
    CloseCombat,
    Ranged,
    Siege,
}

impl Row {
    /// All rows in board order.
    pub const ALL: [Row; 3] = [Row::CloseCombat, Row::Ranged, Row::Siege];
}

string_tags!(Row, "row", {
    CloseCombat => "close_combat",
    Ranged => "ranged",
    Siege => "siege",
});

/// Card ability tag.
///
/// Only tight bond, moral boost and scorch change the board. Spy and medic
/// steer the AI; the rest are metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Spy,
    Decoy,
    Medic,
    Scorch,
    Muster,
    MoralBoost,
    TightBond,
    Berserker,
    Transform,
}

string_tags!(Ability, "ability", {
    Spy => "spy",
    Decoy => "decoy",
    Medic => "medic",
    Scorch => "scorch",
    Muster => "muster",
    MoralBoost => "moral_boost",
    TightBond => "tight_bond",
    Berserker => "berserker",
    Transform => "transform",
});

/// Weather state of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    #[default]
    Clear,
    Frost,
    Fog,
    Rain,
}

impl Weather {
    /// Whether this weather clamps non-hero power.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Weather::Clear)
    }
}

string_tags!(Weather, "weather", {
    Clear => "clear",
    Frost => "frost",
    Fog => "fog",
    Rain => "rain",
});

/// One value per row, indexable by `Row`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowMap<T> {
    pub close_combat: T,
    pub ranged: T,
    pub siege: T,
}

impl<T> RowMap<T> {
    /// Iterate over (Row, &T) pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Row, &T)> {
        [
            (Row::CloseCombat, &self.close_combat),
            (Row::Ranged, &self.ranged),
            (Row::Siege, &self.siege),
        ]
        .into_iter()
    }

    /// Iterate over the values in board order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        [&self.close_combat, &self.ranged, &self.siege].into_iter()
    }
}

impl<T> Index<Row> for RowMap<T> {
    type Output = T;

    fn index(&self, row: Row) -> &Self::Output {
        match row {
            Row::CloseCombat => &self.close_combat,
            Row::Ranged => &self.ranged,
            Row::Siege => &self.siege,
        }
    }
}

impl<T> IndexMut<Row> for RowMap<T> {
    fn index_mut(&mut self, row: Row) -> &mut Self::Output {
        match row {
            Row::CloseCombat => &mut self.close_combat,
            Row::Ranged => &mut self.ranged,
            Row::Siege => &mut self.siege,
        }
    }
}
