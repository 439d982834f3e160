//! Seat identification and per-seat data storage.
//!
//! ## Side
//!
//! A match always has exactly two seats: the human `Player` and the
//! `Opponent`. Either seat may be driven by the AI; the engine does not care.
//!
//! ## SideMap
//!
//! Per-seat storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Both seats, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-seat data storage.
///
/// Serializes as `{ "player": .., "opponent": .. }`, matching how scores
/// are reported to the presentation layer.
///
/// ## Example
///
/// ```
/// use gwent_engine::core::{Side, SideMap};
///
/// let mut wins: SideMap<u8> = SideMap::with_value(0);
/// wins[Side::Opponent] += 1;
///
/// assert_eq!(wins[Side::Player], 0);
/// assert_eq!(wins[Side::Opponent], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub player: T,
    pub opponent: T,
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            player: factory(Side::Player),
            opponent: factory(Side::Opponent),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            opponent: value,
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Opponent, &self.opponent)].into_iter()
    }

    /// Apply a function to both entries.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> SideMap<U> {
        SideMap {
            player: f(&self.player),
            opponent: f(&self.opponent),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_other() {
        assert_eq!(Side::Player.other(), Side::Opponent);
        assert_eq!(Side::Opponent.other(), Side::Player);
        assert_eq!(Side::Player.other().other(), Side::Player);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Opponent), "opponent");
    }

    #[test]
    fn test_side_map_new() {
        let map: SideMap<usize> = SideMap::new(|s| if s == Side::Player { 0 } else { 10 });

        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Opponent], 10);
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map: SideMap<i32> = SideMap::with_value(0);

        map[Side::Player] = 20;
        map[Side::Opponent] = 15;

        assert_eq!(map.player, 20);
        assert_eq!(map.opponent, 15);
    }

    #[test]
    fn test_side_map_iter_and_map() {
        let map: SideMap<i32> = SideMap::new(|s| match s {
            Side::Player => 1,
            Side::Opponent => 2,
        });

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &1), (Side::Opponent, &2)]);

        let doubled = map.map(|v| v * 2);
        assert_eq!(doubled, SideMap { player: 2, opponent: 4 });
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap { player: 2u8, opponent: 1u8 };
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"player":2,"opponent":1}"#);

        let deserialized: SideMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
