//! Card system: tags, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Card` / `CardId`: immutable catalog entries, handled by value
//! - `Faction`, `CardKind`, `Row`, `Ability`, `Weather`: closed tags
//! - `RowMap`: one value per battlefield row
//! - `CardCatalog`: consumed interface for seeding decks
//! - `CardRegistry`: in-memory catalog

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::{Ability, CardKind, Faction, ParseTagError, Row, RowMap, Weather};
pub use definition::{Card, CardId};
pub use registry::{is_deck_valid, CardCatalog, CardRegistry, CatalogError};
