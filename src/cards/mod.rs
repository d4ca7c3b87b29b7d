//! Card system: definitions, the Fighter catalog, and deck lifecycle.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card definition (usage, aim, attack, movement, effects)
//! - `CardId`: String identifier, unique within a catalog
//! - `CardCatalog`: Ordered definitions with id lookup
//!
//! Decks, draw piles, and hands are plain `Vec<Card>`; see [`deck`].

pub mod catalog;
pub mod deck;
pub mod definition;

pub use catalog::{fighter_cards, CardCatalog, FILLER_CARD};
pub use deck::{build_deck, build_starter_deck, draw_to, shuffle, STARTER_DECK_SIZE};
pub use definition::{
    ActionType, AimMode, AttackProfile, Card, CardClass, CardId, CardType, Damage, Defense,
    Effect, MissPolicy, MoveDirection, MovementSpec, Usage, ZoneShape, ZoneSpec,
};
