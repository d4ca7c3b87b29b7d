//! Board model: tiles, occupancy, line of sight.
//!
//! ## Key Types
//!
//! - `Board`: fixed W x H grid with one nexus tile
//! - `Tile`: kind, occupant, hazard, and independent blocking flags
//! - `Neighbor`: orthogonal neighbor plus the step that reaches it

pub mod grid;
pub mod tile;

pub use grid::{Board, Neighbor};
pub use tile::{Hazard, HazardKind, Tile, TileKind};
