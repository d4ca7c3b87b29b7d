//! A single board cell.

use serde::{Deserialize, Serialize};

use crate::core::{ActorId, Position};

/// What a tile is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    Floor,
    Wall,
    Nexus,
    Hazard,
}

/// Kind of lingering hazard on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    Fire,
    Smoke,
    Holy,
    Spikes,
}

/// A hazard and the tick on which it stops applying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    pub expires_on_tick: u32,
}

/// One board cell.
///
/// Movement and line-of-sight blocking are independent flags: smoke may block
/// sight without blocking movement, a pit the reverse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub pos: Position,
    pub kind: TileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupant: Option<ActorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazard: Option<Hazard>,
    pub blocks_los: bool,
    pub blocks_movement: bool,
}

impl Tile {
    /// An empty, open floor tile.
    #[must_use]
    pub fn floor(pos: Position) -> Self {
        Self {
            pos,
            kind: TileKind::Floor,
            occupant: None,
            hazard: None,
            blocks_los: false,
            blocks_movement: false,
        }
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    #[must_use]
    pub fn is_nexus(&self) -> bool {
        self.kind == TileKind::Nexus
    }
}
