//! Queued plays: one actor's committed intent for a future tick.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{Direction, Position};

/// A card plus its optional aim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedPlay {
    pub card: Card,

    /// Unit step, normally one of the four cardinals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<Direction>,

    /// Target tile captured when the play was queued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Position>,
}

impl QueuedPlay {
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            dir: None,
            target: None,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, dir: Direction) -> Self {
        self.dir = Some(dir);
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }

    /// Tile steps this play attempts.
    ///
    /// A declared movement count wins (negative counts clamp to zero). A bare
    /// direction means one step. Otherwise the play does not move.
    #[must_use]
    pub fn steps(&self) -> u32 {
        match self.card.movement_tiles() {
            Some(tiles) => tiles.max(0) as u32,
            None if self.dir.is_some() => 1,
            None => 0,
        }
    }
}
