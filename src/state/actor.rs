//! Actors standing on the board.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActorId, Facing, Position};

/// A timed status effect.
///
/// Statuses are carried on actors but nothing in tick resolution consumes
/// them yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i32>,

    /// Last tick on which the status is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_on_tick: Option<u32>,
}

impl Status {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            expires_on_tick: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn until_tick(mut self, tick: u32) -> Self {
        self.expires_on_tick = Some(tick);
        self
    }

    /// Whether the status has run out by `tick`.
    #[must_use]
    pub fn is_expired(&self, tick: u32) -> bool {
        self.expires_on_tick.is_some_and(|t| t < tick)
    }
}

/// A combatant.
///
/// While an actor is alive and placed, the board tile at `pos` names it as
/// occupant. `MatchState` and the resolver maintain that.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,

    /// Owning team. Each actor currently fields its own team.
    pub team: ActorId,

    pub hp: i32,
    pub max_hp: i32,
    pub pos: Position,

    pub statuses: SmallVec<[Status; 4]>,

    /// Direction of the last movement, for presentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Facing>,
}

impl Actor {
    /// Create an actor at full health on its own team.
    #[must_use]
    pub fn new(id: ActorId, pos: Position, hp: i32) -> Self {
        Self {
            id,
            team: id,
            hp,
            max_hp: hp,
            pos,
            statuses: SmallVec::new(),
            facing: None,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn add_status(&mut self, status: Status) {
        self.statuses.push(status);
    }

    #[must_use]
    pub fn has_status(&self, name: &str) -> bool {
        self.statuses.iter().any(|s| s.name == name)
    }

    /// Drop statuses that ran out before `tick`. Returns how many were removed.
    pub fn expire_statuses(&mut self, tick: u32) -> usize {
        let before = self.statuses.len();
        self.statuses.retain(|s| !s.is_expired(tick));
        before - self.statuses.len()
    }
}
