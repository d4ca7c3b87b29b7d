//! What a resolved tick did.
//!
//! Resolution mutates `MatchState` in place and hands back a `TickReport`
//! so observers can animate or relay the tick without diffing states.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ActorId, Position};

/// One actor's part in a tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorOutcome {
    pub actor: ActorId,

    /// Whether the actor had a play this tick.
    pub played: bool,

    pub start: Position,
    pub end: Position,

    pub steps_planned: u32,
    pub steps_taken: u32,

    /// Steps refused for bounds, blocking terrain, or an occupied tile.
    pub steps_blocked: u32,

    /// Steps cancelled because both actors aimed at the same tile.
    pub collisions: u32,

    pub damage_taken: i32,
}

impl ActorOutcome {
    pub(crate) fn new(actor: ActorId, start: Position, played: bool, steps_planned: u32) -> Self {
        Self {
            actor,
            played,
            start,
            end: start,
            steps_planned,
            steps_taken: 0,
            steps_blocked: 0,
            collisions: 0,
            damage_taken: 0,
        }
    }

    #[must_use]
    pub fn moved(&self) -> bool {
        self.start != self.end
    }
}

/// Result of one call to the resolver.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// False when neither side had a play and nothing happened.
    pub resolved: bool,

    /// Lockstep iterations run.
    pub iterations: u32,

    pub outcomes: SmallVec<[ActorOutcome; 2]>,
}

impl TickReport {
    /// Report for a tick with no plays.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn outcome(&self, actor: ActorId) -> Option<&ActorOutcome> {
        self.outcomes.iter().find(|o| o.actor == actor)
    }

    /// Cancelled iterations this tick. Every collision is charged to both
    /// actors, so this is the larger of their counts.
    #[must_use]
    pub fn collisions(&self) -> u32 {
        self.outcomes.iter().map(|o| o.collisions).max().unwrap_or(0)
    }
}

/// A report stamped with when it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub round: u32,
    pub tick: u32,
    pub report: TickReport,
}
