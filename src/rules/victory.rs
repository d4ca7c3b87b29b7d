//! Victory policies.
//!
//! A `VictoryPolicy` inspects a match and names the winning side, if any.
//! The default policy is two-sided elimination followed by nexus scoring.

use crate::core::ActorId;
use crate::state::MatchState;

/// Decides whether a match is over.
///
/// ## Implementation Notes
///
/// - Must be a pure function of the state: the session calls it after every
///   resolved tick, and previews call it on branches
/// - Return `None` while the match continues
pub trait VictoryPolicy {
    fn winner(&self, state: &MatchState) -> Option<ActorId>;
}

/// Elimination first, then nexus victory points.
///
/// If any actor is down (hp ≤ 0) the first other side in id order wins.
/// Actors are checked in id order, so when both fall on the same tick `A`
/// is treated as the loser. Otherwise the first team holding at least
/// `vp_to_win` points wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EliminationOrNexus {
    pub vp_to_win: u32,
}

impl EliminationOrNexus {
    #[must_use]
    pub fn new(vp_to_win: u32) -> Self {
        Self { vp_to_win }
    }
}

impl Default for EliminationOrNexus {
    fn default() -> Self {
        Self::new(3)
    }
}

impl VictoryPolicy for EliminationOrNexus {
    fn winner(&self, state: &MatchState) -> Option<ActorId> {
        if let Some(fallen) = state.actors().values().find(|a| !a.is_alive()) {
            return state.actors().ids().find(|&id| id != fallen.id);
        }

        state
            .teams()
            .iter()
            .find(|(_, team)| team.vp >= self.vp_to_win)
            .map(|(id, _)| id)
    }
}
