//! Plain-data view of a match for observers and relays.
//!
//! A snapshot carries everything an observer needs to redraw the match and
//! nothing it should not see: the RNG is left out, and absent optional values
//! (occupants, hazards, facing, play aims) are omitted rather than written as
//! nulls. The winner is the exception; it is always present so "undecided"
//! stays explicit.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::board::Board;
use crate::core::{ActorId, ActorMap, MatchMode};
use crate::state::{Actor, MatchState, TeamState};

/// Snapshot encoding failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("snapshot did not encode to an object")]
    NotAnObject,
}

/// Serializable copy of a `MatchState`, minus the RNG and history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub mode: MatchMode,
    pub board: Board,
    pub actors: ActorMap<Actor>,
    pub teams: ActorMap<TeamState>,
    pub round: u32,
    pub tick: u32,
    pub hand_max: usize,
    pub winner: Option<ActorId>,
}

impl MatchSnapshot {
    /// Copy the observable parts of `state`.
    #[must_use]
    pub fn capture(state: &MatchState) -> Self {
        Self {
            mode: state.mode(),
            board: state.board().clone(),
            actors: state.actors().clone(),
            teams: state.teams().clone(),
            round: state.round(),
            tick: state.tick(),
            hand_max: state.hand_max(),
            winner: state.winner(),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary encoding for relays.
    ///
    /// Encode-only: omitted optional fields make the stream unreadable by a
    /// positional decoder, so round-trips go through JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// A subset of top-level fields, for patch-style updates.
    ///
    /// Unknown field names are skipped.
    pub fn partial(&self, fields: &[&str]) -> Result<Map<String, Value>, SnapshotError> {
        let Value::Object(mut all) = serde_json::to_value(self)? else {
            return Err(SnapshotError::NotAnObject);
        };
        Ok(fields
            .iter()
            .filter_map(|&name| all.remove(name).map(|v| (name.to_owned(), v)))
            .collect())
    }
}

impl From<&MatchState> for MatchSnapshot {
    fn from(state: &MatchState) -> Self {
        Self::capture(state)
    }
}
