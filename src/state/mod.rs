//! Match and team state.
//!
//! ## Key Types
//!
//! - `MatchState`: Board, actors, teams, round/tick counters, RNG, winner
//! - `TeamState`: One side's master deck, piles, hand, play queue, and VP
//! - `Actor`: Hit points, position, statuses, facing
//! - `QueuedPlay`: A card with optional direction and target snapshot
//!
//! Actors and teams are keyed by `ActorId` in ordered maps, so iteration
//! (and with it scoring and refresh order) is deterministic.

pub mod actor;
pub mod match_state;
pub mod play;
pub mod team;

pub use actor::{Actor, Status};
pub use match_state::{MatchState, SIDES};
pub use play::QueuedPlay;
pub use team::TeamState;
