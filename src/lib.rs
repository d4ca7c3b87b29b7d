//! # nexus-tactics
//!
//! Rules engine for a two-sided, tile-based tactical card battler.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every match owns one seeded RNG, and only deck
//!    shuffles draw from it. Tick resolution is a pure function of state
//!    and plays.
//!
//! 2. **Simultaneous, not sequential**: Both sides' plays resolve in lockstep.
//!    Within one step both destinations are computed before either actor
//!    moves; identical destinations cancel.
//!
//! 3. **Forgiving core**: Invalid moves, odd directions, and out-of-range
//!    indices are ignored rather than rejected. Refusals that a player should
//!    see come from the session layer as typed errors.
//!
//! ## Architecture
//!
//! - **Value-type match state**: `MatchState` methods and the resolver are
//!   the only mutation surface. Observers read reports and snapshots.
//!
//! - **Actor-keyed maps**: Actors and teams live in ordered maps keyed by
//!   `ActorId`; the two-sided victory rule is a replaceable policy.
//!
//! ## Modules
//!
//! - `core`: Actor ids, geometry, RNG, configuration
//! - `board`: Grid, tiles, occupancy, line of sight
//! - `cards`: Card definitions, the Fighter catalog, decks
//! - `state`: Actors, teams, queued plays, match state
//! - `rules`: Victory policies
//! - `resolve`: Simultaneous tick resolution and reports
//! - `session`: Match driver and snapshots
//!
//! ## Example
//!
//! ```
//! use nexus_tactics::{ActorId, Direction, MatchMode, MatchSession};
//!
//! let mut session = MatchSession::new(MatchMode::SingleCard);
//! session.start();
//! session.play_from_hand(ActorId::A, 0, Some(Direction::UP), None).unwrap();
//! session.play_from_hand(ActorId::B, 0, Some(Direction::DOWN), None).unwrap();
//!
//! let outcome = session.advance().unwrap();
//! assert!(outcome.report.resolved);
//! assert_eq!(session.state().actor(ActorId::A).unwrap().hp, 9);
//! ```

pub mod core;
pub mod board;
pub mod cards;
pub mod state;
pub mod rules;
pub mod resolve;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ActorId, ActorMap,
    Position, Direction, Facing,
    GameRng,
    MatchConfig, MatchMode, ConfigError,
};

pub use crate::board::{Board, Tile, TileKind, Hazard, HazardKind};

pub use crate::cards::{
    Card, CardId, CardCatalog,
    build_starter_deck, draw_to, shuffle,
};

pub use crate::state::{Actor, Status, TeamState, QueuedPlay, MatchState};

pub use crate::rules::{VictoryPolicy, EliminationOrNexus};

pub use crate::resolve::{resolve_one_tick, TickReport, TickRecord, ActorOutcome};

pub use crate::session::{
    MatchSession, SessionPhase, SessionError, AdvanceOutcome,
    MatchSnapshot, SnapshotError,
};
