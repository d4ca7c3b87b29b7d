//! Core engine types: actor ids, geometry, RNG, configuration.
//!
//! These are the leaf building blocks shared by the board, card, state, and
//! resolver modules.

pub mod config;
pub mod geometry;
pub mod ids;
pub mod rng;

pub use config::{ConfigError, MatchConfig, MatchMode, MAX_BOARD_SIDE};
pub use geometry::{Direction, Facing, Position};
pub use ids::{ActorId, ActorMap};
pub use rng::GameRng;
