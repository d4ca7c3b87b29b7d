//! Tick resolution.
//!
//! ## Key Types
//!
//! - `resolve_one_tick`: Apply one play per side to a `MatchState`
//! - `TickReport`: Per-actor movement, collision, and damage outcome
//! - `TickRecord`: A report stamped with round and tick, kept in match history

pub mod report;
pub mod tick;

pub use report::{ActorOutcome, TickRecord, TickReport};
pub use tick::{resolve_one_tick, EXCHANGE_DAMAGE};
