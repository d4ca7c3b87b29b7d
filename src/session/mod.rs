//! Session layer: drives a match and exposes it to observers.
//!
//! ## Key Types
//!
//! - `MatchSession`: Queue limits, dequeue-and-resolve, round rollover, victory latch
//! - `MatchSnapshot`: RNG-free plain data, encodable as JSON or bincode

pub mod driver;
pub mod snapshot;

pub use driver::{AdvanceOutcome, MatchSession, SessionError, SessionPhase};
pub use snapshot::{MatchSnapshot, SnapshotError};
