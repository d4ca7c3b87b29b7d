//! Match-level rules that sit above tick resolution.
//!
//! Victory is a replaceable policy. The core never hardcodes who wins; it
//! asks a `VictoryPolicy`, and `MatchState::check_victory` uses the default
//! `EliminationOrNexus` with the configured threshold.

pub mod victory;

pub use victory::{EliminationOrNexus, VictoryPolicy};
