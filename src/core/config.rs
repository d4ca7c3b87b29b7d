//! Match configuration.
//!
//! A match is configured at creation by providing:
//! - `MatchMode`: Queue3 (batches of queued plays per round) or SingleCard
//! - `MatchConfig`: board geometry, starting layout, hand/deck sizes,
//!   scoring threshold, and the RNG seed
//!
//! `MatchConfig::default()` reproduces the classic layout: a 12x12 board with
//! the nexus at (4,4) and the two sides starting symmetrically at (2,4) and
//! (6,4).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Position;
use super::ids::ActorId;

/// Largest accepted board width or height.
pub const MAX_BOARD_SIDE: u32 = 1024;

/// How plays are batched into ticks and rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Each side pre-queues up to three plays; a round spans three ticks and
    /// ends with nexus scoring and a hand refresh.
    Queue3,
    /// One play per tick; hands are topped up after every tick and rounds
    /// never end.
    SingleCard,
}

impl MatchMode {
    /// Maximum number of queued plays per side.
    #[must_use]
    pub const fn queue_limit(self) -> usize {
        match self {
            MatchMode::Queue3 => 3,
            MatchMode::SingleCard => 1,
        }
    }

    /// Whether this mode has round boundaries.
    #[must_use]
    pub const fn has_rounds(self) -> bool {
        matches!(self, MatchMode::Queue3)
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Queue3 => write!(f, "Queue3"),
            MatchMode::SingleCard => write!(f, "SingleCard"),
        }
    }
}

/// Reasons a `MatchConfig` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("board dimensions {width}x{height} exceed the {max}-tile side limit")]
    BoardTooLarge { width: u32, height: u32, max: u32 },

    #[error("nexus {0} lies outside the board")]
    NexusOutOfBounds(Position),

    #[error("start tile {1} for actor {0} lies outside the board")]
    StartOutOfBounds(ActorId, Position),

    #[error("both actors start on {0}")]
    SharedStart(Position),

    #[error("hand maximum must be at least 1")]
    ZeroHandMax,

    #[error("deck size must be at least 1")]
    ZeroDeckSize,

    #[error("starting hit points must be positive, got {0}")]
    NonPositiveHp(i32),

    #[error("ticks per round must be at least 1")]
    ZeroTicksPerRound,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Board width in tiles.
    pub board_width: u32,

    /// Board height in tiles.
    pub board_height: u32,

    /// The single scoring tile.
    pub nexus: Position,

    /// Starting tile of the first side (`A`).
    pub start_a: Position,

    /// Starting tile of the second side (`B`).
    pub start_b: Position,

    /// Starting (and maximum) hit points of each actor.
    pub starting_hp: i32,

    /// Hand size targeted by draws and round refreshes.
    pub hand_max: usize,

    /// Cards dealt at setup, straight from the master deck.
    pub initial_hand: usize,

    /// Starter deck size after padding.
    pub deck_size: usize,

    /// Victory points needed to win by nexus control.
    pub vp_to_win: u32,

    /// Ticks in one Queue3 round.
    pub ticks_per_round: u32,

    /// Seed for the match RNG.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_width: 12,
            board_height: 12,
            nexus: Position::new(4, 4),
            start_a: Position::new(2, 4),
            start_b: Position::new(6, 4),
            starting_hp: 10,
            hand_max: 7,
            initial_hand: 7,
            deck_size: 30,
            vp_to_win: 3,
            ticks_per_round: 3,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the board size.
    #[must_use]
    pub fn with_board(mut self, width: u32, height: u32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    /// Set the nexus tile.
    #[must_use]
    pub fn with_nexus(mut self, nexus: Position) -> Self {
        self.nexus = nexus;
        self
    }

    /// Set both starting tiles.
    #[must_use]
    pub fn with_starts(mut self, a: Position, b: Position) -> Self {
        self.start_a = a;
        self.start_b = b;
        self
    }

    /// Set starting hit points.
    #[must_use]
    pub fn with_starting_hp(mut self, hp: i32) -> Self {
        self.starting_hp = hp;
        self
    }

    /// Set the hand maximum.
    #[must_use]
    pub fn with_hand_max(mut self, hand_max: usize) -> Self {
        self.hand_max = hand_max;
        self
    }

    /// Set the VP threshold.
    #[must_use]
    pub fn with_vp_to_win(mut self, vp: u32) -> Self {
        self.vp_to_win = vp;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as u32) < self.board_width
            && (pos.y as u32) < self.board_height
    }

    /// Check the configuration for internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.board_width > MAX_BOARD_SIDE || self.board_height > MAX_BOARD_SIDE {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
                max: MAX_BOARD_SIDE,
            });
        }
        if !self.contains(self.nexus) {
            return Err(ConfigError::NexusOutOfBounds(self.nexus));
        }
        for (id, pos) in [(ActorId::A, self.start_a), (ActorId::B, self.start_b)] {
            if !self.contains(pos) {
                return Err(ConfigError::StartOutOfBounds(id, pos));
            }
        }
        if self.start_a == self.start_b {
            return Err(ConfigError::SharedStart(self.start_a));
        }
        if self.hand_max == 0 {
            return Err(ConfigError::ZeroHandMax);
        }
        if self.deck_size == 0 {
            return Err(ConfigError::ZeroDeckSize);
        }
        if self.starting_hp <= 0 {
            return Err(ConfigError::NonPositiveHp(self.starting_hp));
        }
        if self.ticks_per_round == 0 {
            return Err(ConfigError::ZeroTicksPerRound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_limits() {
        assert_eq!(MatchMode::Queue3.queue_limit(), 3);
        assert_eq!(MatchMode::SingleCard.queue_limit(), 1);
        assert!(MatchMode::Queue3.has_rounds());
        assert!(!MatchMode::SingleCard.has_rounds());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.nexus, Position::new(4, 4));
        assert_eq!(config.hand_max, 7);
        assert_eq!(config.deck_size, 30);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_board(5, 5)
            .with_nexus(Position::new(2, 2))
            .with_starts(Position::new(0, 2), Position::new(4, 2))
            .with_seed(7);

        assert_eq!(config.board_width, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_out_of_bounds_nexus() {
        let config = MatchConfig::default().with_board(4, 4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::NexusOutOfBounds(Position::new(4, 4)))
        );
    }

    #[test]
    fn test_rejects_bad_start() {
        let config = MatchConfig::default().with_starts(Position::new(-1, 0), Position::new(6, 4));
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartOutOfBounds(ActorId::A, Position::new(-1, 0)))
        );

        let shared = MatchConfig::default().with_starts(Position::new(1, 1), Position::new(1, 1));
        assert_eq!(shared.validate(), Err(ConfigError::SharedStart(Position::new(1, 1))));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        assert_eq!(
            MatchConfig::default().with_board(0, 3).validate(),
            Err(ConfigError::EmptyBoard { width: 0, height: 3 })
        );
        assert_eq!(
            MatchConfig::default().with_hand_max(0).validate(),
            Err(ConfigError::ZeroHandMax)
        );
        assert_eq!(
            MatchConfig::default().with_starting_hp(0).validate(),
            Err(ConfigError::NonPositiveHp(0))
        );
    }

    #[test]
    fn test_rejects_oversize_board() {
        let huge = MatchConfig::default().with_board(100_000, 100_000);
        assert_eq!(
            huge.validate(),
            Err(ConfigError::BoardTooLarge { width: 100_000, height: 100_000, max: MAX_BOARD_SIDE })
        );

        let tall = MatchConfig::default().with_board(12, u32::MAX);
        assert!(matches!(tall.validate(), Err(ConfigError::BoardTooLarge { .. })));

        let edge = MatchConfig::default().with_board(MAX_BOARD_SIDE, MAX_BOARD_SIDE);
        assert_eq!(edge.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::StartOutOfBounds(ActorId::B, Position::new(12, 0));
        assert_eq!(err.to_string(), "start tile (12,0) for actor B lies outside the board");
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
