//! Grid geometry: tile positions, step directions, and facing.
//!
//! Coordinates are signed so that a candidate step off the board edge can be
//! represented (and then rejected by bounds checks) without wrapping.

use serde::{Deserialize, Serialize};

/// Integer tile position. `x` grows rightward, `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step along `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        Self {
            x: self.x + dir.dx as i32,
            y: self.y + dir.dy as i32,
        }
    }

    /// Manhattan distance: the number of orthogonal steps between two cells.
    #[must_use]
    pub const fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A unit step vector. Each component is clamped to -1, 0, or 1.
///
/// Diagonal and zero vectors are representable because queued input is not
/// validated; they simply never map to a [`Facing`]. Decoding clamps the same
/// way [`Direction::new`] does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDirection")]
pub struct Direction {
    dx: i8,
    dy: i8,
}

/// Wire shape of a `Direction` before clamping.
#[derive(Deserialize)]
struct RawDirection {
    dx: i8,
    dy: i8,
}

impl From<RawDirection> for Direction {
    fn from(raw: RawDirection) -> Self {
        Direction::new(raw.dx.into(), raw.dy.into())
    }
}

impl Direction {
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    /// The four cardinal directions in neighbor order: up, right, down, left.
    pub const CARDINALS: [Direction; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];

    /// Create a direction, clamping each component to its sign.
    ///
    /// ```
    /// use nexus_tactics::core::Direction;
    ///
    /// assert_eq!(Direction::new(5, 0), Direction::RIGHT);
    /// assert!(!Direction::new(1, 1).is_cardinal());
    /// ```
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self {
            dx: dx.signum() as i8,
            dy: dy.signum() as i8,
        }
    }

    #[must_use]
    pub const fn dx(self) -> i32 {
        self.dx as i32
    }

    #[must_use]
    pub const fn dy(self) -> i32 {
        self.dy as i32
    }

    /// True for exactly one non-zero component.
    #[must_use]
    pub const fn is_cardinal(self) -> bool {
        (self.dx == 0) != (self.dy == 0)
    }
}

/// Token facing, used by presentation only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Map a cardinal unit vector to a facing. Anything else yields `None`.
    #[must_use]
    pub fn from_direction(dir: Direction) -> Option<Facing> {
        match (dir.dx, dir.dy) {
            (0, -1) => Some(Facing::Up),
            (0, 1) => Some(Facing::Down),
            (-1, 0) => Some(Facing::Left),
            (1, 0) => Some(Facing::Right),
            _ => None,
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Facing::Up => Direction::UP,
            Facing::Down => Direction::DOWN,
            Facing::Left => Direction::LEFT,
            Facing::Right => Direction::RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let p = Position::new(2, 4);
        assert_eq!(p.step(Direction::RIGHT), Position::new(3, 4));
        assert_eq!(p.step(Direction::UP), Position::new(2, 3));
        assert_eq!(Position::new(0, 0).step(Direction::LEFT), Position::new(-1, 0));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Position::new(0, 0).manhattan(Position::new(3, 4)), 7);
        assert_eq!(Position::new(2, 4).manhattan(Position::new(2, 4)), 0);
        assert_eq!(Position::new(-1, 2).manhattan(Position::new(1, -2)), 6);
    }

    #[test]
    fn test_direction_clamps() {
        let d = Direction::new(-7, 3);
        assert_eq!(d.dx(), -1);
        assert_eq!(d.dy(), 1);
        assert!(!d.is_cardinal());
        assert!(!Direction::new(0, 0).is_cardinal());
        for dir in Direction::CARDINALS {
            assert!(dir.is_cardinal());
        }
    }

    #[test]
    fn test_direction_decode_clamps() {
        let d: Direction = serde_json::from_str(r#"{"dx":5,"dy":0}"#).unwrap();
        assert_eq!(d, Direction::RIGHT);
        assert_eq!(Position::new(2, 2).step(d), Position::new(3, 2));

        let d: Direction = serde_json::from_str(r#"{"dx":-3,"dy":-9}"#).unwrap();
        assert_eq!((d.dx(), d.dy()), (-1, -1));

        let json = serde_json::to_string(&Direction::UP).unwrap();
        assert_eq!(serde_json::from_str::<Direction>(&json).unwrap(), Direction::UP);
    }

    #[test]
    fn test_facing_round_trip() {
        for dir in Direction::CARDINALS {
            let facing = Facing::from_direction(dir).unwrap();
            assert_eq!(facing.direction(), dir);
        }
        assert_eq!(Facing::from_direction(Direction::new(1, 1)), None);
        assert_eq!(Facing::from_direction(Direction::new(0, 0)), None);
    }

    #[test]
    fn test_facing_serialization() {
        assert_eq!(serde_json::to_string(&Facing::Left).unwrap(), "\"left\"");
    }
}
