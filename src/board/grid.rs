//! Board geometry, occupancy, and line-of-sight queries.
//!
//! The board is a fixed W x H grid stored row-major. Lookups outside the grid
//! return `None` rather than panicking, so callers can probe candidate steps
//! freely.
//!
//! ## Line of sight vs. rays
//!
//! [`Board::los_orthogonal`] stops at LOS-blocking tiles; [`Board::line_from_dir`]
//! only stops at the board edge. The two are deliberately not unified.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tile::{Hazard, HazardKind, Tile, TileKind};
use crate::core::{ActorId, Direction, Position, MAX_BOARD_SIDE};

/// A neighboring cell and the step that reaches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor {
    pub pos: Position,
    pub delta: Direction,
}

/// Fixed-size tile grid with exactly one nexus tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u32,
    height: u32,
    nexus: Position,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create a `width` x `height` floor board with the nexus at `nexus`.
    ///
    /// An out-of-bounds nexus is recorded but no tile is marked; callers
    /// validate geometry through `MatchConfig::validate`. Each side is
    /// clamped to [`MAX_BOARD_SIDE`].
    #[must_use]
    pub fn new(width: u32, height: u32, nexus: Position) -> Self {
        let width = width.min(MAX_BOARD_SIDE);
        let height = height.min(MAX_BOARD_SIDE);
        let capacity = (width as usize).checked_mul(height as usize).unwrap_or(0);
        let mut tiles = Vec::with_capacity(capacity);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let pos = Position::new(x, y);
                let mut tile = Tile::floor(pos);
                if pos == nexus {
                    tile.kind = TileKind::Nexus;
                }
                tiles.push(tile);
            }
        }
        Self {
            width,
            height,
            nexus,
            tiles,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Position of the nexus tile.
    #[must_use]
    pub fn nexus(&self) -> Position {
        self.nexus
    }

    /// Inclusive lower, exclusive upper bound on both axes.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Tile at `pos`, or `None` off the board.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Mutable tile at `pos`, or `None` off the board.
    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        let i = self.index(pos)?;
        Some(&mut self.tiles[i])
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(Tile::is_occupied)
    }

    /// Who stands on `pos`, if anyone.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<ActorId> {
        self.tile(pos).and_then(|t| t.occupant)
    }

    /// In bounds, not movement-blocking, and unoccupied.
    #[must_use]
    pub fn is_walkable(&self, pos: Position) -> bool {
        match self.tile(pos) {
            Some(t) => !t.blocks_movement && t.occupant.is_none(),
            None => false,
        }
    }

    /// The four orthogonal neighbors (up, right, down, left), including
    /// off-board ones.
    #[must_use]
    pub fn neighbors4(pos: Position) -> SmallVec<[Neighbor; 4]> {
        Direction::CARDINALS
            .iter()
            .map(|&delta| Neighbor {
                pos: pos.step(delta),
                delta,
            })
            .collect()
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn manhattan(a: Position, b: Position) -> u32 {
        a.manhattan(b)
    }

    /// Orthogonal line of sight from `from` to `to`.
    ///
    /// Diagonal pairs never have sight. Otherwise every cell strictly between
    /// the two ends must exist and not block LOS.
    #[must_use]
    pub fn los_orthogonal(&self, from: Position, to: Position) -> bool {
        if from.x != to.x && from.y != to.y {
            return false;
        }
        let dir = Direction::new(to.x - from.x, to.y - from.y);
        let mut cur = from.step(dir);
        while cur != to {
            match self.tile(cur) {
                Some(t) if !t.blocks_los => {}
                _ => return false,
            }
            cur = cur.step(dir);
        }
        true
    }

    /// Up to `max_steps` cells along `dir`, excluding `start`.
    ///
    /// Stops early only when leaving the board; blocking tiles are included.
    #[must_use]
    pub fn line_from_dir(&self, start: Position, dir: Direction, max_steps: u32) -> Vec<Position> {
        let mut out = Vec::new();
        let mut cur = start;
        for _ in 0..max_steps {
            cur = cur.step(dir);
            if !self.in_bounds(cur) {
                break;
            }
            out.push(cur);
        }
        out
    }

    /// Turn a tile into a wall that blocks both movement and sight.
    ///
    /// Ignored off the board.
    pub fn set_wall(&mut self, pos: Position) {
        if let Some(tile) = self.tile_mut(pos) {
            tile.kind = TileKind::Wall;
            tile.blocks_movement = true;
            tile.blocks_los = true;
        }
    }

    /// Place a hazard lasting until `expires_on_tick`.
    ///
    /// Smoke also blocks sight while it lasts. Ignored off the board, on
    /// walls, and on the nexus; those tiles keep their kind. A new hazard
    /// replaces any hazard already on the tile.
    pub fn place_hazard(&mut self, pos: Position, kind: HazardKind, expires_on_tick: u32) {
        let Some(tile) = self.tile_mut(pos) else {
            return;
        };
        if matches!(tile.kind, TileKind::Nexus | TileKind::Wall) {
            return;
        }
        let smoke_before = tile.hazard.is_some_and(|h| h.kind == HazardKind::Smoke);
        let base_los = tile.blocks_los && !smoke_before;
        tile.kind = TileKind::Hazard;
        tile.hazard = Some(Hazard {
            kind,
            expires_on_tick,
        });
        tile.blocks_los = base_los || kind == HazardKind::Smoke;
    }

    /// Clear hazards whose expiry tick is at or before `tick`.
    ///
    /// Returns the number of hazards removed.
    pub fn expire_hazards(&mut self, tick: u32) -> usize {
        let mut cleared = 0;
        for tile in &mut self.tiles {
            let Some(hazard) = tile.hazard else {
                continue;
            };
            if hazard.expires_on_tick <= tick {
                if hazard.kind == HazardKind::Smoke {
                    tile.blocks_los = false;
                }
                tile.hazard = None;
                tile.kind = TileKind::Floor;
                cleared += 1;
            }
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(12, 12, Position::new(4, 4))
    }

    #[test]
    fn test_dimensions_and_nexus() {
        let b = board();
        assert_eq!(b.width(), 12);
        assert_eq!(b.height(), 12);
        assert_eq!(b.tiles().count(), 144);

        let nexus_tiles: Vec<_> = b.tiles().filter(|t| t.is_nexus()).collect();
        assert_eq!(nexus_tiles.len(), 1);
        assert_eq!(nexus_tiles[0].pos, Position::new(4, 4));
        assert_eq!(b.nexus(), Position::new(4, 4));
    }

    #[test]
    fn test_bounds() {
        let b = board();
        assert!(b.in_bounds(Position::new(0, 0)));
        assert!(b.in_bounds(Position::new(11, 11)));
        assert!(!b.in_bounds(Position::new(12, 0)));
        assert!(!b.in_bounds(Position::new(0, 12)));
        assert!(!b.in_bounds(Position::new(-1, 5)));
    }

    #[test]
    fn test_tile_lookup() {
        let b = board();
        assert_eq!(b.tile(Position::new(3, 7)).map(|t| t.pos), Some(Position::new(3, 7)));
        assert!(b.tile(Position::new(-1, 0)).is_none());
        assert!(b.tile(Position::new(0, 99)).is_none());
    }

    #[test]
    fn test_walkability() {
        let mut b = board();
        let p = Position::new(5, 5);
        assert!(b.is_walkable(p));

        b.tile_mut(p).unwrap().occupant = Some(ActorId::A);
        assert!(b.is_occupied(p));
        assert_eq!(b.occupant(p), Some(ActorId::A));
        assert!(!b.is_walkable(p));

        let w = Position::new(6, 6);
        b.set_wall(w);
        assert!(!b.is_walkable(w));
        assert!(!b.is_walkable(Position::new(-1, 0)));
    }

    #[test]
    fn test_neighbors4() {
        let n = Board::neighbors4(Position::new(0, 0));
        assert_eq!(n.len(), 4);
        assert_eq!(n[0].pos, Position::new(0, -1));
        assert_eq!(n[0].delta, Direction::UP);
        assert_eq!(n[1].pos, Position::new(1, 0));
        assert_eq!(n[2].pos, Position::new(0, 1));
        assert_eq!(n[3].pos, Position::new(-1, 0));
        for neighbor in &n {
            assert_eq!(Position::new(0, 0).step(neighbor.delta), neighbor.pos);
        }
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Board::manhattan(Position::new(2, 4), Position::new(6, 4)), 4);
    }

    #[test]
    fn test_los_clear_and_blocked() {
        let mut b = board();
        let from = Position::new(1, 1);
        let to = Position::new(1, 6);
        assert!(b.los_orthogonal(from, to));
        assert!(b.los_orthogonal(to, from));

        b.set_wall(Position::new(1, 3));
        assert!(!b.los_orthogonal(from, to));
        assert!(!b.los_orthogonal(to, from));
    }

    #[test]
    fn test_los_ignores_endpoints() {
        let mut b = board();
        b.set_wall(Position::new(3, 3));
        // Target itself blocking does not hide it
        assert!(b.los_orthogonal(Position::new(0, 3), Position::new(3, 3)));
        // Adjacent cells always see each other
        assert!(b.los_orthogonal(Position::new(2, 3), Position::new(3, 3)));
        // Same cell
        assert!(b.los_orthogonal(Position::new(5, 5), Position::new(5, 5)));
    }

    #[test]
    fn test_los_diagonal_never() {
        let b = board();
        assert!(!b.los_orthogonal(Position::new(0, 0), Position::new(1, 1)));
        assert!(!b.los_orthogonal(Position::new(0, 0), Position::new(5, 2)));
    }

    #[test]
    fn test_los_off_board_path() {
        let b = board();
        // Path runs through cells that do not exist
        assert!(!b.los_orthogonal(Position::new(-3, 0), Position::new(2, 0)));
    }

    #[test]
    fn test_smoke_blocks_sight_until_expiry() {
        let mut b = board();
        b.place_hazard(Position::new(2, 0), HazardKind::Smoke, 5);
        assert!(!b.los_orthogonal(Position::new(0, 0), Position::new(4, 0)));
        // Smoke does not block movement
        assert!(b.is_walkable(Position::new(2, 0)));

        assert_eq!(b.expire_hazards(4), 0);
        assert_eq!(b.expire_hazards(5), 1);
        assert!(b.los_orthogonal(Position::new(0, 0), Position::new(4, 0)));
        assert_eq!(b.tile(Position::new(2, 0)).unwrap().kind, TileKind::Floor);
    }

    #[test]
    fn test_hazard_skips_nexus() {
        let mut b = board();
        b.place_hazard(Position::new(4, 4), HazardKind::Fire, 3);
        assert!(b.tile(Position::new(4, 4)).unwrap().is_nexus());
        assert!(b.tile(Position::new(4, 4)).unwrap().hazard.is_none());
    }

    #[test]
    fn test_hazard_skips_wall() {
        let mut b = board();
        let w = Position::new(1, 0);
        b.set_wall(w);
        b.place_hazard(w, HazardKind::Fire, 3);

        let tile = b.tile(w).unwrap();
        assert_eq!(tile.kind, TileKind::Wall);
        assert!(tile.hazard.is_none());
        assert!(tile.blocks_los);
        assert!(tile.blocks_movement);
        assert!(!b.los_orthogonal(Position::new(0, 0), Position::new(2, 0)));

        assert_eq!(b.expire_hazards(3), 0);
        assert_eq!(b.tile(w).unwrap().kind, TileKind::Wall);
    }

    #[test]
    fn test_fire_over_smoke_clears_sight_block() {
        let mut b = board();
        let p = Position::new(2, 0);
        b.place_hazard(p, HazardKind::Smoke, 5);
        assert!(b.tile(p).unwrap().blocks_los);

        b.place_hazard(p, HazardKind::Fire, 6);
        assert!(!b.tile(p).unwrap().blocks_los);
        assert_eq!(b.expire_hazards(6), 1);
        let tile = b.tile(p).unwrap();
        assert_eq!(tile.kind, TileKind::Floor);
        assert!(!tile.blocks_los);
        assert!(!tile.blocks_movement);
    }

    #[test]
    fn test_oversize_dimensions_clamp() {
        let b = Board::new(MAX_BOARD_SIDE + 5, 2, Position::new(0, 0));
        assert_eq!(b.width(), MAX_BOARD_SIDE);
        assert_eq!(b.tiles().count(), MAX_BOARD_SIDE as usize * 2);
        assert!(b.tile(Position::new(MAX_BOARD_SIDE as i32 - 1, 1)).is_some());
        assert!(b.tile(Position::new(MAX_BOARD_SIDE as i32, 0)).is_none());
    }

    #[test]
    fn test_line_from_dir_stops_at_edge() {
        let b = board();
        let line = b.line_from_dir(Position::new(10, 0), Direction::RIGHT, 5);
        assert_eq!(line, vec![Position::new(11, 0)]);

        let line = b.line_from_dir(Position::new(0, 0), Direction::DOWN, 3);
        assert_eq!(line, vec![Position::new(0, 1), Position::new(0, 2), Position::new(0, 3)]);
    }

    #[test]
    fn test_line_from_dir_passes_walls() {
        let mut b = board();
        b.set_wall(Position::new(2, 0));
        let line = b.line_from_dir(Position::new(0, 0), Direction::RIGHT, 3);
        assert_eq!(line.len(), 3);
        assert!(line.contains(&Position::new(2, 0)));
    }
}
