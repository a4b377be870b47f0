//! The [`Grid`] type: a tile map with a validated start and goal.
//!
//! A `Grid` is read-only once built. It owns its tiles outright (no shared
//! interior mutability), so it is `Send + Sync` and can be shared across
//! threads by reference.

use crate::error::OutOfBounds;
use crate::geom::Coord;
use crate::tiles::{Neighbors, TileMap};

/// A tile map together with a start `p` and goal `q`, both on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    tiles: TileMap,
    start: Coord,
    goal: Coord,
}

impl Grid {
    /// Parse `raw` and validate `start` then `goal` against it.
    pub fn new(raw: &str, start: Coord, goal: Coord) -> Result<Self, OutOfBounds> {
        Self::from_tiles(TileMap::parse(raw), start, goal)
    }

    /// Build a grid from an already parsed map.
    pub fn from_tiles(tiles: TileMap, start: Coord, goal: Coord) -> Result<Self, OutOfBounds> {
        tiles.validate(start)?;
        tiles.validate(goal)?;
        Ok(Self { tiles, start, goal })
    }

    /// The start coordinate.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The goal coordinate.
    #[inline]
    pub fn goal(&self) -> Coord {
        self.goal
    }

    /// The underlying tile map.
    #[inline]
    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    /// See [`TileMap::validate`].
    pub fn validate(&self, c: Coord) -> Result<(), OutOfBounds> {
        self.tiles.validate(c)
    }

    /// See [`TileMap::is_passable`].
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.tiles.is_passable(c)
    }

    /// See [`TileMap::neighbors`].
    #[inline]
    pub fn neighbors(&self, c: Coord) -> Neighbors<'_> {
        self.tiles.neighbors(c)
    }

    /// The same map with start and goal swapped.
    pub fn reversed(&self) -> Self {
        Self {
            tiles: self.tiles.clone(),
            start: self.goal,
            goal: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoundsViolation;

    const MAP: &str = "\
. P . . .
. # # # .
. . . . .
. . Q . .
. . . . .";

    #[test]
    fn grid_new_keeps_endpoints() {
        let g = Grid::new(MAP, Coord::new(1, 0), Coord::new(2, 3)).unwrap();
        assert_eq!(g.start(), Coord::new(1, 0));
        assert_eq!(g.goal(), Coord::new(2, 3));
        assert_eq!(g.height(), 5);
    }

    #[test]
    fn bad_start_is_reported_first() {
        let err = Grid::new(MAP, Coord::new(-1, 10), Coord::new(10, -1)).unwrap_err();
        assert_eq!(err.coord, Coord::new(-1, 10));
        assert!(err.violates(BoundsViolation::NegativeX));
        assert!(err.violates(BoundsViolation::YTooLarge { max: 4 }));
        assert_eq!(err.violations.len(), 2);
    }

    #[test]
    fn bad_goal() {
        let err = Grid::new(MAP, Coord::new(0, 0), Coord::new(10, -1)).unwrap_err();
        assert_eq!(err.coord, Coord::new(10, -1));
        assert_eq!(err.violations, vec![BoundsViolation::NegativeY]);
    }

    #[test]
    fn blocked_endpoints_are_valid() {
        // Validation is about bounds only.
        assert!(Grid::new(MAP, Coord::new(1, 1), Coord::new(2, 1)).is_ok());
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let g = Grid::new(MAP, Coord::new(1, 0), Coord::new(2, 3)).unwrap();
        let r = g.reversed();
        assert_eq!(r.start(), g.goal());
        assert_eq!(r.goal(), g.start());
        assert_eq!(r.tiles(), g.tiles());
    }

    #[test]
    fn grid_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }
}
