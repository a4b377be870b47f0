use gridpath_core::{Coord, Grid, TileMap};

/// Minimal pathfinding interface: provides neighbor enumeration.
///
/// Every step between a cell and one of its neighbors costs 1.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>);
}

impl Pather for TileMap {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(TileMap::neighbors(self, p));
    }
}

impl Pather for Grid {
    fn neighbors(&self, p: Coord, buf: &mut Vec<Coord>) {
        buf.extend(Grid::neighbors(self, p));
    }
}
