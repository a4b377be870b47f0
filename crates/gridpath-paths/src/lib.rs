//! Shortest step counts on tile grids.
//!
//! This crate answers one question: how many orthogonal unit steps
//! separate two cells of a [`Grid`], moving only through passable tiles?
//! Two interchangeable strategies are provided:
//!
//! - **BFS** with a FIFO queue ([`PathSearch::bfs`])
//! - **A\*** with a min-priority [`Frontier`] ([`PathSearch::astar`])
//!
//! Both run through [`PathSearch`], which owns and reuses its internal
//! caches so that repeated queries do not reallocate.
//!
//! For one-off requests use [`pathfind`] or [`pathfind_with`]:
//!
//! ```
//! use gridpath_core::Coord;
//! use gridpath_paths::pathfind;
//!
//! let map = ". P .\n. # .\n. Q .";
//! assert_eq!(pathfind(map, Coord::new(1, 0), Coord::new(1, 2)), Ok(4));
//! ```

mod astar;
mod bfs;
mod config;
mod distance;
mod frontier;
mod search;
mod traits;

use gridpath_core::{Coord, Grid, PathError};

pub use config::{Algorithm, Heuristic, PushPolicy, SearchConfig};
pub use distance::{chebyshev, manhattan};
pub use frontier::Frontier;
pub use search::{PathSearch, SearchStats};
pub use traits::Pather;

/// Shortest step count from `p` to `q` on the map `raw`, using BFS.
///
/// Fails with [`PathError::OutOfBounds`] if either coordinate is off the
/// map and with [`PathError::NoPossiblePath`] if `q` cannot be reached.
pub fn pathfind(raw: &str, p: Coord, q: Coord) -> Result<usize, PathError> {
    pathfind_with(raw, p, q, &SearchConfig::default())
}

/// Like [`pathfind`], with explicit options.
pub fn pathfind_with(
    raw: &str,
    p: Coord,
    q: Coord,
    config: &SearchConfig,
) -> Result<usize, PathError> {
    let grid = Grid::new(raw, p, q)?;
    let steps = PathSearch::new(*config).search(&grid)?;
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::BoundsViolation;

    const MAP: &str = "\
. P . . .
. # # # .
. . . . .
. . Q . .
. . . . .";

    #[test]
    fn pathfind_defaults_to_bfs() {
        assert_eq!(pathfind(MAP, Coord::new(1, 0), Coord::new(2, 3)), Ok(6));
    }

    #[test]
    fn pathfind_with_astar() {
        let cfg = SearchConfig::new(Algorithm::Astar);
        assert_eq!(
            pathfind_with(MAP, Coord::new(2, 3), Coord::new(1, 0), &cfg),
            Ok(6)
        );
    }

    #[test]
    fn out_of_bounds_surfaces_before_search() {
        let err = pathfind(MAP, Coord::new(-1, 10), Coord::new(10, -1)).unwrap_err();
        let e = match err {
            PathError::OutOfBounds(e) => e,
            other => panic!("expected OutOfBounds, got {other:?}"),
        };
        assert!(e.violates(BoundsViolation::NegativeX));
        assert!(e.violates(BoundsViolation::YTooLarge { max: 4 }));
    }

    #[test]
    fn no_possible_path_surfaces() {
        let err = pathfind(". # .", Coord::new(0, 0), Coord::new(2, 0)).unwrap_err();
        assert!(matches!(err, PathError::NoPossiblePath(_)));
    }
}
