use std::collections::{HashMap, HashSet, VecDeque};

use gridpath_core::{Coord, Grid, NoPossiblePath};

use crate::config::{Algorithm, SearchConfig};
use crate::frontier::Frontier;
use crate::traits::Pather;

/// Counters from the most recent query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes whose neighbors were generated.
    pub expanded: usize,
    /// Entries added to the queue or frontier (the seed included).
    pub pushed: usize,
    /// Frontier entries discarded on pop because the node was already settled.
    pub stale: usize,
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Shortest step count between two cells, by BFS or A*.
///
/// `PathSearch` owns the scratch state of both algorithms (queue, visited
/// set, distance map, frontier) and clears it at the start of each query,
/// so one value can serve many queries without reallocating.
#[derive(Debug, Default)]
pub struct PathSearch {
    pub(crate) config: SearchConfig,
    // BFS caches
    pub(crate) queue: VecDeque<(Coord, usize)>,
    // shared by BFS and A*
    pub(crate) visited: HashSet<Coord>,
    // A* caches
    pub(crate) distance: HashMap<Coord, usize>,
    pub(crate) frontier: Frontier<Coord>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Coord>,
    pub(crate) stats: SearchStats,
}

impl PathSearch {
    /// Create a new `PathSearch` with the given options.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        }
    }

    /// The options in use.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the options. Takes effect on the next query.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters from the last query.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run the configured algorithm from `from` to `to`.
    pub fn shortest<P: Pather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Result<usize, NoPossiblePath> {
        match self.config.algorithm {
            Algorithm::Bfs => self.bfs(pather, from, to),
            Algorithm::Astar => self.astar(pather, from, to),
        }
    }

    /// Run the configured algorithm between the grid's start and goal.
    pub fn search(&mut self, grid: &Grid) -> Result<usize, NoPossiblePath> {
        self.shortest(grid, grid.start(), grid.goal())
    }

    pub(crate) fn reset(&mut self) {
        self.queue.clear();
        self.visited.clear();
        self.distance.clear();
        self.frontier.clear();
        self.stats = SearchStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Heuristic, PushPolicy};

    const MAP: &str = "\
. P . . .
. # # # .
. . . . .
. . Q . .
. . . . .";

    #[test]
    fn search_uses_configured_algorithm() {
        let grid = Grid::new(MAP, Coord::new(1, 0), Coord::new(2, 3)).unwrap();
        let mut ps = PathSearch::new(SearchConfig::new(Algorithm::Bfs));
        assert_eq!(ps.search(&grid), Ok(6));
        assert_eq!(ps.stats().stale, 0);

        ps.set_config(SearchConfig::new(Algorithm::Astar));
        assert_eq!(ps.config().algorithm, Algorithm::Astar);
        assert_eq!(ps.search(&grid), Ok(6));
    }

    #[test]
    fn reuse_clears_previous_state() {
        let grid = Grid::new(MAP, Coord::new(1, 0), Coord::new(2, 3)).unwrap();
        for algorithm in [Algorithm::Bfs, Algorithm::Astar] {
            let mut ps = PathSearch::new(SearchConfig::new(algorithm));
            let first = ps.search(&grid);
            let first_stats = ps.stats();
            let second = ps.search(&grid);
            assert_eq!(first, second);
            assert_eq!(first_stats, ps.stats());
        }
    }

    #[test]
    fn astar_options_agree() {
        let grid = Grid::new(MAP, Coord::new(2, 3), Coord::new(1, 0)).unwrap();
        for heuristic in [Heuristic::Manhattan, Heuristic::Chebyshev, Heuristic::Zero] {
            for policy in [PushPolicy::Always, PushPolicy::OnImprovement] {
                let cfg = SearchConfig::new(Algorithm::Astar)
                    .with_heuristic(heuristic)
                    .with_push_policy(policy);
                let mut ps = PathSearch::new(cfg);
                assert_eq!(ps.search(&grid), Ok(6), "{heuristic:?} / {policy:?}");
            }
        }
    }
}
