use gridpath_core::{Coord, NoPossiblePath};

use crate::PathSearch;
use crate::config::PushPolicy;
use crate::traits::Pather;

impl PathSearch {
    /// Shortest step count from `from` to `to` using A*.
    ///
    /// The frontier is keyed by `distance + estimate`, with the estimate
    /// taken from the configured [`Heuristic`](crate::Heuristic). Entries
    /// are never updated in place; a node popped after it has been settled
    /// is skipped. With [`PushPolicy::Always`] every passable successor is
    /// pushed on every expansion, whether or not its distance improved.
    pub fn astar<P: Pather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Result<usize, NoPossiblePath> {
        self.reset();
        let heuristic = self.config.heuristic;
        let policy = self.config.push_policy;
        log::debug!("astar from {from} to {to} ({heuristic:?}, {policy:?})");

        self.distance.insert(from, 0);
        self.frontier.push(from, heuristic.estimate(from, to));
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((node, f)) = self.frontier.pop_with_priority() else {
                break 'search None;
            };

            // Skip stale entries.
            if self.visited.contains(&node) {
                self.stats.stale += 1;
                continue;
            }

            let Some(&current_g) = self.distance.get(&node) else {
                continue;
            };

            if node == to {
                break 'search Some(current_g);
            }

            self.visited.insert(node);
            self.stats.expanded += 1;
            log::trace!("astar expand {node} at g={current_g} f={f}");

            nbuf.clear();
            pather.neighbors(node, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current_g + 1;
                let improved = self
                    .distance
                    .get(&np)
                    .is_none_or(|&g| tentative_g < g);
                if improved {
                    self.distance.insert(np, tentative_g);
                }
                if improved || policy == PushPolicy::Always {
                    self.frontier
                        .push(np, tentative_g + heuristic.estimate(np, to));
                    self.stats.pushed += 1;
                }
            }
        };

        self.nbuf = nbuf;

        log::debug!("astar finished: {found:?}, {:?}", self.stats);
        found.ok_or(NoPossiblePath { from, to })
    }
}
