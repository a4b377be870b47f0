use gridpath_core::{Coord, NoPossiblePath};

use crate::PathSearch;
use crate::traits::Pather;

impl PathSearch {
    /// Shortest step count from `from` to `to` by breadth-first search.
    ///
    /// Returns 0 when `from == to` without looking at the map. Otherwise
    /// returns as soon as `to` is generated as a neighbor: nodes leave the
    /// queue in non-decreasing distance order, so the first sighting is on
    /// a shortest path.
    pub fn bfs<P: Pather>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Result<usize, NoPossiblePath> {
        self.reset();
        log::debug!("bfs from {from} to {to}");

        if from == to {
            return Ok(0);
        }

        self.queue.push_back((from, 0));
        self.visited.insert(from);
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some((cp, steps)) = self.queue.pop_front() else {
                break 'search None;
            };
            self.stats.expanded += 1;
            log::trace!("bfs expand {cp} at {steps}");

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if np == to {
                    break 'search Some(steps + 1);
                }
                if self.visited.insert(np) {
                    self.queue.push_back((np, steps + 1));
                    self.stats.pushed += 1;
                }
            }
        };

        self.nbuf = nbuf;

        log::debug!("bfs finished: {found:?}, {:?}", self.stats);
        found.ok_or(NoPossiblePath { from, to })
    }
}
