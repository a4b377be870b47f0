//! Search configuration.

use gridpath_core::Coord;

use crate::distance::{chebyshev, manhattan};

/// Which search strategy to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// Breadth-first search with a FIFO queue.
    #[default]
    Bfs,
    /// A* with a priority frontier.
    Astar,
}

/// Remaining-distance estimate used by A*.
///
/// All variants are admissible and consistent for unit-cost 4-way moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// `|dx| + |dy|`; exact on an open grid.
    #[default]
    Manhattan,
    /// `max(|dx|, |dy|)`; a looser lower bound.
    Chebyshev,
    /// Always 0. A* then expands like Dijkstra.
    Zero,
}

impl Heuristic {
    /// Estimate the number of steps from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> usize {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Chebyshev => chebyshev(from, to),
            Self::Zero => 0,
        }
    }
}

/// When A* pushes a successor onto its frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PushPolicy {
    /// Push every passable successor of every expanded node, even when its
    /// recorded distance did not improve. Redundant entries are dropped as
    /// stale when popped.
    #[default]
    Always,
    /// Push a successor only when its recorded distance improved.
    OnImprovement,
}

/// Options for a [`PathSearch`](crate::PathSearch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub heuristic: Heuristic,
    pub push_policy: PushPolicy,
}

impl SearchConfig {
    /// Default options with the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_push_policy(mut self, push_policy: PushPolicy) -> Self {
        self.push_policy = push_policy;
        self
    }
}
