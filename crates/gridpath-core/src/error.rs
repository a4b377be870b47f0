//! Error types for map construction and search.
//!
//! There are two failure kinds: a coordinate outside the map
//! ([`OutOfBounds`]) and an unreachable goal ([`NoPossiblePath`]).
//! [`PathError`] is their union, returned by the search entry point.

use std::fmt;

use thiserror::Error;

use crate::geom::Coord;

/// A single bounds rule broken by a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundsViolation {
    /// `y < 0`.
    NegativeY,
    /// `x < 0`.
    NegativeX,
    /// `y` is past the last row; `max` is the last valid row index.
    YTooLarge { max: i32 },
    /// `x` is past the end of row `y`; `max` is that row's last valid index.
    XTooLarge { max: i32 },
}

impl fmt::Display for BoundsViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeY => write!(f, "y coordinate must not be negative"),
            Self::NegativeX => write!(f, "x coordinate must not be negative"),
            Self::YTooLarge { max } => write!(f, "y coordinate must be maximum {max}"),
            Self::XTooLarge { max } => write!(f, "x coordinate must be maximum {max}"),
        }
    }
}

fn join(violations: &[BoundsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A coordinate lies outside the map. Lists every rule it breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid coordinate {coord}: {}", join(.violations))]
pub struct OutOfBounds {
    pub coord: Coord,
    pub violations: Vec<BoundsViolation>,
}

impl OutOfBounds {
    /// Whether `v` is among the broken rules.
    pub fn violates(&self, v: BoundsViolation) -> bool {
        self.violations.contains(&v)
    }
}

/// The search frontier ran dry before reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no possible path from {from} to {to}")]
pub struct NoPossiblePath {
    pub from: Coord,
    pub to: Coord,
}

/// Any failure of a shortest-path request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
    #[error(transparent)]
    NoPossiblePath(#[from] NoPossiblePath),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_lists_every_rule() {
        let e = OutOfBounds {
            coord: Coord::new(-1, 10),
            violations: vec![BoundsViolation::NegativeX, BoundsViolation::YTooLarge { max: 4 }],
        };
        assert_eq!(
            e.to_string(),
            "invalid coordinate (-1, 10): x coordinate must not be negative; \
             y coordinate must be maximum 4"
        );
        assert!(e.violates(BoundsViolation::NegativeX));
        assert!(!e.violates(BoundsViolation::NegativeY));
    }

    #[test]
    fn no_possible_path_message() {
        let e = NoPossiblePath {
            from: Coord::new(1, 0),
            to: Coord::new(2, 3),
        };
        assert_eq!(e.to_string(), "no possible path from (1, 0) to (2, 3)");
    }

    #[test]
    fn path_error_is_transparent() {
        let inner = NoPossiblePath {
            from: Coord::new(0, 0),
            to: Coord::new(1, 1),
        };
        let e: PathError = inner.into();
        assert_eq!(e.to_string(), inner.to_string());
        assert!(matches!(e, PathError::NoPossiblePath(_)));
    }
}
