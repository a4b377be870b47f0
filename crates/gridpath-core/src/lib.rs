//! **gridpath-core**: grid map types for shortest-path search.
//!
//! This crate provides the foundational types used by the search
//! algorithms: the [`Coord`] value type, the parsed [`TileMap`], the
//! validated [`Grid`] with its start and goal, and the error taxonomy.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tiles;

pub use error::{BoundsViolation, NoPossiblePath, OutOfBounds, PathError};
pub use geom::{Coord, ParseCoordError};
pub use grid::Grid;
pub use tiles::{BLOCKED, Neighbors, PASSABLE, TileMap};
