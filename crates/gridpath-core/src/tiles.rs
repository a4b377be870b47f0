//! Parsed tile maps.
//!
//! A [`TileMap`] is built from a textual block: rows are separated by
//! newlines and tiles within a row by whitespace. Each token is one tile.
//! Rows may have different lengths, so every bounds check is made against
//! the length of the row being checked.

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{BoundsViolation, OutOfBounds};
use crate::geom::Coord;

/// Tile token for a blocked cell.
pub const BLOCKED: &str = "#";

/// Tile token for an open floor cell. Any token other than [`BLOCKED`] is
/// passable too (start/goal markers, for instance).
pub const PASSABLE: &str = ".";

/// An immutable map of tile tokens, indexed by row then column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    rows: Vec<Vec<String>>,
}

impl TileMap {
    /// Parse a map from text.
    ///
    /// Lines are split with [`str::lines`], so a trailing newline does not
    /// add an empty row; blank lines in the middle do (and have length 0).
    pub fn parse(raw: &str) -> Self {
        let rows: Vec<Vec<String>> = raw
            .lines()
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();
        log::debug!("parsed tile map with {} rows", rows.len());
        Self { rows }
    }

    /// Number of rows (the y extent).
    #[inline]
    pub fn height(&self) -> i32 {
        i32::try_from(self.rows.len()).unwrap_or(i32::MAX)
    }

    /// Length of row `y`, or `None` if there is no such row.
    pub fn row_len(&self, y: i32) -> Option<usize> {
        usize::try_from(y)
            .ok()
            .and_then(|y| self.rows.get(y))
            .map(Vec::len)
    }

    /// The token at `c`, or `None` outside the map.
    pub fn tile(&self, c: Coord) -> Option<&str> {
        let x = usize::try_from(c.x).ok()?;
        let y = usize::try_from(c.y).ok()?;
        self.rows.get(y)?.get(x).map(String::as_str)
    }

    /// Whether `c` lies on the map.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.tile(c).is_some()
    }

    /// Check `c` against the map bounds.
    ///
    /// Rules are checked in the order: y negative, x negative, y past the
    /// last row, x past the end of its row. The last rule is only checked
    /// when y names a real row. Every broken rule is reported.
    pub fn validate(&self, c: Coord) -> Result<(), OutOfBounds> {
        let mut violations = Vec::new();
        let mut y_invalid = false;
        if c.y < 0 {
            violations.push(BoundsViolation::NegativeY);
            y_invalid = true;
        }
        if c.x < 0 {
            violations.push(BoundsViolation::NegativeX);
        }
        if c.y >= self.height() {
            violations.push(BoundsViolation::YTooLarge {
                max: self.height() - 1,
            });
            y_invalid = true;
        }
        if !y_invalid {
            let len = self
                .row_len(c.y)
                .map_or(0, |n| i32::try_from(n).unwrap_or(i32::MAX));
            if c.x >= len {
                violations.push(BoundsViolation::XTooLarge { max: len - 1 });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(OutOfBounds {
                coord: c,
                violations,
            })
        }
    }

    /// Whether `c` is on the map and not [`BLOCKED`].
    pub fn is_passable(&self, c: Coord) -> bool {
        self.tile(c).is_some_and(|t| t != BLOCKED)
    }

    /// Passable orthogonal neighbours of `c`, lazily, in the order west,
    /// east, north, south.
    ///
    /// The iterator is `Clone`, so it can be replayed independently.
    pub fn neighbors(&self, c: Coord) -> Neighbors<'_> {
        Neighbors {
            map: self,
            candidates: c.neighbors_4(),
            next: 0,
        }
    }

    /// First coordinate (row-major) whose token equals `tile`.
    pub fn find(&self, tile: &str) -> Option<Coord> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            let x = row.iter().position(|t| t == tile)?;
            Some(Coord::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
        })
    }
}

impl fmt::Display for TileMap {
    /// Render in the input format: tokens joined by one space, rows by `\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(&row.join(" "))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Neighbors
// ---------------------------------------------------------------------------

/// Iterator over the passable orthogonal neighbours of a cell.
///
/// Created by [`TileMap::neighbors`].
#[derive(Clone)]
pub struct Neighbors<'a> {
    map: &'a TileMap,
    candidates: [Coord; 4],
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while let Some(&c) = self.candidates.get(self.next) {
            self.next += 1;
            if self.map.is_passable(c) {
                return Some(c);
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len() - self.next))
    }
}

impl FusedIterator for Neighbors<'_> {}
