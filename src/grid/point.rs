use serde::{Deserialize, Serialize};
use std::{fmt::Display, ops::RangeInclusive};

use crate::{Error, Result};

/// Integer coordinate type used on both axes of the grid.
pub type Coord = i64;

/// Coordinates accepted from tour input. A search moves at most its stall
/// cutoff plus a big step away from the input points, so positions stay far
/// from the `Coord` limits.
pub const INPUT_COORDS: RangeInclusive<Coord> = (i32::MIN as Coord)..=(i32::MAX as Coord);

/// Accumulated path cost. Every grid move costs its Manhattan length, so
/// distances are never negative.
pub type Distance = u64;

/// A cell of the infinite integer grid, addressed by column then row.
///
/// Points compare by value: column first, then row. That natural order is
/// what breaks ties between equally promising frontier entries.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug, Serialize, Deserialize)]
pub struct Point {
    pub col: Coord,
    pub row: Coord,
}

impl Point {
    pub const fn new(col: Coord, row: Coord) -> Self {
        Point { col, row }
    }

    /// Manhattan (L1) distance between two grid cells, saturating at
    /// `Distance::MAX`.
    #[inline]
    pub fn manhattan(&self, other: &Point) -> Distance {
        self.col
            .abs_diff(other.col)
            .saturating_add(self.row.abs_diff(other.row))
    }

    /// Whether both coordinates lie in [`INPUT_COORDS`].
    pub fn in_input_range(&self) -> bool {
        INPUT_COORDS.contains(&self.col) && INPUT_COORDS.contains(&self.row)
    }

    /// Returns this point moved by `offset` along the column axis.
    #[inline]
    pub fn shifted_col(&self, offset: Coord) -> Point {
        Point::new(self.col + offset, self.row)
    }

    /// Returns this point moved by `offset` along the row axis.
    #[inline]
    pub fn shifted_row(&self, offset: Coord) -> Point {
        Point::new(self.col, self.row + offset)
    }

    /// The four cells sharing an edge with this one.
    pub fn unit_neighbors(&self) -> [Point; 4] {
        [
            self.shifted_row(-1),
            self.shifted_row(1),
            self.shifted_col(-1),
            self.shifted_col(1),
        ]
    }
}

/// Fails with [`Error::OutOfRange`] on the first point outside [`INPUT_COORDS`].
pub fn check_input_range(points: &[Point]) -> Result<()> {
    match points
        .iter()
        .enumerate()
        .find(|(_, point)| !point.in_input_range())
    {
        Some((index, &point)) => Err(Error::OutOfRange { index, point }),
        None => Ok(()),
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((col, row): (Coord, Coord)) -> Self {
        Point::new(col, row)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
