use hashbrown::HashMap;
use std::{collections::BTreeSet, fmt::Debug};

use crate::{
    grid::{Coord, Point},
    sets::obstacles::AxisSet,
};

/// Immutable per-axis index of every obstacle point of a tour.
///
/// Each occupied column maps to the ordered rows present in it, and each
/// occupied row to the ordered columns present in it. A point is an obstacle
/// iff it appears in both mappings.
///
/// # Invariants
/// - `columns[c]` contains `r` iff `rows[r]` contains `c` iff `(c, r)` is in `points`.
/// - `points` is sorted and free of duplicates.
/// - The index never changes after [`ObstacleIndex::build`]; the endpoints of
///   a search are excluded by the caller at query time.
pub struct ObstacleIndex {
    columns: HashMap<Coord, AxisSet>,
    rows: HashMap<Coord, AxisSet>,
    points: Box<[Point]>,
}

impl ObstacleIndex {
    /// Builds the index from the full list of tour points, in O(N log N).
    ///
    /// Repeated points are indexed once.
    pub fn build(points: &[Point]) -> Self {
        let mut columns: HashMap<Coord, AxisSet> = HashMap::new();
        let mut rows: HashMap<Coord, AxisSet> = HashMap::new();

        for point in points {
            columns.entry(point.col).or_default().insert(point.row);
            rows.entry(point.row).or_default().insert(point.col);
        }

        let points = points
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        ObstacleIndex {
            columns,
            rows,
            points,
        }
    }

    /// Rows occupied in column `col`, if any obstacle lies in that column.
    pub fn rows_in_column(&self, col: Coord) -> Option<&AxisSet> {
        self.columns.get(&col)
    }

    /// Columns occupied in row `row`, if any obstacle lies in that row.
    pub fn columns_in_row(&self, row: Coord) -> Option<&AxisSet> {
        self.rows.get(&row)
    }

    /// Whether the straight segment between two points sharing a row or a
    /// column has no obstacle strictly between its ends.
    ///
    /// Points on neither a common row nor a common column are never clear.
    pub fn segment_clear(&self, a: &Point, b: &Point) -> bool {
        let (line, low, high) = if a.col == b.col {
            (self.rows_in_column(a.col), a.row.min(b.row), a.row.max(b.row))
        } else if a.row == b.row {
            (self.columns_in_row(a.row), a.col.min(b.col), a.col.max(b.col))
        } else {
            return false;
        };
        line.and_then(|line| line.next_above(low, |_| false))
            .is_none_or(|obstacle| obstacle >= high)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.columns
            .get(&point.col)
            .is_some_and(|rows| rows.contains(point.row))
    }

    /// Distinct obstacle points, in ascending order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Debug for ObstacleIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObstacleIndex")
            .field("points", &self.points)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> ObstacleIndex {
        ObstacleIndex::build(&[
            Point::new(0, 0),
            Point::new(0, 4),
            Point::new(3, 0),
            Point::new(-2, 4),
        ])
    }

    #[test]
    fn test_build_populates_both_axes() {
        let index = sample_index();

        let rows = index.rows_in_column(0).unwrap();
        assert_eq!(format!("{rows:?}"), "{0, 4}");

        let cols = index.columns_in_row(4).unwrap();
        assert_eq!(format!("{cols:?}"), "{-2, 0}");

        let cols = index.columns_in_row(0).unwrap();
        assert_eq!(format!("{cols:?}"), "{0, 3}");
    }

    #[test]
    fn test_missing_lines_are_none() {
        let index = sample_index();
        assert!(index.rows_in_column(1).is_none());
        assert!(index.columns_in_row(-7).is_none());
    }

    #[test]
    fn test_contains_requires_both_coordinates() {
        let index = sample_index();
        assert!(index.contains(&Point::new(3, 0)));
        assert!(!index.contains(&Point::new(3, 4)));
        assert!(!index.contains(&Point::new(-2, 0)));
    }

    #[test]
    fn test_segment_clear_ignores_the_ends() {
        let index = sample_index();
        // (0, 0) and (3, 0) are the ends, nothing lies strictly between them
        assert!(index.segment_clear(&Point::new(0, 0), &Point::new(3, 0)));
        assert!(index.segment_clear(&Point::new(0, 3), &Point::new(0, 1)));
        assert!(!index.segment_clear(&Point::new(0, -1), &Point::new(0, 5)));
        assert!(!index.segment_clear(&Point::new(5, 0), &Point::new(-1, 0)));
        // a missing line is always clear
        assert!(index.segment_clear(&Point::new(7, -9), &Point::new(7, 9)));
        // not aligned
        assert!(!index.segment_clear(&Point::new(1, 1), &Point::new(2, 2)));
    }

    #[test]
    fn test_duplicates_are_indexed_once() {
        let index = ObstacleIndex::build(&[Point::new(1, 1), Point::new(1, 1), Point::new(0, 2)]);
        assert_eq!(index.points(), &[Point::new(0, 2), Point::new(1, 1)]);
        assert_eq!(format!("{:?}", index.rows_in_column(1).unwrap()), "{1}");
    }

    #[test]
    fn test_empty_index() {
        let index = ObstacleIndex::build(&[]);
        assert!(index.points().is_empty());
        assert!(!index.contains(&Point::new(0, 0)));
    }
}
