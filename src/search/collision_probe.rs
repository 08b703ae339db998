use crate::{
    grid::{Coord, Point},
    sets::obstacles::{AxisSet, ObstacleIndex},
};

/// Signed offset to move along one axis before hitting an obstacle.
///
/// `line` holds the obstacle coordinates on the line being travelled, `origin`
/// is the current coordinate on that line and `offset` the straight-line
/// offset to the target. Coordinates for which `ignored` is true do not
/// block.
///
/// Moving up the axis stops one cell short of the nearest obstacle strictly
/// above `origin`; moving down stops one cell short of the nearest obstacle
/// strictly below. The returned offset is whichever of the straight-line and
/// obstacle-limited offsets has the smaller magnitude, so it is `0` when an
/// obstacle is directly adjacent in the direction of travel.
pub fn axis_probe(
    line: Option<&AxisSet>,
    origin: Coord,
    offset: Coord,
    ignored: impl Fn(Coord) -> bool,
) -> Coord {
    let Some(line) = line else {
        return offset;
    };
    if line.is_empty() {
        return offset;
    }

    let limited = if offset >= 0 {
        match line.next_above(origin, ignored) {
            Some(obstacle) => obstacle - origin - 1,
            None => return offset,
        }
    } else {
        match line.next_below(origin, ignored) {
            Some(obstacle) => obstacle - origin + 1,
            None => return offset,
        }
    };

    if offset.abs() < limited.abs() {
        offset
    } else {
        limited
    }
}

/// Axis probes of one search: the obstacle index seen with the search's two
/// endpoints made passable.
#[derive(Clone, Copy, Debug)]
pub struct CollisionProbe<'a> {
    index: &'a ObstacleIndex,
    endpoints: [Point; 2],
}

impl<'a> CollisionProbe<'a> {
    pub fn new(index: &'a ObstacleIndex, from: Point, to: Point) -> Self {
        CollisionProbe {
            index,
            endpoints: [from, to],
        }
    }

    /// Horizontal big-step offset from `at` toward `to`, probing the row through `at`.
    pub fn x_offset(&self, at: &Point, to: &Point) -> Coord {
        let row = at.row;
        axis_probe(
            self.index.columns_in_row(row),
            at.col,
            to.col - at.col,
            |col| self.endpoints.contains(&Point::new(col, row)),
        )
    }

    /// Vertical big-step offset from `at` toward `to`, probing the column through `at`.
    pub fn y_offset(&self, at: &Point, to: &Point) -> Coord {
        let col = at.col;
        axis_probe(
            self.index.rows_in_column(col),
            at.row,
            to.row - at.row,
            |row| self.endpoints.contains(&Point::new(col, row)),
        )
    }
}
