use hashbrown::HashSet;

use crate::grid::Point;

/// Set of grid positions whose distance is final for the running search.
///
/// Obstacle points are seeded into it up front, so a blocked cell looks
/// exactly like a cell that was already expanded.
#[derive(Default, Debug)]
pub struct PointSet {
    points: HashSet<Point>,
}

impl PointSet {
    /// Seeds the set with every point of `obstacles` except the ones in `passable`.
    pub fn with_obstacles(obstacles: &[Point], passable: &[Point]) -> Self {
        PointSet {
            points: obstacles
                .iter()
                .filter(|point| !passable.contains(point))
                .copied()
                .collect(),
        }
    }

    #[inline]
    pub fn get(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    #[inline]
    pub fn set(&mut self, point: Point) {
        self.points.insert(point);
    }
}
