use hashbrown::HashSet;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::grid::{Coord, INPUT_COORDS, Point};

/// Generates `count` distinct points with both coordinates in `-span..=span`.
///
/// The same seed always yields the same tour. If the square holds fewer than
/// `count` cells, every cell is returned once. `span` is clamped so the points
/// stay in [`INPUT_COORDS`].
pub fn random_points(count: usize, span: Coord, seed: u64) -> Vec<Point> {
    let span = span.saturating_abs().min(*INPUT_COORDS.end());
    let side = span as u128 * 2 + 1;
    let count = count.min(side.saturating_mul(side).min(usize::MAX as u128) as usize);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(count);
    let mut points = Vec::with_capacity(count);

    while points.len() < count {
        let point = Point::new(
            rng.random_range(-span..=span),
            rng.random_range(-span..=span),
        );
        if seen.insert(point) {
            points.push(point);
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_are_distinct_and_in_range() {
        let points = random_points(50, 10, 42);
        assert_eq!(points.len(), 50);
        let unique: HashSet<_> = points.iter().collect();
        assert_eq!(unique.len(), 50);
        assert!(
            points
                .iter()
                .all(|p| (-10..=10).contains(&p.col) && (-10..=10).contains(&p.row))
        );
    }

    #[test]
    fn test_same_seed_same_points() {
        assert_eq!(random_points(20, 100, 7), random_points(20, 100, 7));
        assert_ne!(random_points(20, 100, 7), random_points(20, 100, 8));
    }

    #[test]
    fn test_huge_span_stays_in_input_range() {
        let points = random_points(30, Coord::MAX, 3);
        assert_eq!(points.len(), 30);
        assert!(points.iter().all(Point::in_input_range));
    }

    #[test]
    fn test_count_capped_by_area() {
        let points = random_points(100, 1, 0);
        assert_eq!(points.len(), 9);
        assert_eq!(random_points(5, 0, 0), vec![Point::new(0, 0)]);
    }
}
