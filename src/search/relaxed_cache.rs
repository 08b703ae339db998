use hashbrown::HashMap;

use crate::grid::{Distance, Point};

/// Distances settled by detour relaxation during one tour leg.
///
/// A leg search and all of the sub-searches it spawns share one cache, so a
/// detour re-solved once is not re-solved again. The tour clears it between
/// legs.
#[derive(Default, Debug)]
pub struct RelaxedCache {
    distances: HashMap<Point, Distance>,
}

impl RelaxedCache {
    pub fn new() -> Self {
        RelaxedCache {
            distances: HashMap::new(),
        }
    }

    pub fn get(&self, point: &Point) -> Option<Distance> {
        self.distances.get(point).copied()
    }

    /// Records `distance` for `point`, replacing any earlier value.
    pub fn insert(&mut self, point: Point, distance: Distance) {
        self.distances.insert(point, distance);
    }

    pub fn clear(&mut self) {
        self.distances.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut cache = RelaxedCache::new();
        let p = Point::new(1, 2);
        cache.insert(p, 9);
        cache.insert(p, 5);
        assert_eq!(cache.get(&p), Some(5));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut cache = RelaxedCache::default();
        cache.insert(Point::new(0, 0), 1);
        cache.insert(Point::new(0, 1), 2);
        cache.clear();
        assert_eq!(cache.get(&Point::new(0, 0)), None);
        assert_eq!(cache.get(&Point::new(0, 1)), None);
    }
}
