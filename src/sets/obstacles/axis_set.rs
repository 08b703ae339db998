use std::{collections::BTreeSet, fmt::Debug, ops::Bound};

use crate::grid::Coord;

/// The ordered coordinates of every obstacle lying on one grid line.
///
/// For a column this holds the occupied rows, for a row the occupied columns.
/// Lookups in either direction are O(log k) in the number of obstacles on the
/// line.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct AxisSet {
    coords: BTreeSet<Coord>,
}

impl AxisSet {
    /// Records an obstacle at `coord` on this line.
    ///
    /// # Returns
    /// `false` if the coordinate was already present
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.coords.insert(coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Smallest obstacle coordinate strictly greater than `origin` for which
    /// `ignored` is false.
    pub fn next_above(&self, origin: Coord, ignored: impl Fn(Coord) -> bool) -> Option<Coord> {
        self.coords
            .range((Bound::Excluded(origin), Bound::Unbounded))
            .copied()
            .find(|&coord| !ignored(coord))
    }

    /// Largest obstacle coordinate strictly less than `origin` for which
    /// `ignored` is false.
    pub fn next_below(&self, origin: Coord, ignored: impl Fn(Coord) -> bool) -> Option<Coord> {
        self.coords
            .range(..origin)
            .rev()
            .copied()
            .find(|&coord| !ignored(coord))
    }
}

impl FromIterator<Coord> for AxisSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        AxisSet {
            coords: iter.into_iter().collect(),
        }
    }
}

impl Debug for AxisSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.coords.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(coords: &[Coord]) -> AxisSet {
        coords.iter().copied().collect()
    }

    #[test]
    fn test_next_above_is_strict() {
        let set = line(&[-4, 0, 3, 9]);
        assert_eq!(set.next_above(0, |_| false), Some(3));
        assert_eq!(set.next_above(1, |_| false), Some(3));
        assert_eq!(set.next_above(-10, |_| false), Some(-4));
        assert_eq!(set.next_above(9, |_| false), None);
    }

    #[test]
    fn test_next_below_is_strict() {
        let set = line(&[-4, 0, 3, 9]);
        assert_eq!(set.next_below(3, |_| false), Some(0));
        assert_eq!(set.next_below(2, |_| false), Some(0));
        assert_eq!(set.next_below(100, |_| false), Some(9));
        assert_eq!(set.next_below(-4, |_| false), None);
    }

    #[test]
    fn test_ignored_coordinates_are_skipped() {
        let set = line(&[1, 2, 5]);
        assert_eq!(set.next_above(0, |c| c == 1), Some(2));
        assert_eq!(set.next_above(0, |c| c <= 2), Some(5));
        assert_eq!(set.next_above(0, |_| true), None);
        assert_eq!(set.next_below(6, |c| c == 5 || c == 2), Some(1));
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut set = AxisSet::default();
        assert!(set.is_empty());
        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert_eq!(format!("{set:?}"), "{4}");
        assert!(set.contains(4));
        assert!(!set.contains(5));
    }

    #[test]
    fn test_debug_is_sorted() {
        let set = line(&[8, -1, 3]);
        assert_eq!(format!("{set:?}"), "{-1, 3, 8}");
    }
}
