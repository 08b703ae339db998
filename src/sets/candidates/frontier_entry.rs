use crate::grid::Point;

/// Heuristic score of a frontier position. Smaller is more promising.
pub type Priority = u64;

/// A grid position waiting in the expansion frontier, tagged with the
/// heuristic score it was pushed with.
///
/// Entries are ordered by priority (ascending), then by point, so two entries
/// with the same score always pop in the same order.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub struct FrontierEntry {
    /// Weighted distance-to-goal plus distance-from-start of `point`.
    pub priority: Priority,

    /// The position itself.
    pub point: Point,
}
