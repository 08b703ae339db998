use serde::{Deserialize, Serialize};

use crate::{grid::Point, sets::candidates::Priority};

/// Weights of the frontier heuristic, expressed in tenths so that priorities
/// stay integral and totally ordered.
///
/// The default (11, 10) scores a position as `1.1 × d(goal, u) + d(start, u)`.
/// That estimate over-weights the goal and is not admissible: it favours
/// speed over optimality, and the search engine compensates with detour
/// relaxation. Changing the weights changes leg distances in edge cases.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize)]
pub struct HeuristicWeights {
    /// Weight of the distance to the goal, in tenths.
    pub goal_tenths: u64,

    /// Weight of the distance from the start, in tenths.
    pub start_tenths: u64,
}

impl HeuristicWeights {
    pub const DEFAULT: HeuristicWeights = HeuristicWeights {
        goal_tenths: 11,
        start_tenths: 10,
    };

    /// Scores `point` for a search running from `start` to `goal`, saturating
    /// at `Priority::MAX`.
    #[inline]
    pub fn priority(&self, start: &Point, goal: &Point, point: &Point) -> Priority {
        self.goal_tenths
            .saturating_mul(goal.manhattan(point))
            .saturating_add(self.start_tenths.saturating_mul(start.manhattan(point)))
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
