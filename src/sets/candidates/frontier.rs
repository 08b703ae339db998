use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    grid::Point,
    sets::candidates::{FrontierEntry, HeuristicWeights},
};

/// Priority-ordered set of grid positions awaiting expansion during one
/// search from `start` to `goal`.
///
/// Pops the entry with the smallest heuristic score first. The same point may
/// be pushed several times; the search discards the stale copies when they
/// surface.
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    start: Point,
    goal: Point,
    weights: HeuristicWeights,
}

impl Frontier {
    pub fn new(start: Point, goal: Point, weights: HeuristicWeights) -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            start,
            goal,
            weights,
        }
    }

    /// Scores `point` and adds it to the frontier.
    pub fn push(&mut self, point: Point) {
        let priority = self.weights.priority(&self.start, &self.goal, &point);
        self.heap.push(Reverse(FrontierEntry { priority, point }));
    }

    /// Removes and returns the most promising position.
    pub fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|Reverse(entry)| entry.point)
    }
}
