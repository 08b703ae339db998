use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::{
    grid::{Distance, Point},
    search::{CollisionProbe, Infeasibility, LegOutcome, RelaxedCache},
    sets::{
        candidates::{Frontier, HeuristicWeights},
        obstacles::ObstacleIndex,
        visited::PointSet,
    },
    statistics::Stats,
};

/// Obstacle-aware shortest-path search on the infinite integer grid.
///
/// Every point of the obstacle index blocks movement, except the two
/// endpoints of the running search. Moves are unit steps on one axis, plus
/// "big steps" that jump straight toward the target and stop one cell short
/// of the nearest obstacle on the way.
///
/// # Approximations
/// - The frontier is ordered by a non-admissible heuristic (see
///   [`HeuristicWeights`]). A position may therefore be finalized through a
///   detour; when its accumulated cost exceeds its Manhattan distance from the
///   start, the engine re-solves the sub-path with a nested search.
/// - The stall cutoff abandons a leg once `stall_cutoff` expansions went by
///   without improving the best distance. Since distances never drop below
///   the initial `0`, this effectively bounds each search to
///   `stall_cutoff + 1` expansions, and can report a reachable target as
///   infeasible.
pub struct SearchEngine<'a> {
    index: &'a ObstacleIndex,
    weights: HeuristicWeights,
    stall_cutoff: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a ObstacleIndex, weights: HeuristicWeights, stall_cutoff: usize) -> Self {
        SearchEngine {
            index,
            weights,
            stall_cutoff,
        }
    }

    pub fn stall_cutoff(&self) -> usize {
        self.stall_cutoff
    }

    /// Finds the length of a path from `from` to `to` going around every other
    /// obstacle.
    ///
    /// The search repeatedly pops the most promising frontier position,
    /// finalizes its distance, and pushes its four unit neighbors and up to two
    /// big-step landings. Positions whose accumulated cost betrays a detour are
    /// re-solved by a recursive search from `from`, whose result is memoized
    /// in `relaxed`.
    ///
    /// # Parameters
    /// - `from`, `to`: Endpoints of the leg; both are passable even if indexed.
    /// - `relaxed`: Detour distances shared with the nested sub-searches of the
    ///   same leg.
    /// - `stats`: Work counters; every nested search records into it too.
    ///
    /// # Returns
    /// [`LegOutcome::Reached`] with the path length, or
    /// [`LegOutcome::Infeasible`] when the frontier runs dry or the stall cutoff
    /// triggers.
    pub fn relax(
        &self,
        from: Point,
        to: Point,
        relaxed: &mut RelaxedCache,
        stats: &mut Stats,
    ) -> LegOutcome {
        stats.bump_searches();

        let probe = CollisionProbe::new(self.index, from, to);
        let mut frontier = Frontier::new(from, to, self.weights);
        let mut distances: HashMap<Point, Distance> = HashMap::new();
        let mut visited = PointSet::with_obstacles(self.index.points(), &[from, to]);

        let mut stalled = 0usize;
        let mut prev_dist: Distance = 0;

        distances.insert(from, 0);
        frontier.push(from);

        while let Some(node) = frontier.pop() {
            // stale copy of an already finalized position
            if visited.get(&node) {
                continue;
            }
            visited.set(node);

            let mut dist = distances[&node];

            if node == to {
                return LegOutcome::Reached(dist);
            }

            if let Some(cached) = relaxed.get(&node) {
                stats.bump_cache_hits();
                dist = cached;
                distances.insert(node, dist);
            } else if from.manhattan(&node) < dist {
                stats.bump_relaxations();
                debug!(
                    %from,
                    %node,
                    direct = from.manhattan(&node),
                    accumulated = dist,
                    "detour detected, relaxing"
                );

                // placeholder so nested searches do not re-solve this node
                relaxed.insert(node, dist);
                if let LegOutcome::Reached(shorter) = self.relax(from, node, relaxed, stats) {
                    dist = dist.min(shorter);
                }
                distances.insert(node, dist);
                relaxed.insert(node, dist);

                debug!(%from, %node, dist, "relaxation done");
            }

            if dist < prev_dist {
                stalled = 0;
                prev_dist = dist;
            } else {
                stalled += 1;
            }
            if stalled > self.stall_cutoff {
                stats.bump_stall_cutoffs();
                debug!(%from, %to, stalled, "stall cutoff reached, giving up");
                return LegOutcome::Infeasible(Infeasibility::StallCutoff);
            }

            stats.bump_expansions();

            let x_step = probe.x_offset(&node, &to);
            let y_step = probe.y_offset(&node, &to);
            trace!(%node, dist, x_step, y_step, "expanding");

            for neighbor in node.unit_neighbors() {
                offer(neighbor, dist + 1, &visited, &mut distances, &mut frontier);
            }
            if x_step != 0 {
                offer(
                    node.shifted_col(x_step),
                    dist + x_step.unsigned_abs(),
                    &visited,
                    &mut distances,
                    &mut frontier,
                );
            }
            if y_step != 0 {
                offer(
                    node.shifted_row(y_step),
                    dist + y_step.unsigned_abs(),
                    &visited,
                    &mut distances,
                    &mut frontier,
                );
            }
        }

        stats.bump_exhausted_frontiers();
        debug!(%from, %to, "frontier exhausted");
        LegOutcome::Infeasible(Infeasibility::FrontierExhausted)
    }
}

/// Pushes `point` with candidate cost `cost`, keeping the smaller of the
/// known and candidate costs. Finalized positions are left alone.
fn offer(
    point: Point,
    cost: Distance,
    visited: &PointSet,
    distances: &mut HashMap<Point, Distance>,
    frontier: &mut Frontier,
) {
    if visited.get(&point) {
        return;
    }
    distances
        .entry(point)
        .and_modify(|best| *best = (*best).min(cost))
        .or_insert(cost);
    frontier.push(point);
}
