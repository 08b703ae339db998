use serde::Serialize;
use tracing::{info, warn};

use crate::{
    Result,
    grid::{Distance, Point, check_input_range},
    search::{
        Infeasibility, LegOutcome, RelaxedCache, SearchConfig, SearchEngine, VisibilityGraph,
    },
    sets::obstacles::ObstacleIndex,
    statistics::Stats,
};

/// Result of a whole cyclic tour.
#[derive(PartialEq, Eq, Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TourOutcome {
    /// Every leg was reached; `legs[i]` is the length of leg `i`.
    Complete { total: Distance, legs: Vec<Distance> },
    /// Leg `leg` (0-based) could not be completed. Later legs were not searched.
    Infeasible {
        leg: usize,
        from: Point,
        to: Point,
        reason: Infeasibility,
        partial: Distance,
    },
}

impl TourOutcome {
    /// The single integer reported for the tour: the total length, or `-1`.
    pub fn answer(&self) -> i64 {
        match self {
            TourOutcome::Complete { total, .. } => i64::try_from(*total).unwrap_or(i64::MAX),
            TourOutcome::Infeasible { .. } => LegOutcome::INFEASIBLE_SENTINEL,
        }
    }
}

/// Cyclic tour over a fixed sequence of points, each of them an obstacle for
/// the legs it is not an endpoint of.
///
/// The obstacle index is built once and shared read-only by every leg.
pub struct Tour {
    points: Vec<Point>,
    index: ObstacleIndex,
    config: SearchConfig,
}

impl Tour {
    /// Builds the obstacle index of a tour.
    ///
    /// Fails with [`crate::Error::OutOfRange`] if a point lies outside
    /// [`crate::grid::INPUT_COORDS`].
    pub fn new(points: Vec<Point>, config: SearchConfig) -> Result<Self> {
        check_input_range(&points)?;
        let index = ObstacleIndex::build(&points);
        Ok(Tour {
            points,
            index,
            config,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Searches every leg `points[i - 1] -> points[i % N]` for `i` in `1..=N`
    /// and sums their lengths.
    ///
    /// Each leg starts with an empty detour cache. The first infeasible leg
    /// ends the computation.
    pub fn solve(&self, stats: &mut Stats) -> TourOutcome {
        let n = self.points.len();
        let engine = SearchEngine::new(
            &self.index,
            self.config.weights,
            self.config.cutoff_for(n),
        );
        info!(
            points = n,
            stall_cutoff = engine.stall_cutoff(),
            "starting tour"
        );

        let mut relaxed = RelaxedCache::new();
        let mut legs = Vec::with_capacity(n);
        let mut total: Distance = 0;

        for i in 1..=n {
            let from = self.points[i - 1];
            let to = self.points[i % n];

            let outcome = engine.relax(from, to, &mut relaxed, stats);
            relaxed.clear();

            match outcome {
                LegOutcome::Reached(distance) => {
                    info!(leg = i - 1, %from, %to, distance, "leg done");
                    legs.push(distance);
                    total += distance;
                }
                LegOutcome::Infeasible(reason) => {
                    warn!(leg = i - 1, %from, %to, %reason, "leg infeasible, abandoning tour");
                    return TourOutcome::Infeasible {
                        leg: i - 1,
                        from,
                        to,
                        reason,
                        partial: total,
                    };
                }
            }
        }

        info!(total, "tour done");
        TourOutcome::Complete { total, legs }
    }

    /// Computes the exact length of every leg on a [`VisibilityGraph`].
    ///
    /// One graph search from `points[i]` serves both legs touching it, for
    /// every odd `i`; with an odd number of points the closing leg gets a
    /// search of its own. Legs are reported in tour order and the first
    /// unreachable one ends the computation, as in [`Tour::solve`].
    pub fn solve_exact(&self, stats: &mut Stats) -> TourOutcome {
        let n = self.points.len();
        let graph = VisibilityGraph::build(&self.index);
        info!(points = n, "starting exact tour");

        let mut legs = Vec::with_capacity(n);
        let mut total: Distance = 0;

        for first in (0..n).step_by(2) {
            let hub = (first + 1) % n;
            let served = first..(first + 2).min(n);

            // the endpoint of each served leg that is not the hub
            let targets: Vec<Point> = served
                .clone()
                .map(|leg| {
                    if leg == hub {
                        self.points[(leg + 1) % n]
                    } else {
                        self.points[leg]
                    }
                })
                .collect();
            let reached = graph.distances_from(self.points[hub], &targets, stats);

            for (leg, target) in served.zip(&targets) {
                let from = self.points[leg];
                let to = self.points[(leg + 1) % n];
                match reached.get(target) {
                    Some(&distance) => {
                        info!(leg, %from, %to, distance, "exact leg done");
                        legs.push(distance);
                        total += distance;
                    }
                    None => {
                        warn!(leg, %from, %to, "leg unreachable, abandoning tour");
                        return TourOutcome::Infeasible {
                            leg,
                            from,
                            to,
                            reason: Infeasibility::FrontierExhausted,
                            partial: total,
                        };
                    }
                }
            }
        }

        info!(total, "exact tour done");
        TourOutcome::Complete { total, legs }
    }
}
