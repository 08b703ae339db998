use hashbrown::HashMap;
use std::{cmp::Reverse, collections::BinaryHeap};
use tracing::{debug, trace};

use crate::{
    grid::{Distance, Point},
    sets::{obstacles::ObstacleIndex, visited::PointSet},
    statistics::Stats,
};

/// Exact shortest paths between tour points, computed on a visibility graph.
///
/// The vertices are the obstacle points and their four unit neighbors, the
/// "waypoints". Every obstacle is joined to its neighbors by unit edges, and
/// two waypoints are joined by an edge of their Manhattan length whenever one
/// of the two L-shaped paths between them (or the straight segment, for
/// aligned waypoints) avoids every obstacle. A shortest grid path around point
/// obstacles only needs to turn next to an obstacle, so Dijkstra on this graph
/// yields exact leg lengths.
///
/// # Invariants
/// - Edges never cross an obstacle cell, endpoints of the query included.
/// - The graph only depends on the obstacle set, so one graph serves every
///   leg of a tour.
pub struct VisibilityGraph<'a> {
    index: &'a ObstacleIndex,
    edges: HashMap<Point, Vec<(Point, Distance)>>,
}

impl<'a> VisibilityGraph<'a> {
    /// Builds the graph in O(W² log k) for `W` waypoints.
    pub fn build(index: &'a ObstacleIndex) -> Self {
        let mut graph = VisibilityGraph {
            index,
            edges: HashMap::new(),
        };

        let mut waypoints = Vec::with_capacity(index.points().len() * 4);
        for &obstacle in index.points() {
            for neighbor in obstacle.unit_neighbors() {
                graph.add_edge(obstacle, neighbor, 1);
                if !index.contains(&neighbor) {
                    waypoints.push(neighbor);
                }
            }
        }
        waypoints.sort_unstable();
        waypoints.dedup();

        for (i, &a) in waypoints.iter().enumerate() {
            for &b in &waypoints[i + 1..] {
                if graph.sees(&a, &b) {
                    graph.add_edge(a, b, a.manhattan(&b));
                }
            }
        }

        debug!(
            obstacles = index.points().len(),
            waypoints = waypoints.len(),
            "visibility graph built"
        );
        graph
    }

    fn add_edge(&mut self, a: Point, b: Point, weight: Distance) {
        self.edges.entry(a).or_default().push((b, weight));
        self.edges.entry(b).or_default().push((a, weight));
    }

    /// Whether a Manhattan-length path from `a` to `b` with at most one turn
    /// avoids every obstacle.
    fn sees(&self, a: &Point, b: &Point) -> bool {
        if a.col == b.col || a.row == b.row {
            return self.index.segment_clear(a, b);
        }
        [Point::new(a.col, b.row), Point::new(b.col, a.row)]
            .iter()
            .any(|corner| {
                !self.index.contains(corner)
                    && self.index.segment_clear(a, corner)
                    && self.index.segment_clear(corner, b)
            })
    }

    /// Shortest distances from `start` to each of `targets`.
    ///
    /// Every obstacle other than `start` and `targets` blocks, and the search
    /// never routes through a target on its way to another one. Targets that
    /// cannot be reached are missing from the returned map.
    pub fn distances_from(
        &self,
        start: Point,
        targets: &[Point],
        stats: &mut Stats,
    ) -> HashMap<Point, Distance> {
        stats.bump_searches();

        let mut wanted = targets.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        let mut passable = wanted.clone();
        passable.push(start);
        let mut settled = PointSet::with_obstacles(self.index.points(), &passable);

        let mut distances: HashMap<Point, Distance> = HashMap::new();
        let mut reached: HashMap<Point, Distance> = HashMap::new();
        let mut heap = BinaryHeap::new();

        distances.insert(start, 0);
        heap.push(Reverse((0, start)));

        while let Some(Reverse((dist, vertex))) = heap.pop() {
            if settled.get(&vertex) {
                continue;
            }
            settled.set(vertex);
            stats.bump_expansions();
            trace!(%vertex, dist, "settled");

            if wanted.binary_search(&vertex).is_ok() {
                reached.insert(vertex, dist);
                if reached.len() == wanted.len() {
                    return reached;
                }
                if vertex != start {
                    continue;
                }
            }

            for &(next, weight) in self.edges.get(&vertex).into_iter().flatten() {
                if settled.get(&next) {
                    continue;
                }
                let cost = dist + weight;
                if distances.get(&next).is_none_or(|&known| cost < known) {
                    distances.insert(next, cost);
                    heap.push(Reverse((cost, next)));
                }
            }
        }

        stats.bump_exhausted_frontiers();
        debug!(%start, reached = reached.len(), wanted = wanted.len(), "graph exhausted");
        reached
    }
}
