//! Binary-heap shortest-path search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::models::{Vertex, WeightedGraph};

use super::ShortestPathOracle;

/// Priority-queue relaxation for graphs with non-negative edge weights.
///
/// Every query runs fresh against the graph as passed and exits as soon as
/// the target is settled, in O((n + m) log n). The struct holds no state,
/// so callers may mutate the graph freely between queries.
///
/// # Examples
///
/// ```
/// use greedy_spanner::models::{Edge, WeightedGraph};
/// use greedy_spanner::shortest_path::{Dijkstra, ShortestPathOracle};
///
/// let g = WeightedGraph::new(
///     0..4,
///     vec![
///         Edge::new(0, 1, 1.0).unwrap(),
///         Edge::new(1, 2, 1.0).unwrap(),
///         Edge::new(0, 2, 5.0).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(Dijkstra.distance(&g, 0, 2), Some(2.0));
/// assert_eq!(Dijkstra.distance(&g, 0, 3), None); // vertex 3 is isolated
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

/// Heap entry ordered so the smallest tentative distance pops first.
#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    dist: f64,
    vertex: Vertex,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .partial_cmp(&self.dist)
            .expect("distances should not be NaN")
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPathOracle for Dijkstra {
    fn distance(&self, graph: &WeightedGraph, source: Vertex, target: Vertex) -> Option<f64> {
        if !graph.contains_vertex(source) || !graph.contains_vertex(target) {
            return None;
        }
        if source == target {
            return Some(0.0);
        }

        let mut best: HashMap<Vertex, f64> = HashMap::new();
        let mut heap = BinaryHeap::new();
        best.insert(source, 0.0);
        heap.push(State {
            dist: 0.0,
            vertex: source,
        });

        while let Some(State { dist, vertex }) = heap.pop() {
            if vertex == target {
                return Some(dist);
            }
            // Stale entry for a vertex already settled at a shorter distance.
            if best.get(&vertex).map_or(false, |&d| dist > d) {
                continue;
            }
            for (next, weight) in graph.neighbors(vertex) {
                let candidate = dist + weight;
                if best.get(&next).map_or(true, |&d| candidate < d) {
                    best.insert(next, candidate);
                    heap.push(State {
                        dist: candidate,
                        vertex: next,
                    });
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    fn graph(vertices: usize, edges: &[(Vertex, Vertex, f64)]) -> WeightedGraph {
        WeightedGraph::new(
            0..vertices,
            edges
                .iter()
                .map(|&(u, v, w)| Edge::new(u, v, w).expect("valid")),
        )
        .expect("valid graph")
    }

    #[test]
    fn test_direct_edge() {
        let g = graph(2, &[(0, 1, 3.5)]);
        assert_eq!(Dijkstra.distance(&g, 0, 1), Some(3.5));
        assert_eq!(Dijkstra.distance(&g, 1, 0), Some(3.5));
    }

    #[test]
    fn test_two_hop_beats_direct() {
        let g = graph(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
        assert_eq!(Dijkstra.distance(&g, 0, 2), Some(2.0));
    }

    #[test]
    fn test_direct_beats_detour() {
        let g = graph(3, &[(0, 1, 4.0), (1, 2, 4.0), (0, 2, 5.0)]);
        assert_eq!(Dijkstra.distance(&g, 0, 2), Some(5.0));
    }

    #[test]
    fn test_unreachable() {
        let g = graph(4, &[(0, 1, 1.0), (2, 3, 1.0)]);
        assert_eq!(Dijkstra.distance(&g, 0, 2), None);
        assert_eq!(Dijkstra.distance(&g, 3, 1), None);
    }

    #[test]
    fn test_same_vertex_is_zero() {
        let g = graph(2, &[(0, 1, 1.0)]);
        assert_eq!(Dijkstra.distance(&g, 1, 1), Some(0.0));
    }

    #[test]
    fn test_unknown_endpoint_is_unreachable() {
        let g = graph(2, &[(0, 1, 1.0)]);
        assert_eq!(Dijkstra.distance(&g, 0, 9), None);
        assert_eq!(Dijkstra.distance(&g, 9, 0), None);
        assert_eq!(Dijkstra.distance(&g, 9, 9), None);
    }

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::with_vertices(0..3);
        assert_eq!(Dijkstra.distance(&g, 0, 2), None);
        assert_eq!(Dijkstra.distance(&g, 0, 0), Some(0.0));
    }

    #[test]
    fn test_zero_weight_edges() {
        let g = graph(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
        assert_eq!(Dijkstra.distance(&g, 0, 2), Some(0.0));
    }

    #[test]
    fn test_longer_chain() {
        let g = graph(
            5,
            &[
                (0, 1, 2.0),
                (1, 2, 2.0),
                (2, 3, 2.0),
                (3, 4, 2.0),
                (0, 4, 9.0),
            ],
        );
        assert_eq!(Dijkstra.distance(&g, 0, 4), Some(8.0));
    }

    #[test]
    fn test_fresh_result_after_mutation() {
        let mut g = graph(3, &[(0, 1, 1.0)]);
        assert_eq!(Dijkstra.distance(&g, 0, 2), None);
        g.add_edge(Edge::new(1, 2, 1.0).expect("valid"))
            .expect("insertable");
        assert_eq!(Dijkstra.distance(&g, 0, 2), Some(2.0));
    }
}
