//! Deterministic edge ordering.
//!
//! The greedy builder must see edges in a reproducible sequence: ascending
//! by weight, with weight ties broken by the lexicographically smaller
//! endpoint pair. Endpoint pairs are unique within a graph, so the
//! composite key `(weight, u, v)` leaves no ties and the order is total,
//! independent of input insertion order.

use std::cmp::Ordering;

use crate::models::{Edge, WeightedGraph};

/// Compares two edges by the composite key `(weight, u, v)`.
pub fn compare_edges(a: &Edge, b: &Edge) -> Ordering {
    a.weight()
        .partial_cmp(&b.weight())
        .expect("edge weights should not be NaN")
        .then_with(|| a.endpoints().cmp(&b.endpoints()))
}

/// Returns all edges of the graph sorted by `(weight, u, v)`.
///
/// # Examples
///
/// ```
/// use greedy_spanner::models::{Edge, WeightedGraph};
/// use greedy_spanner::ordering::sorted_edges;
///
/// let g = WeightedGraph::new(
///     0..3,
///     vec![
///         Edge::new(0, 2, 2.0).unwrap(),
///         Edge::new(1, 2, 1.0).unwrap(),
///         Edge::new(0, 1, 1.0).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// let order: Vec<_> = sorted_edges(&g).iter().map(|e| e.endpoints()).collect();
/// assert_eq!(order, vec![(0, 1), (1, 2), (0, 2)]);
/// ```
pub fn sorted_edges(graph: &WeightedGraph) -> Vec<Edge> {
    let mut edges: Vec<Edge> = graph.edges().collect();
    edges.sort_by(compare_edges);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_weight_first() {
        let g = WeightedGraph::new(
            0..4,
            vec![
                Edge::new(0, 1, 3.0).expect("valid"),
                Edge::new(2, 3, 1.0).expect("valid"),
                Edge::new(1, 2, 2.0).expect("valid"),
            ],
        )
        .expect("valid graph");
        let weights: Vec<_> = sorted_edges(&g).iter().map(|e| e.weight()).collect();
        assert_eq!(weights, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_ties_broken_by_endpoint_pair() {
        let g = WeightedGraph::new(
            0..4,
            vec![
                Edge::new(2, 3, 1.0).expect("valid"),
                Edge::new(0, 3, 1.0).expect("valid"),
                Edge::new(0, 1, 1.0).expect("valid"),
                Edge::new(1, 2, 1.0).expect("valid"),
            ],
        )
        .expect("valid graph");
        let order: Vec<_> = sorted_edges(&g).iter().map(|e| e.endpoints()).collect();
        assert_eq!(order, vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_order_independent_of_insertion() {
        let edges = vec![
            Edge::new(0, 1, 2.0).expect("valid"),
            Edge::new(1, 2, 1.0).expect("valid"),
            Edge::new(0, 2, 1.0).expect("valid"),
        ];
        let mut reversed = edges.clone();
        reversed.reverse();

        let a = WeightedGraph::new(0..3, edges).expect("valid graph");
        let b = WeightedGraph::new(0..3, reversed).expect("valid graph");
        assert_eq!(sorted_edges(&a), sorted_edges(&b));
    }

    #[test]
    fn test_empty_graph() {
        let g = WeightedGraph::with_vertices(0..3);
        assert!(sorted_edges(&g).is_empty());
    }
}
