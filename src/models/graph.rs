//! Weighted undirected graph.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{Edge, GraphError, Vertex};

/// A weighted undirected graph: a vertex set plus an edge set keyed by
/// normalized endpoint pair.
///
/// Every edge's endpoints must be members of the vertex set; weights are
/// finite and non-negative; self-loops and duplicate pairs are rejected.
/// Edges iterate in endpoint-pair order, so two graphs with the same
/// content behave identically regardless of insertion order.
///
/// # Examples
///
/// ```
/// use greedy_spanner::models::{Edge, WeightedGraph};
///
/// let g = WeightedGraph::new(
///     0..3,
///     vec![
///         Edge::new(0, 1, 1.0).unwrap(),
///         Edge::new(1, 2, 2.0).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.weight(2, 1), Some(2.0));
/// assert!(g.is_connected());
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    vertices: BTreeSet<Vertex>,
    weights: BTreeMap<(Vertex, Vertex), f64>,
    adjacency: BTreeMap<Vertex, Vec<(Vertex, f64)>>,
}

impl WeightedGraph {
    /// Creates a graph from a vertex set and an edge collection.
    ///
    /// Returns the first validation failure encountered: an endpoint
    /// outside the vertex set or a duplicate endpoint pair. (Self-loops
    /// and invalid weights cannot occur here; [`Edge::new`] already
    /// rejects them.)
    pub fn new(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_vertices(vertices);
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Creates a graph with the given vertices and no edges.
    pub fn with_vertices(vertices: impl IntoIterator<Item = Vertex>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            weights: BTreeMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Adds an edge, validating endpoint membership and uniqueness.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let (u, v) = edge.endpoints();
        for endpoint in [u, v] {
            if !self.vertices.contains(&endpoint) {
                return Err(GraphError::UnknownVertex {
                    u,
                    v,
                    missing: endpoint,
                });
            }
        }
        if self.weights.contains_key(&(u, v)) {
            return Err(GraphError::DuplicateEdge { u, v });
        }
        self.weights.insert((u, v), edge.weight());
        self.adjacency.entry(u).or_default().push((v, edge.weight()));
        self.adjacency.entry(v).or_default().push((u, edge.weight()));
        Ok(())
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Edges in endpoint-pair order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.weights
            .iter()
            .map(|(&(u, v), &weight)| Edge::from_parts(u, v, weight))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the vertex is a member of the vertex set.
    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns `true` if the unordered pair `{a, b}` is an edge.
    pub fn contains_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.weight(a, b).is_some()
    }

    /// Weight of the edge `{a, b}`, in either endpoint order.
    pub fn weight(&self, a: Vertex, b: Vertex) -> Option<f64> {
        let pair = if a < b { (a, b) } else { (b, a) };
        self.weights.get(&pair).copied()
    }

    /// Neighbors of a vertex with the connecting edge weights.
    ///
    /// Empty for isolated and unknown vertices.
    pub fn neighbors(&self, vertex: Vertex) -> impl Iterator<Item = (Vertex, f64)> + '_ {
        self.adjacency
            .get(&vertex)
            .into_iter()
            .flat_map(|list| list.iter().copied())
    }

    /// Returns `true` if every vertex is reachable from every other.
    ///
    /// Breadth-first reachability from one arbitrary vertex. Graphs with
    /// zero or one vertex are connected vacuously.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.vertices.iter().next() else {
            return true;
        };
        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            for (next, _) in self.neighbors(vertex) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen.len() == self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph {
        WeightedGraph::new(
            0..3,
            vec![
                Edge::new(0, 1, 1.0).expect("valid"),
                Edge::new(1, 2, 2.0).expect("valid"),
                Edge::new(0, 2, 4.0).expect("valid"),
            ],
        )
        .expect("valid graph")
    }

    #[test]
    fn test_graph_counts() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_weight_lookup_either_order() {
        let g = triangle();
        assert_eq!(g.weight(1, 2), Some(2.0));
        assert_eq!(g.weight(2, 1), Some(2.0));
        assert_eq!(g.weight(0, 2), Some(4.0));
        assert_eq!(g.weight(1, 1), None);
    }

    #[test]
    fn test_contains() {
        let g = triangle();
        assert!(g.contains_vertex(2));
        assert!(!g.contains_vertex(3));
        assert!(g.contains_edge(2, 0));
        assert!(!g.contains_edge(0, 3));
    }

    #[test]
    fn test_unknown_vertex_rejected() {
        let result = WeightedGraph::new(0..2, vec![Edge::new(0, 5, 1.0).expect("valid")]);
        assert_eq!(
            result.unwrap_err(),
            GraphError::UnknownVertex {
                u: 0,
                v: 5,
                missing: 5
            }
        );
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let result = WeightedGraph::new(
            0..2,
            vec![
                Edge::new(0, 1, 1.0).expect("valid"),
                Edge::new(1, 0, 3.0).expect("valid"),
            ],
        );
        assert_eq!(result.unwrap_err(), GraphError::DuplicateEdge { u: 0, v: 1 });
    }

    #[test]
    fn test_edges_iterate_in_pair_order() {
        let g = WeightedGraph::new(
            0..4,
            vec![
                Edge::new(2, 3, 1.0).expect("valid"),
                Edge::new(0, 1, 5.0).expect("valid"),
                Edge::new(0, 3, 2.0).expect("valid"),
            ],
        )
        .expect("valid graph");
        let pairs: Vec<_> = g.edges().map(|e| e.endpoints()).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 3), (2, 3)]);
    }

    #[test]
    fn test_neighbors() {
        let g = triangle();
        let mut around_zero: Vec<_> = g.neighbors(0).collect();
        around_zero.sort_by_key(|&(v, _)| v);
        assert_eq!(around_zero, vec![(1, 1.0), (2, 4.0)]);
        assert_eq!(g.neighbors(9).count(), 0);
    }

    #[test]
    fn test_isolated_vertex_has_no_neighbors() {
        let g = WeightedGraph::new(0..3, vec![Edge::new(0, 1, 1.0).expect("valid")])
            .expect("valid graph");
        assert_eq!(g.neighbors(2).count(), 0);
    }

    #[test]
    fn test_connectivity() {
        assert!(triangle().is_connected());

        let disconnected = WeightedGraph::new(
            0..4,
            vec![
                Edge::new(0, 1, 1.0).expect("valid"),
                Edge::new(2, 3, 1.0).expect("valid"),
            ],
        )
        .expect("valid graph");
        assert!(!disconnected.is_connected());
    }

    #[test]
    fn test_connectivity_degenerate() {
        assert!(WeightedGraph::with_vertices([]).is_connected());
        assert!(WeightedGraph::with_vertices([7]).is_connected());
        assert!(!WeightedGraph::with_vertices([1, 2]).is_connected());
    }

    #[test]
    fn test_with_vertices_starts_empty() {
        let g = WeightedGraph::with_vertices(0..5);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 0);
    }
}
