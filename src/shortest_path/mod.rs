//! Single-pair shortest-path queries.
//!
//! [`ShortestPathOracle`] is the seam the spanner builder talks through:
//! an implementation answers "what is the cheapest path between these two
//! vertices using only the edges currently in the graph". The default
//! implementation is [`Dijkstra`], recomputed fresh per query; an
//! incremental implementation may be substituted as long as the observable
//! distances are identical.

mod dijkstra;

pub use dijkstra::Dijkstra;

use crate::models::{Vertex, WeightedGraph};

/// Single-pair shortest-path distance oracle.
///
/// Returns the minimum total weight over paths from `source` to `target`,
/// `Some(0.0)` when `source == target` and the vertex exists, or `None`
/// when no path exists or either endpoint is not a vertex of the graph.
/// `None` plays the role of an infinite distance: it exceeds every finite
/// threshold.
///
/// Implementations must answer against the graph exactly as passed. The
/// builder grows its spanner between calls, and a cached result computed
/// against an older edge set would be wrong.
pub trait ShortestPathOracle {
    /// Shortest-path distance from `source` to `target`, `None` if
    /// unreachable.
    fn distance(&self, graph: &WeightedGraph, source: Vertex, target: Vertex) -> Option<f64>;
}
