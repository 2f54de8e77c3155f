//! Summary statistics over a finished construction.
//!
//! Pure measurement: nothing here mutates the graphs it reads.

use std::fmt;

use serde::Serialize;

use crate::models::WeightedGraph;

/// Edge-count and connectivity summary of a spanner against its input
/// graph.
///
/// # Examples
///
/// ```
/// use greedy_spanner::construction::greedy_spanner;
/// use greedy_spanner::models::{Edge, WeightedGraph};
/// use greedy_spanner::stats::summarize;
///
/// let edges = (0..4).flat_map(|u| ((u + 1)..4).map(move |v| Edge::new(u, v, 1.0).unwrap()));
/// let g = WeightedGraph::new(0..4, edges).unwrap();
/// let run = greedy_spanner(&g, 2.0).unwrap();
///
/// let stats = summarize(&g, run.spanner());
/// assert_eq!(stats.original_edges(), 6);
/// assert_eq!(stats.spanner_edges(), 3);
/// assert_eq!(stats.reduction_percent(), 50.0);
/// assert!(stats.connected());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannerStats {
    original_edges: usize,
    spanner_edges: usize,
    reduction_percent: f64,
    connected: bool,
}

impl SpannerStats {
    /// Edge count of the input graph.
    pub fn original_edges(&self) -> usize {
        self.original_edges
    }

    /// Edge count of the spanner.
    pub fn spanner_edges(&self) -> usize {
        self.spanner_edges
    }

    /// `100 * (1 - spanner / original)`, 0 when the input has no edges.
    pub fn reduction_percent(&self) -> f64 {
        self.reduction_percent
    }

    /// Whether the spanner is connected.
    pub fn connected(&self) -> bool {
        self.connected
    }
}

impl fmt::Display for SpannerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "original edges: {}", self.original_edges)?;
        writeln!(f, "spanner edges: {}", self.spanner_edges)?;
        writeln!(f, "reduction: {}%", self.reduction_percent)?;
        write!(f, "connected: {}", self.connected)
    }
}

/// Measures `spanner` against the graph it was built from.
pub fn summarize(original: &WeightedGraph, spanner: &WeightedGraph) -> SpannerStats {
    let original_edges = original.edge_count();
    let spanner_edges = spanner.edge_count();
    let reduction_percent = if original_edges == 0 {
        0.0
    } else {
        100.0 * (1.0 - spanner_edges as f64 / original_edges as f64)
    };
    SpannerStats {
        original_edges,
        spanner_edges,
        reduction_percent,
        connected: spanner.is_connected(),
    }
}
