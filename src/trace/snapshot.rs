//! Step-tagged captures of the spanner's edge set.

use serde::Serialize;

use crate::models::{Edge, Vertex, WeightedGraph};

/// An immutable copy of the spanner's edge set at one step.
///
/// Captured after every edge the builder considers, whether or not it was
/// accepted, so a consumer can replay construction frame by frame.
///
/// # Examples
///
/// ```
/// use greedy_spanner::models::{Edge, WeightedGraph};
/// use greedy_spanner::trace::Snapshot;
///
/// let g = WeightedGraph::new(0..2, vec![Edge::new(0, 1, 1.0).unwrap()]).unwrap();
/// let snap = Snapshot::capture(1, &g);
/// assert_eq!(snap.step(), 1);
/// assert_eq!(snap.edge_count(), 1);
/// assert!(snap.contains_edge(1, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    step: usize,
    edges: Vec<Edge>,
}

impl Snapshot {
    /// Captures the edge set of `graph`, tagged with a 1-based step number.
    pub fn capture(step: usize, graph: &WeightedGraph) -> Self {
        Self {
            step,
            edges: graph.edges().collect(),
        }
    }

    /// 1-based step this snapshot was taken after.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Edges present at capture time, in endpoint-pair order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges at capture time.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the unordered pair `{a, b}` was present.
    pub fn contains_edge(&self, a: Vertex, b: Vertex) -> bool {
        let pair = if a < b { (a, b) } else { (b, a) };
        self.edges.iter().any(|e| e.endpoints() == pair)
    }
}

/// The ordered, replayable record of the spanner's evolution.
///
/// One snapshot per edge processed; after a run its length equals the edge
/// count of the input graph. Lookup is 1-based to match step numbering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotSequence {
    snapshots: Vec<Snapshot>,
}

impl SnapshotSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot. Used by the builder during construction.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// The snapshot taken after the given 1-based step, if it exists.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        step.checked_sub(1).and_then(|i| self.snapshots.get(i))
    }

    /// Number of snapshots (steps processed so far).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if no steps have been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterates snapshots in step order.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
