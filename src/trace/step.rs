//! Per-step decision records.

use std::fmt;

use serde::Serialize;

use crate::models::Edge;

/// Whether a considered edge entered the spanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    /// The edge was added to the spanner.
    Accepted,
    /// The spanner already connected the endpoints within the stretch
    /// bound, so the edge was left out.
    Skipped,
}

/// The facts recorded for one step of the greedy loop.
///
/// Carries everything a progress log or visualization needs: the edge
/// under consideration, the shortest-path distance the oracle saw in the
/// spanner-so-far (`None` when the endpoints were still disconnected), the
/// acceptance threshold `t * w`, the decision, and the spanner's edge
/// count after the step. The `Display` form is one trace line:
///
/// ```text
/// STEP  4: SKIP  edge=(1,2)  dist=2  threshold=2  edges_now=3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    step: usize,
    edge: Edge,
    distance: Option<f64>,
    threshold: f64,
    decision: Decision,
    edges_after: usize,
}

impl StepRecord {
    /// Creates a record for one processed edge.
    pub fn new(
        step: usize,
        edge: Edge,
        distance: Option<f64>,
        threshold: f64,
        decision: Decision,
        edges_after: usize,
    ) -> Self {
        Self {
            step,
            edge,
            distance,
            threshold,
            decision,
            edges_after,
        }
    }

    /// 1-based step number.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The edge that was considered.
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Distance between the endpoints in the spanner before this step,
    /// `None` when they were disconnected.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Acceptance threshold `stretch * weight`.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The decision taken.
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// Spanner edge count after this step.
    pub fn edges_after(&self) -> usize {
        self.edges_after
    }

    /// Returns `true` if the edge was added.
    pub fn is_accepted(&self) -> bool {
        self.decision == Decision::Accepted
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = match self.decision {
            Decision::Accepted => "ADD ",
            Decision::Skipped => "SKIP",
        };
        let (u, v) = self.edge.endpoints();
        write!(
            f,
            "STEP {:2}: {}  edge=({},{})  dist={}  threshold={}  edges_now={}",
            self.step,
            action,
            u,
            v,
            self.distance.unwrap_or(f64::INFINITY),
            self.threshold,
            self.edges_after
        )
    }
}
