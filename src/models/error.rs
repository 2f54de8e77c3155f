//! Validation error types.

use thiserror::Error;

use super::Vertex;

/// Rejected input at graph or edge construction time.
///
/// Each variant names the offending edge so the caller can correct it. An
/// invalid graph is never partially built: construction either completes
/// fully or returns one of these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GraphError {
    /// An edge connects a vertex to itself.
    #[error("edge at vertex {vertex} is a self-loop")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: Vertex,
    },
    /// An edge weight is negative or non-finite.
    #[error("edge ({u}, {v}) has invalid weight {weight}")]
    InvalidWeight {
        /// Smaller endpoint.
        u: Vertex,
        /// Larger endpoint.
        v: Vertex,
        /// The rejected weight.
        weight: f64,
    },
    /// An edge endpoint is missing from the declared vertex set.
    #[error("edge ({u}, {v}) references vertex {missing} outside the vertex set")]
    UnknownVertex {
        /// Smaller endpoint.
        u: Vertex,
        /// Larger endpoint.
        v: Vertex,
        /// The endpoint that is not a vertex of the graph.
        missing: Vertex,
    },
    /// The same unordered endpoint pair appears more than once.
    #[error("duplicate edge ({u}, {v})")]
    DuplicateEdge {
        /// Smaller endpoint.
        u: Vertex,
        /// Larger endpoint.
        v: Vertex,
    },
}

/// Rejected stretch factor.
///
/// A spanner cannot guarantee distances shorter than the true shortest
/// path, so stretch factors below 1 (and non-finite values) are rejected
/// before the construction loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("stretch factor must be a finite value >= 1, got {stretch}")]
pub struct InvalidStretch {
    /// The rejected value.
    pub stretch: f64,
}
