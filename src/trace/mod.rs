//! Replay records of greedy construction.
//!
//! - [`Snapshot`] / [`SnapshotSequence`] — the spanner's edge set after
//!   every processed edge, for frame-by-frame replay
//! - [`StepRecord`] / [`Decision`] — the per-step decision and the facts
//!   it was based on, for progress logs
//!
//! Both are produced by the builder and read-only afterwards.

mod snapshot;
mod step;

pub use snapshot::{Snapshot, SnapshotSequence};
pub use step::{Decision, StepRecord};
