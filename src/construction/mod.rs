//! Greedy spanner construction.
//!
//! - [`greedy_spanner`] — the greedy acceptance loop with the default
//!   Dijkstra oracle, O(m · (n + m) log n)
//! - [`greedy_spanner_with_oracle`] — same loop, caller-supplied oracle
//! - [`SpannerRun`] — the finished spanner plus its full trace

mod greedy;

pub use greedy::{greedy_spanner, greedy_spanner_with_oracle, SpannerRun};
