#![warn(missing_docs)]
//! StairBench Statistics
//!
//! Reduces a sample set to median-centric descriptive statistics. The
//! time and memory dimensions are aggregated independently; no
//! cross-dimension correlation is computed.

mod summary;

pub use summary::{aggregate, AggregateStats, DimensionStats, StatsError};
