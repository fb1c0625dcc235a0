#![warn(missing_docs)]
//! # StairBench
//!
//! Benchmark harness comparing two solutions to the staircase-climbing
//! problem — pure recursion versus bottom-up tabulation — under wall-clock
//! timing and peak-memory instrumentation.
//!
//! - **Paired probes**: each trial measures time and traced heap peak as
//!   two invocations of the same pure function, cross-checked for equal
//!   results
//! - **Median-centric statistics**: median, mean, min, max and sample
//!   standard deviation per dimension, per (algorithm, size) pair
//! - **Ordered report model**: results keep the order configurations were
//!   supplied in, queryable by (algorithm, size)
//! - **Three artifacts**: detailed text report, CSV, optional JSON
//! - **Safety ceilings**: the trial runner refuses sizes the exponential
//!   algorithm cannot finish or the result type cannot represent
//!
//! ## Quick Start
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: stairbench::TrackingAllocator = stairbench::TrackingAllocator;
//!
//! fn main() -> anyhow::Result<()> {
//!     stairbench::run()
//! }
//! ```

// Re-export core types
pub use stairbench_core::{
    measure_memory, measure_time, pin_to_cpu, run_trials, AlgorithmDef, MemoryTrace, Sample,
    Timer, TrackingAllocator, TrialError, TrialOutcome, DEFAULT_REPETITIONS,
};

// Re-export the algorithms and their registry
pub use stairbench_algos::{
    count_ways_recursive, count_ways_tabulated, ALGORITHMS, MAX_RECURSIVE_N, MAX_REPRESENTABLE_N,
};

// Re-export statistics
pub use stairbench_stats::{aggregate, AggregateStats, DimensionStats, StatsError};

// Re-export the report surface
pub use stairbench_report::{
    format_memory, format_time, generate_csv_report, generate_json_report, generate_text_report,
    AlgorithmSection, AlgorithmSummary, DataSheet, Record, Report, SizeEntry,
};

/// Run the StairBench CLI harness.
///
/// Call this from your binary's `main()`.
pub use stairbench_cli::run;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        aggregate, run_trials, AggregateStats, AlgorithmDef, DataSheet, Report, Sample,
        TrialOutcome, ALGORITHMS,
    };
}
