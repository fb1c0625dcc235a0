#![warn(missing_docs)]
//! StairBench Core - Measurement Runtime
//!
//! This crate provides the execution environment for trials:
//! - Wall-clock timing probe with a monotonic high-resolution clock
//! - Global allocator interceptor for peak-memory tracking
//! - Trial runner collecting one (duration, peak-memory) sample per trial
//! - CPU affinity pinning for stable timing readings

mod alloc;
mod measure;
mod runner;

pub use alloc::{measure_memory, MemoryTrace, TrackingAllocator};
pub use measure::{measure_time, pin_to_cpu, Timer};
pub use runner::{run_trials, Sample, TrialError, TrialOutcome, DEFAULT_REPETITIONS};

/// A staircase-counting algorithm registered for measurement.
#[derive(Debug, Clone)]
pub struct AlgorithmDef {
    /// Unique identifier used in logs and CSV rows
    pub id: &'static str,
    /// Human-readable name used in report sections
    pub name: &'static str,
    /// Largest input size this algorithm may be invoked with. For the
    /// pure-recursive algorithm this bounds runaway exponential cost; for
    /// the tabulated one it bounds the result to what `u128` can represent.
    pub max_n: u64,
    /// The counting function under measurement. Must be a deterministic
    /// pure function of its input.
    pub func: fn(u64) -> u128,
}
