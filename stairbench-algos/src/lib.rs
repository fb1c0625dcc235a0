#![warn(missing_docs)]
//! Staircase-Counting Algorithms
//!
//! How many distinct ways are there to climb a staircase of `n` steps,
//! taking 1 or 2 steps at a time? Both implementations compute the shifted
//! Fibonacci recurrence `f(n) = f(n-1) + f(n-2)` with `f(1) = 1`,
//! `f(2) = 2` and `f(n <= 0) = 0` — one by brute-force recursion, one by
//! bottom-up tabulation.

mod recursive;
mod tabulated;

pub use recursive::count_ways_recursive;
pub use tabulated::count_ways_tabulated;

use stairbench_core::AlgorithmDef;

/// Largest input size whose count still fits in `u128`. `count_ways(186)`
/// overflows.
pub const MAX_REPRESENTABLE_N: u64 = 185;

/// Practical cost ceiling for the pure-recursive algorithm: beyond this the
/// exponential blow-up makes a trial run unreasonably long.
pub const MAX_RECURSIVE_N: u64 = 35;

/// The algorithms under comparison, in display order.
pub static ALGORITHMS: &[AlgorithmDef] = &[
    AlgorithmDef {
        id: "recursive",
        name: "Pure Recursion (brute force)",
        max_n: MAX_RECURSIVE_N,
        func: count_ways_recursive,
    },
    AlgorithmDef {
        id: "tabulated",
        name: "Bottom-Up Tabulation",
        max_n: MAX_REPRESENTABLE_N,
        func: count_ways_tabulated,
    },
];
