//! Pure-Recursion Solution (brute force)
//!
//! Explores every step sequence with no memoization. Exponential time,
//! stack space linear in `n`.

/// Count the ways to climb `n` steps by brute-force recursion.
///
/// Every call branches into the `n-1` and `n-2` subproblems, recomputing
/// shared subtrees from scratch — O(2^n) time. Callers bound the input
/// size; see `MAX_RECURSIVE_N` in the crate root.
pub fn count_ways_recursive(n: u64) -> u128 {
    match n {
        0 => 0,
        1 => 1,
        2 => 2,
        _ => count_ways_recursive(n - 1) + count_ways_recursive(n - 2),
    }
}
