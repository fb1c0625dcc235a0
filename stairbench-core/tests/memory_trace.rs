//! Allocation-tracker behavior with the allocator actually installed.
//!
//! Kept as a single test function: peak readings are process-global, and
//! one sequential body keeps unrelated test-harness allocations out of the
//! traced windows.

use stairbench_core::{measure_memory, MemoryTrace, TrackingAllocator};

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

fn allocate_megabyte(n: u64) -> u128 {
    let table = vec![0u128; 65_536 * n as usize];
    table.len() as u128
}

fn allocate_nothing(n: u64) -> u128 {
    u128::from(n) * 2
}

#[test]
fn peak_tracking_resets_between_traces() {
    // A traced 1 MiB allocation is observed in full.
    let (result, peak_large) = measure_memory(|| allocate_megabyte(1));
    assert_eq!(result, 65_536);
    assert!(
        peak_large >= 1024 * 1024,
        "peak {peak_large} should cover the 1 MiB table"
    );

    // A subsequent allocation-free trace must not inherit the previous
    // high-water mark.
    let (_, peak_small) = measure_memory(|| allocate_nothing(21));
    assert!(
        peak_small < 1024 * 1024,
        "peak {peak_small} leaked from the previous trace"
    );

    // Peak reflects the high-water mark, not the live count at exit:
    // the table is dropped inside the closure, yet the peak stays.
    let (_, peak_dropped) = measure_memory(|| {
        let _ = allocate_megabyte(2);
        0u128
    });
    assert!(peak_dropped >= 2 * 1024 * 1024);

    // Identical traced invocations report identical peaks: the tracker is
    // reset, not merely re-read, between them.
    let (_, first) = measure_memory(|| allocate_megabyte(1));
    let (_, second) = measure_memory(|| allocate_megabyte(1));
    assert_eq!(first, second);

    // Readings outside any trace stay untouched by raw allocations.
    let trace = MemoryTrace::start();
    let baseline = trace.peak();
    drop(trace);
    let _noise = vec![0u8; 4096];
    let trace = MemoryTrace::start();
    assert_eq!(trace.peak(), baseline);
}
