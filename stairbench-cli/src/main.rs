//! StairBench binary entry point.
//!
//! Installs the tracking allocator so the memory probe sees every heap
//! allocation made by the measured algorithms.

use stairbench_core::TrackingAllocator;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

fn main() -> anyhow::Result<()> {
    stairbench_cli::run()
}
