//! Allocation Tracking
//!
//! A global allocator wrapper that mirrors `System` and, while a trace is
//! active, counts live heap bytes and records the peak observed. The
//! binary under measurement must install it:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: stairbench_core::TrackingAllocator = stairbench_core::TrackingAllocator;
//! ```
//!
//! The tracker is process-wide mutable state. All access goes through the
//! scoped [`MemoryTrace`] handle, which owns a global mutex for its whole
//! lifetime: at most one trace is ever live, counters are reset on acquire
//! (never merely re-read), and tracking stops on every exit path because
//! the disable lives in `Drop`.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

static ENABLED: AtomicBool = AtomicBool::new(false);
static CURRENT: AtomicU64 = AtomicU64::new(0);
static PEAK: AtomicU64 = AtomicU64::new(0);

static TRACE_LOCK: Mutex<()> = Mutex::new(());

/// Global allocator that forwards to `System` and tracks traced allocations.
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() && ENABLED.load(Ordering::Relaxed) {
            let size = layout.size() as u64;
            let live = CURRENT.fetch_add(size, Ordering::Relaxed) + size;
            PEAK.fetch_max(live, Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        if ENABLED.load(Ordering::Relaxed) {
            // Saturate: blocks allocated before the trace window may be
            // freed inside it.
            let size = layout.size() as u64;
            let _ = CURRENT.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |live| {
                Some(live.saturating_sub(size))
            });
        }
    }
}

/// Scoped handle over the process-wide allocation tracker.
///
/// Acquiring resets both counters and enables tracking; dropping disables
/// it. Only one trace can be live at a time — a second `start` blocks
/// until the first is dropped.
pub struct MemoryTrace {
    _guard: MutexGuard<'static, ()>,
}

impl MemoryTrace {
    /// Acquire the tracker, resetting the live and peak counters.
    pub fn start() -> Self {
        let guard = TRACE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        CURRENT.store(0, Ordering::Relaxed);
        PEAK.store(0, Ordering::Relaxed);
        ENABLED.store(true, Ordering::Release);
        Self { _guard: guard }
    }

    /// Peak traced bytes observed since `start`.
    pub fn peak(&self) -> u64 {
        PEAK.load(Ordering::Relaxed)
    }
}

impl Drop for MemoryTrace {
    fn drop(&mut self) {
        ENABLED.store(false, Ordering::Release);
    }
}

/// Measure the peak traced allocation of one invocation of `func`.
///
/// The trace is reset on entry and stopped before returning, so readings
/// never leak between invocations. A panic inside `func` propagates
/// unchanged; the tracker still stops.
#[inline]
pub fn measure_memory<T, F>(func: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let trace = MemoryTrace::start();
    let result = std::hint::black_box(func());
    let peak = trace.peak();
    drop(trace);
    (result, peak)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The tracking allocator is not installed in the unit-test binary, so
    // peaks read 0 here; allocator behavior is exercised by the
    // `memory_trace` integration test, which installs it.

    #[test]
    fn test_traces_serialize() {
        static FIRST_DROPPED: AtomicBool = AtomicBool::new(false);

        let first = MemoryTrace::start();
        let second = std::thread::spawn(|| {
            let _trace = MemoryTrace::start();
            // Acquiring happens-after the first trace's drop, which
            // happens-after the store below.
            FIRST_DROPPED.load(Ordering::SeqCst)
        });

        FIRST_DROPPED.store(true, Ordering::SeqCst);
        drop(first);

        assert!(
            second.join().expect("second trace thread"),
            "second trace started while the first was live"
        );
    }

    #[test]
    fn test_measure_memory_returns_result() {
        let (result, _peak) = measure_memory(|| vec![1u8; 64].len());
        assert_eq!(result, 64);
    }
}
