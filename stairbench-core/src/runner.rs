//! Trial Runner
//!
//! Runs one (algorithm, input size) configuration for a fixed number of
//! sequential trials. Each trial pairs a timed invocation with a
//! memory-traced invocation of the same pure function, so neither probe
//! distorts the other's reading; the two invocations must agree on the
//! result value.
//!
//! Trials never run concurrently: both the clock and the allocation
//! tracker need uncontended access to the process they instrument.

use crate::alloc::measure_memory;
use crate::measure::measure_time;
use crate::AlgorithmDef;
use std::time::Duration;
use thiserror::Error;

/// Default number of trials per (algorithm, size) configuration
pub const DEFAULT_REPETITIONS: u32 = 30;

/// One trial's raw measurement. Immutable once recorded.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    /// Wall-clock duration of the timed invocation
    pub duration: Duration,
    /// Peak traced heap bytes of the memory-traced invocation
    pub peak_bytes: u64,
}

/// All samples collected for one (algorithm, size) configuration.
///
/// Holds exactly as many samples as trials were requested — a failing
/// trial aborts the whole collection, so partially filled sets never
/// escape this module.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    /// One sample per completed trial, in execution order
    pub samples: Vec<Sample>,
    /// The value the algorithm produced (identical across all trials)
    pub result: u128,
}

/// Errors aborting a configuration's sample collection
#[derive(Debug, Error)]
pub enum TrialError {
    /// The requested input size is not a positive integer
    #[error("{algorithm}: input size must be a positive integer")]
    InvalidSize {
        /// Algorithm the size was requested for
        algorithm: &'static str,
    },

    /// The input size exceeds the algorithm's safety ceiling
    #[error("{algorithm}: size {size} exceeds the safe ceiling of {max_n}")]
    SizeCeilingExceeded {
        /// Algorithm that refused the size
        algorithm: &'static str,
        /// Requested input size
        size: u64,
        /// The algorithm's ceiling
        max_n: u64,
    },

    /// The measured callable panicked during a trial
    #[error("{algorithm}: trial {trial} at size {size} panicked: {message}")]
    CallablePanicked {
        /// Algorithm under measurement
        algorithm: &'static str,
        /// Input size of the failing configuration
        size: u64,
        /// Zero-based index of the failing trial
        trial: u32,
        /// Panic payload, if it carried one
        message: String,
    },

    /// Two invocations of the callable disagreed on the result — it is not
    /// a deterministic pure function of its input
    #[error(
        "{algorithm}: trial {trial} at size {size} returned {got}, expected {expected}; \
         measured callables must be deterministic"
    )]
    NonDeterministic {
        /// Algorithm under measurement
        algorithm: &'static str,
        /// Input size of the failing configuration
        size: u64,
        /// Zero-based index of the failing trial
        trial: u32,
        /// The diverging result
        got: u128,
        /// The previously observed result
        expected: u128,
    },
}

/// Run `repetitions` sequential trials of `algo` at input size `size`.
///
/// Sizes above the algorithm's ceiling are refused before any trial runs.
/// `progress` is called with the completed-trial count after each trial.
/// Any failing trial aborts the whole collection and surfaces the error
/// with (algorithm, size, trial index) context attached.
pub fn run_trials<P>(
    algo: &AlgorithmDef,
    size: u64,
    repetitions: u32,
    mut progress: P,
) -> Result<TrialOutcome, TrialError>
where
    P: FnMut(u32),
{
    if size == 0 {
        return Err(TrialError::InvalidSize { algorithm: algo.id });
    }
    if size > algo.max_n {
        return Err(TrialError::SizeCeilingExceeded {
            algorithm: algo.id,
            size,
            max_n: algo.max_n,
        });
    }

    let repetitions = repetitions.max(1);
    let func = algo.func;
    let mut samples = Vec::with_capacity(repetitions as usize);
    let mut result = 0u128;

    for trial in 0..repetitions {
        let (timed_result, duration) = guarded(algo, size, trial, || measure_time(|| func(size)))?;
        let (traced_result, peak_bytes) =
            guarded(algo, size, trial, || measure_memory(|| func(size)))?;

        if traced_result != timed_result {
            return Err(TrialError::NonDeterministic {
                algorithm: algo.id,
                size,
                trial,
                got: traced_result,
                expected: timed_result,
            });
        }

        if trial == 0 {
            result = timed_result;
        } else if timed_result != result {
            return Err(TrialError::NonDeterministic {
                algorithm: algo.id,
                size,
                trial,
                got: timed_result,
                expected: result,
            });
        }

        samples.push(Sample {
            duration,
            peak_bytes,
        });
        progress(trial + 1);
    }

    Ok(TrialOutcome { samples, result })
}

/// Run one probe invocation, converting a panic into a `TrialError`.
fn guarded<T>(
    algo: &AlgorithmDef,
    size: u64,
    trial: u32,
    f: impl FnOnce() -> T,
) -> Result<T, TrialError> {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).map_err(|panic| {
        let message = if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic".to_string()
        };

        TrialError::CallablePanicked {
            algorithm: algo.id,
            size,
            trial,
            message,
        }
    })
}
