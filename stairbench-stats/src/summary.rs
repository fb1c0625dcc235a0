//! Summary Statistics
//!
//! Median, mean, min, max and sample standard deviation over one
//! dimension of a sample set. The median is the middle element of the
//! sorted sequence, or the mean of the two middle elements for even
//! counts. The standard deviation divides by n-1 and is defined as
//! exactly 0 for a single sample — downstream consumers branch on
//! "one sample means no spread", so this is a contract, not an accident.

use serde::Serialize;
use stairbench_core::Sample;
use thiserror::Error;

/// Aggregation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    /// Aggregation was attempted over zero samples. Always a caller
    /// defect: failed configurations never produce a sample set at all.
    #[error("cannot aggregate an empty sample set")]
    EmptyInput,
}

/// Descriptive statistics for one measured dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionStats {
    /// Middle of the sorted samples (mean of the two middles when even)
    pub median: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Sample standard deviation (n-1); exactly 0 when n == 1
    pub std_dev: f64,
}

/// Read-only aggregate over one (algorithm, size) sample set
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AggregateStats {
    /// Time dimension, in seconds
    pub time: DimensionStats,
    /// Memory dimension, in bytes
    pub memory: DimensionStats,
    /// Number of samples reduced
    pub sample_count: usize,
}

/// Reduce a sample set to per-dimension descriptive statistics.
///
/// Fails on an empty set rather than fabricating zeros.
pub fn aggregate(samples: &[Sample]) -> Result<AggregateStats, StatsError> {
    if samples.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let times: Vec<f64> = samples.iter().map(|s| s.duration.as_secs_f64()).collect();
    let memories: Vec<f64> = samples.iter().map(|s| s.peak_bytes as f64).collect();

    Ok(AggregateStats {
        time: dimension_stats(&times),
        memory: dimension_stats(&memories),
        sample_count: samples.len(),
    })
}

fn dimension_stats(values: &[f64]) -> DimensionStats {
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let median = if sorted.len() % 2 == 0 {
        let mid = sorted.len() / 2;
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[sorted.len() / 2]
    };

    let std_dev = if values.len() < 2 {
        0.0
    } else {
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (values.len() - 1) as f64;
        variance.sqrt()
    };

    DimensionStats {
        median,
        mean,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        std_dev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample(secs: f64, bytes: u64) -> Sample {
        Sample {
            duration: Duration::from_secs_f64(secs),
            peak_bytes: bytes,
        }
    }

    #[test]
    fn test_empty_set_is_an_error() {
        assert_eq!(aggregate(&[]).unwrap_err(), StatsError::EmptyInput);
    }

    #[test]
    fn test_odd_count_median() {
        let samples = [
            sample(1.0, 100),
            sample(3.0, 300),
            sample(2.0, 200),
        ];
        let stats = aggregate(&samples).unwrap();

        assert_eq!(stats.time.median, 2.0);
        assert_eq!(stats.memory.median, 200.0);
        assert_eq!(stats.sample_count, 3);
    }

    #[test]
    fn test_even_count_median_averages_middles() {
        let samples = [
            sample(1.0, 100),
            sample(2.0, 200),
            sample(3.0, 300),
            sample(4.0, 400),
        ];
        let stats = aggregate(&samples).unwrap();

        assert_eq!(stats.time.median, 2.5);
        assert_eq!(stats.memory.median, 250.0);
    }

    #[test]
    fn test_mean_min_max() {
        let samples = [sample(1.0, 100), sample(2.0, 200), sample(6.0, 600)];
        let stats = aggregate(&samples).unwrap();

        assert_eq!(stats.time.mean, 3.0);
        assert_eq!(stats.time.min, 1.0);
        assert_eq!(stats.time.max, 6.0);
        assert_eq!(stats.memory.mean, 300.0);
        assert_eq!(stats.memory.min, 100.0);
        assert_eq!(stats.memory.max, 600.0);
    }

    #[test]
    fn test_single_sample_has_zero_spread() {
        let stats = aggregate(&[sample(0.5, 4096)]).unwrap();

        assert_eq!(stats.time.std_dev, 0.0);
        assert_eq!(stats.memory.std_dev, 0.0);
        assert_eq!(stats.time.median, 0.5);
        assert_eq!(stats.memory.median, 4096.0);
        assert_eq!(stats.sample_count, 1);
    }

    #[test]
    fn test_sample_standard_deviation() {
        // Values 2, 4, 4, 4, 5, 5, 7, 9: mean 5, sample variance 32/7.
        let samples: Vec<Sample> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|&t| sample(t, (t * 1000.0) as u64))
            .collect();
        let stats = aggregate(&samples).unwrap();

        let expected = (32.0f64 / 7.0).sqrt();
        assert!((stats.time.std_dev - expected).abs() < 1e-12);
    }

    #[test]
    fn test_median_bounded_by_extremes() {
        // Skewed sets in both directions.
        let sets: Vec<Vec<Sample>> = vec![
            (1u64..=9).map(|i| sample(i as f64, i * 10)).collect(),
            vec![sample(0.001, 1), sample(0.001, 1), sample(100.0, 99)],
            vec![sample(5.0, 50), sample(5.0, 50)],
        ];

        for samples in sets {
            let stats = aggregate(&samples).unwrap();
            for dim in [stats.time, stats.memory] {
                assert!(dim.min <= dim.median && dim.median <= dim.max);
                assert!(dim.min <= dim.mean && dim.mean <= dim.max);
            }
        }
    }

    #[test]
    fn test_identical_samples_zero_deviation() {
        let samples = vec![sample(2.0, 512); 10];
        let stats = aggregate(&samples).unwrap();

        assert_eq!(stats.time.std_dev, 0.0);
        assert_eq!(stats.memory.std_dev, 0.0);
        assert_eq!(stats.time.min, stats.time.max);
    }
}
