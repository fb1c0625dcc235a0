//! Report Data Structures

use serde::Serialize;
use stairbench_stats::AggregateStats;

/// One (input size, aggregate) pair
#[derive(Debug, Clone, Serialize)]
pub struct SizeEntry {
    /// Input size the aggregate was measured at
    pub size: u64,
    /// Aggregated statistics for that size
    pub stats: AggregateStats,
}

/// Aggregates for every input size of one algorithm, in first-seen order
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmSection {
    /// Algorithm display name
    pub algorithm: String,
    /// Entries in the order the sizes were first recorded
    pub entries: Vec<SizeEntry>,
}

/// Benchmark report: (algorithm, size) → aggregate statistics.
///
/// Insertion order of algorithms and of sizes within an algorithm is
/// preserved — the report displays in the order configurations were
/// supplied, not sorted. Re-recording an existing pair overwrites its
/// aggregate in place.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// One section per recorded algorithm, in first-seen order
    pub sections: Vec<AlgorithmSection>,
}

impl Report {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the aggregate for (algorithm, size)
    pub fn record(&mut self, algorithm: &str, size: u64, stats: AggregateStats) {
        let idx = match self.sections.iter().position(|s| s.algorithm == algorithm) {
            Some(idx) => idx,
            None => {
                self.sections.push(AlgorithmSection {
                    algorithm: algorithm.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        let section = &mut self.sections[idx];
        match section.entries.iter().position(|e| e.size == size) {
            Some(idx) => section.entries[idx].stats = stats,
            None => section.entries.push(SizeEntry { size, stats }),
        }
    }

    /// Look up the aggregate for (algorithm, size)
    pub fn get(&self, algorithm: &str, size: u64) -> Option<&AggregateStats> {
        self.sections
            .iter()
            .find(|s| s.algorithm == algorithm)?
            .entries
            .iter()
            .find(|e| e.size == size)
            .map(|e| &e.stats)
    }

    /// Number of recorded (algorithm, size) pairs
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Whether no pair has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stairbench_stats::aggregate;
    use stairbench_core::Sample;
    use std::time::Duration;

    fn stats(secs: f64) -> AggregateStats {
        let sample = Sample {
            duration: Duration::from_secs_f64(secs),
            peak_bytes: 1024,
        };
        aggregate(&[sample]).unwrap()
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut report = Report::new();
        report.record("b_algo", 20, stats(1.0));
        report.record("a_algo", 10, stats(2.0));
        report.record("b_algo", 5, stats(3.0));

        let names: Vec<&str> = report.sections.iter().map(|s| s.algorithm.as_str()).collect();
        assert_eq!(names, ["b_algo", "a_algo"]);

        let sizes: Vec<u64> = report.sections[0].entries.iter().map(|e| e.size).collect();
        assert_eq!(sizes, [20, 5], "sizes keep first-seen order, not sorted");
    }

    #[test]
    fn test_record_overwrites_existing_pair() {
        let mut report = Report::new();
        report.record("algo", 10, stats(1.0));
        report.record("algo", 10, stats(9.0));

        assert_eq!(report.len(), 1);
        let entry = report.get("algo", 10).unwrap();
        assert_eq!(entry.time.median, 9.0);
    }

    #[test]
    fn test_get_missing_pair() {
        let mut report = Report::new();
        report.record("algo", 10, stats(1.0));

        assert!(report.get("algo", 11).is_none());
        assert!(report.get("other", 10).is_none());
    }

    #[test]
    fn test_empty_report() {
        let report = Report::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }
}
