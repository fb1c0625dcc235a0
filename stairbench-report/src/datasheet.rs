//! Single-Shot Record Log
//!
//! A flat, append-only log of per-execution measurements with a
//! per-algorithm roll-up. Unlike the statistical [`crate::Report`], the
//! summary here is a plain arithmetic mean over the raw records — never a
//! mean of medians.

use chrono::Local;
use serde::Serialize;

/// One single-shot measurement
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Algorithm display name
    pub algorithm: String,
    /// Input size
    pub n: u64,
    /// The value the algorithm produced
    pub result: u128,
    /// Wall-clock execution time in seconds
    pub execution_time: f64,
    /// Peak traced memory in bytes
    pub memory_bytes: u64,
}

/// Per-algorithm roll-up over the record log
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmSummary {
    /// Algorithm display name
    pub algorithm: String,
    /// Number of records for this algorithm
    pub count: usize,
    /// Sum of execution times, seconds
    pub total_time: f64,
    /// Sum of peak memory readings, bytes
    pub total_memory: u64,
    /// Arithmetic mean execution time, seconds
    pub avg_time: f64,
    /// Arithmetic mean peak memory, bytes
    pub avg_memory: f64,
}

/// Ordered log of single-shot measurements
#[derive(Debug, Default)]
pub struct DataSheet {
    records: Vec<Record>,
}

impl DataSheet {
    /// Create an empty datasheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one execution record
    pub fn add_record(
        &mut self,
        algorithm: &str,
        n: u64,
        result: u128,
        execution_time: f64,
        memory_bytes: u64,
    ) {
        self.records.push(Record {
            algorithm: algorithm.to_string(),
            n,
            result,
            execution_time,
            memory_bytes,
        });
    }

    /// All records, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-algorithm roll-up, algorithms in first-seen order
    pub fn summary(&self) -> Vec<AlgorithmSummary> {
        let mut summaries: Vec<AlgorithmSummary> = Vec::new();

        for record in &self.records {
            let idx = match summaries
                .iter()
                .position(|s| s.algorithm == record.algorithm)
            {
                Some(idx) => idx,
                None => {
                    summaries.push(AlgorithmSummary {
                        algorithm: record.algorithm.clone(),
                        count: 0,
                        total_time: 0.0,
                        total_memory: 0,
                        avg_time: 0.0,
                        avg_memory: 0.0,
                    });
                    summaries.len() - 1
                }
            };

            let entry = &mut summaries[idx];
            entry.count += 1;
            entry.total_time += record.execution_time;
            entry.total_memory += record.memory_bytes;
        }

        for entry in &mut summaries {
            entry.avg_time = entry.total_time / entry.count as f64;
            entry.avg_memory = entry.total_memory as f64 / entry.count as f64;
        }

        summaries
    }

    /// Roll-up for one algorithm, if any records exist for it
    pub fn summarize(&self, algorithm: &str) -> Option<AlgorithmSummary> {
        self.summary().into_iter().find(|s| s.algorithm == algorithm)
    }

    /// Render the records as an aligned grid table
    pub fn render_table(&self) -> String {
        let mut output = String::new();

        if self.records.is_empty() {
            output.push_str("No records collected.\n");
            return output;
        }

        output.push('\n');
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str("PERFORMANCE ANALYSIS RESULTS\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        let algo_width = self
            .records
            .iter()
            .map(|r| r.algorithm.len())
            .max()
            .unwrap_or(9)
            .max("Algorithm".len());
        let result_width = self
            .records
            .iter()
            .map(|r| r.result.to_string().len())
            .max()
            .unwrap_or(6)
            .max("Result".len());

        output.push_str(&format!(
            "  {:<algo_width$}  {:>8}  {:>result_width$}  {:>12}  {:>14}\n",
            "Algorithm", "N", "Result", "Time (s)", "Memory (bytes)",
        ));
        output.push_str(&format!("  {}\n", "-".repeat(algo_width + result_width + 42)));

        for record in &self.records {
            output.push_str(&format!(
                "  {:<algo_width$}  {:>8}  {:>result_width$}  {:>12.6}  {:>14}\n",
                record.algorithm, record.n, record.result, record.execution_time,
                record.memory_bytes,
            ));
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');
        output
    }

    /// Render the per-algorithm roll-up as an aligned table
    pub fn render_summary(&self) -> String {
        let mut output = String::new();
        let summaries = self.summary();

        if summaries.is_empty() {
            output.push_str("No records available for a summary.\n");
            return output;
        }

        output.push('\n');
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str("PER-ALGORITHM SUMMARY\n");
        output.push_str(&"=".repeat(80));
        output.push('\n');

        let algo_width = summaries
            .iter()
            .map(|s| s.algorithm.len())
            .max()
            .unwrap_or(9)
            .max("Algorithm".len());

        output.push_str(&format!(
            "  {:<algo_width$}  {:>10}  {:>14}  {:>20}\n",
            "Algorithm", "Executions", "Avg time (s)", "Avg memory (bytes)",
        ));
        output.push_str(&format!("  {}\n", "-".repeat(algo_width + 50)));

        for s in &summaries {
            output.push_str(&format!(
                "  {:<algo_width$}  {:>10}  {:>14.6}  {:>20.2}\n",
                s.algorithm, s.count, s.avg_time, s.avg_memory,
            ));
        }

        output.push_str(&"=".repeat(80));
        output.push('\n');
        output
    }

    /// Render the records as CSV
    pub fn to_csv(&self) -> String {
        let mut output = String::from("algorithm,n,result,execution_time,memory_bytes\n");

        for record in &self.records {
            output.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(&record.algorithm),
                record.n,
                record.result,
                record.execution_time,
                record.memory_bytes,
            ));
        }

        output
    }

    /// Default timestamped CSV file name for this datasheet
    pub fn default_csv_filename() -> String {
        format!(
            "staircase_results_{}.csv",
            Local::now().format("%Y%m%d_%H%M%S")
        )
    }
}

/// Quote a CSV field if it contains separators or quotes
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_record() {
        let mut sheet = DataSheet::new();
        sheet.add_record("Test", 10, 89, 0.001, 1024);

        assert_eq!(sheet.records().len(), 1);
        assert_eq!(sheet.records()[0].algorithm, "Test");
        assert_eq!(sheet.records()[0].n, 10);
        assert_eq!(sheet.records()[0].result, 89);
    }

    #[test]
    fn test_summary_groups_by_algorithm() {
        let mut sheet = DataSheet::new();
        sheet.add_record("Algo1", 10, 89, 0.001, 1024);
        sheet.add_record("Algo1", 20, 10_946, 0.002, 2048);
        sheet.add_record("Algo2", 10, 89, 0.0005, 512);

        let summary = sheet.summary();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].algorithm, "Algo1");
        assert_eq!(summary[0].count, 2);
        assert!((summary[0].total_time - 0.003).abs() < 1e-12);
        assert_eq!(summary[0].total_memory, 3072);
        assert!((summary[0].avg_time - 0.0015).abs() < 1e-12);
        assert_eq!(summary[0].avg_memory, 1536.0);
        assert_eq!(summary[1].algorithm, "Algo2");
        assert_eq!(summary[1].count, 1);
    }

    #[test]
    fn test_summary_preserves_first_seen_order() {
        let mut sheet = DataSheet::new();
        sheet.add_record("Zeta", 1, 1, 0.1, 10);
        sheet.add_record("Alpha", 1, 1, 0.1, 10);
        sheet.add_record("Zeta", 2, 2, 0.1, 10);

        let summary = sheet.summary();
        let names: Vec<&str> = summary
            .iter()
            .map(|s| s.algorithm.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[test]
    fn test_summarize_single_algorithm() {
        let mut sheet = DataSheet::new();
        sheet.add_record("Algo1", 10, 89, 0.002, 1000);
        sheet.add_record("Algo1", 20, 10_946, 0.004, 3000);

        let s = sheet.summarize("Algo1").unwrap();
        assert_eq!(s.count, 2);
        assert!((s.avg_time - 0.003).abs() < 1e-12);
        assert_eq!(s.avg_memory, 2000.0);

        assert!(sheet.summarize("missing").is_none());
    }

    #[test]
    fn test_csv_output() {
        let mut sheet = DataSheet::new();
        sheet.add_record("Algo, with comma", 10, 89, 0.25, 1024);

        let csv = sheet.to_csv();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "algorithm,n,result,execution_time,memory_bytes"
        );
        assert_eq!(lines.next().unwrap(), "\"Algo, with comma\",10,89,0.25,1024");
    }

    #[test]
    fn test_default_filename_shape() {
        let name = DataSheet::default_csv_filename();
        assert!(name.starts_with("staircase_results_"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_table_lists_every_record() {
        let mut sheet = DataSheet::new();
        sheet.add_record("Fast", 10, 89, 0.000001, 0);
        sheet.add_record("Slow", 10, 89, 1.5, 2048);

        let table = sheet.render_table();
        assert!(table.contains("Fast"));
        assert!(table.contains("Slow"));
        assert!(table.contains("89"));
    }
}
