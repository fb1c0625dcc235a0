//! CSV Report
//!
//! One row per (algorithm, size) pair. Time columns are raw seconds,
//! memory columns whole bytes — unit scaling is the text report's job.

use crate::model::Report;

/// Render the benchmark report as CSV.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from(
        "algorithm,n,\
         median_time_s,mean_time_s,min_time_s,max_time_s,stdev_time_s,\
         median_memory_bytes,mean_memory_bytes,min_memory_bytes,max_memory_bytes,stdev_memory_bytes,\
         trials\n",
    );

    for section in &report.sections {
        for entry in &section.entries {
            let t = &entry.stats.time;
            let m = &entry.stats.memory;
            output.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
                csv_field(&section.algorithm),
                entry.size,
                t.median,
                t.mean,
                t.min,
                t.max,
                t.std_dev,
                m.median as u64,
                m.mean as u64,
                m.min as u64,
                m.max as u64,
                m.std_dev as u64,
                entry.stats.sample_count,
            ));
        }
    }

    output
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
    use stairbench_core::Sample;
    use stairbench_stats::aggregate;
    use std::time::Duration;

    #[test]
    fn test_one_row_per_pair() {
        let samples = [
            Sample {
                duration: Duration::from_millis(2),
                peak_bytes: 1024,
            },
            Sample {
                duration: Duration::from_millis(4),
                peak_bytes: 1024,
            },
        ];
        let stats = aggregate(&samples).unwrap();

        let mut report = Report::new();
        report.record("A", 10, stats);
        report.record("A", 20, stats);
        report.record("B", 10, stats);

        let csv = generate_csv_report(&report);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4, "header plus three rows");
        assert!(lines[0].starts_with("algorithm,n,median_time_s"));
        assert!(lines[0].ends_with("trials"));
        assert!(lines[1].starts_with("A,10,"));
        assert!(lines[2].starts_with("A,20,"));
        assert!(lines[3].starts_with("B,10,"));
    }

    #[test]
    fn test_row_values() {
        let samples = [Sample {
            duration: Duration::from_millis(2),
            peak_bytes: 2048,
        }];
        let stats = aggregate(&samples).unwrap();

        let mut report = Report::new();
        report.record("solo", 5, stats);

        let csv = generate_csv_report(&report);
        let row = csv.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split(',').collect();

        assert_eq!(fields[0], "solo");
        assert_eq!(fields[1], "5");
        assert_eq!(fields[2], "0.002"); // median_time_s
        assert_eq!(fields[6], "0"); // stdev_time_s, single sample
        assert_eq!(fields[7], "2048"); // median_memory_bytes
        assert_eq!(fields[12], "1"); // trials
    }

    #[test]
    fn test_empty_report_is_header_only() {
        let csv = generate_csv_report(&Report::new());
        assert_eq!(csv.lines().count(), 1);
    }
}
