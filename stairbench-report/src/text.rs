//! Detailed Text Report
//!
//! One section per algorithm, one subsection per input size, listing the
//! full aggregate for both dimensions plus the trial count.

use crate::format::{format_memory, format_time};
use crate::model::Report;
use stairbench_stats::DimensionStats;

/// Render the full benchmark report for human reading.
///
/// # Arguments
/// * `report` - Populated benchmark report
/// * `repetitions` - Configured trials per (algorithm, size) pair
/// * `input_source` - Where the input sizes came from, for the banner
pub fn generate_text_report(report: &Report, repetitions: u32, input_source: &str) -> String {
    let mut output = String::new();

    output.push_str(&"=".repeat(80));
    output.push('\n');
    output.push_str("STAIRCASE BENCHMARK RESULTS\n");
    output.push_str(&"=".repeat(80));
    output.push_str("\n\n");
    output.push_str("Configuration:\n");
    output.push_str(&format!("  trials per configuration: {}\n", repetitions));
    output.push_str("  primary metric: median\n");
    output.push_str(&format!("  input sizes: {}\n", input_source));
    output.push('\n');
    output.push_str(&"=".repeat(80));
    output.push('\n');

    for section in &report.sections {
        output.push('\n');
        output.push_str(&"=".repeat(80));
        output.push('\n');
        output.push_str(&section.algorithm);
        output.push('\n');
        output.push_str(&"=".repeat(80));
        output.push_str("\n\n");

        for entry in &section.entries {
            output.push_str(&format!("Staircase size (N): {}\n", entry.size));
            output.push_str(&"-".repeat(40));
            output.push('\n');

            output.push_str("Execution time:\n");
            push_time_dimension(&mut output, &entry.stats.time);

            output.push_str("\nPeak memory:\n");
            push_memory_dimension(&mut output, &entry.stats.memory);

            output.push_str(&format!("\nTrials: {}\n\n", entry.stats.sample_count));
        }
    }

    output
}

fn push_time_dimension(output: &mut String, dim: &DimensionStats) {
    output.push_str(&format!("  median: {}\n", format_time(dim.median)));
    output.push_str(&format!("  mean:   {}\n", format_time(dim.mean)));
    output.push_str(&format!("  min:    {}\n", format_time(dim.min)));
    output.push_str(&format!("  max:    {}\n", format_time(dim.max)));
    output.push_str(&format!("  stdev:  {}\n", format_time(dim.std_dev)));
}

fn push_memory_dimension(output: &mut String, dim: &DimensionStats) {
    output.push_str(&format!("  median: {}\n", format_memory(dim.median as u64)));
    output.push_str(&format!("  mean:   {}\n", format_memory(dim.mean as u64)));
    output.push_str(&format!("  min:    {}\n", format_memory(dim.min as u64)));
    output.push_str(&format!("  max:    {}\n", format_memory(dim.max as u64)));
    output.push_str(&format!("  stdev:  {}\n", format_memory(dim.std_dev as u64)));
}
