//! JSON Report Output

use crate::model::{AlgorithmSection, Report};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Top-level JSON document
#[derive(Debug, Serialize)]
struct ReportSchema<'a> {
    schema_version: u32,
    generated_at: DateTime<Utc>,
    repetitions: u32,
    sections: &'a [AlgorithmSection],
}

/// Render the benchmark report as pretty-printed JSON.
pub fn generate_json_report(report: &Report, repetitions: u32) -> Result<String, serde_json::Error> {
    let schema = ReportSchema {
        schema_version: 1,
        generated_at: Utc::now(),
        repetitions,
        sections: &report.sections,
    };
    serde_json::to_string_pretty(&schema)
}
