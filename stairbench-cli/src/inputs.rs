//! Input-Size Loading
//!
//! Reads the staircase sizes to benchmark from a plain-text file, one
//! positive integer per line.

use std::path::Path;

/// Fallback sizes used when no input file is available
pub const DEFAULT_SIZES: &[u64] = &[30, 90, 180];

/// Read staircase sizes from `path`.
///
/// Blank lines and lines starting with `#` are skipped. Lines that do not
/// parse as a positive integer are skipped with a warning. A missing or
/// unreadable file — or one yielding no usable size — falls back to
/// [`DEFAULT_SIZES`] with a warning rather than failing the run.
pub fn read_inputs(path: &Path) -> Vec<u64> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!(
                "Warning: input file '{}' not readable ({}); using default sizes {:?}",
                path.display(),
                err,
                DEFAULT_SIZES
            );
            return DEFAULT_SIZES.to_vec();
        }
    };

    let sizes = parse_inputs(&content);
    if sizes.is_empty() {
        eprintln!(
            "Warning: no usable sizes in '{}'; using default sizes {:?}",
            path.display(),
            DEFAULT_SIZES
        );
        return DEFAULT_SIZES.to_vec();
    }
    sizes
}

/// Parse input-file content into sizes, skipping comments and bad lines.
fn parse_inputs(content: &str) -> Vec<u64> {
    let mut sizes = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<u64>() {
            Ok(value) if value > 0 => sizes.push(value),
            _ => eprintln!("Warning: ignoring invalid input line: {}", line),
        }
    }

    sizes
}
