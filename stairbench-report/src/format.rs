//! Unit Formatters
//!
//! Pure, total conversions from raw seconds/bytes to display strings.
//! Thresholds are strict less-than: a value exactly at a boundary uses
//! the larger unit.

/// Render a duration in seconds with an auto-selected unit.
///
/// Below 1µs → ns, below 1ms → µs, below 1s → ms, otherwise seconds.
/// Two decimal places for the sub-second units, four for seconds.
pub fn format_time(seconds: f64) -> String {
    if seconds < 1e-6 {
        format!("{:.2} ns", seconds * 1e9)
    } else if seconds < 1e-3 {
        format!("{:.2} µs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.2} ms", seconds * 1e3)
    } else {
        format!("{:.4} s", seconds)
    }
}

/// Render a byte count with an auto-selected binary unit.
///
/// Bytes print as an integer; KB/MB/GB with two decimal places.
pub fn format_memory(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    }
}
