//! CSV Output

use fibbench_core::BenchmarkSummary;
use std::fmt::Write;

const HEADER: &str = "rank,technique,description,count,max_n,time_complexity,\
space_complexity,duration_seconds,rate_per_second,success,error,timestamp";

/// Generate a CSV report, one row per technique ranked by count.
pub fn generate_csv_report(summary: &BenchmarkSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HEADER);
    for (rank, result) in summary.sorted_by_count().iter().enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{:.6},{:.2},{},{},{}",
            rank + 1,
            escape(&result.technique_name),
            escape(&result.description),
            result.count,
            result.max_n,
            escape(&result.time_complexity),
            escape(&result.space_complexity),
            result.duration,
            result.rate(),
            result.success(),
            escape(result.error.as_deref().unwrap_or("")),
            result.timestamp.to_rfc3339()
        );
    }
    out
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
