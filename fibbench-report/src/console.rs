//! Human-readable terminal output.

use fibbench_core::{BenchmarkResult, BenchmarkSummary};
use std::fmt::Write;

/// Format a summary for terminal display, ranked by throughput.
pub fn format_human_output(summary: &BenchmarkSummary) -> String {
    let mut out = String::new();
    let rule = "=".repeat(70);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "FIBONACCI BENCHMARK RESULTS");
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "Run started {} | total wall time {:.2}s | {} technique(s)",
        summary.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        summary.total_duration,
        summary.results.len()
    );
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<4} {:<28} {:>10} {:>8} {:>12}  {}",
        "Rank", "Technique", "Count", "Max n", "Rate (F/s)", "Complexity"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));

    for (rank, result) in summary.sorted_by_count().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<28} {:>10} {:>8} {:>12.1}  {} time, {} space",
            rank + 1,
            result.technique_name,
            result.count,
            result.max_n,
            result.rate(),
            result.time_complexity,
            result.space_complexity
        );
        if let Some(error) = &result.error {
            let _ = writeln!(out, "     stopped early: {}", error);
        }
    }

    let _ = writeln!(out);
    if let Some(fastest) = summary.fastest() {
        let _ = writeln!(out, "Fastest:   {}", call_out(fastest, fastest.count, "calculations"));
    }
    if let Some(highest) = summary.highest_n() {
        let _ = writeln!(
            out,
            "Highest n: {} (reached F({}))",
            highest.technique_name, highest.max_n
        );
    }
    let _ = writeln!(out, "{}", rule);

    out
}

fn call_out(result: &BenchmarkResult, value: u64, unit: &str) -> String {
    format!(
        "{} ({} {} at {:.1}/s)",
        result.technique_name,
        value,
        unit,
        result.rate()
    )
}
