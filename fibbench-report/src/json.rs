//! JSON Output

use fibbench_core::BenchmarkSummary;
use serde::Serialize;

/// Versioned envelope around the serialized summary.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Schema identifier
    pub schema: &'static str,
    /// Schema version
    pub version: u32,
    /// The benchmark summary itself
    #[serde(flatten)]
    pub summary: &'a BenchmarkSummary,
}

/// Generate a prettified JSON report.
///
/// Serializes the summary with a schema envelope into machine-readable JSON.
pub fn generate_json_report(summary: &BenchmarkSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        schema: "fibbench-summary",
        version: 1,
        summary,
    })
}
