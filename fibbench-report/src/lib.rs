#![warn(missing_docs)]
//! FibBench Report - Result Formatting
//!
//! Generates output formats from a finished benchmark run:
//! - Human-readable terminal summary
//! - CSV (spreadsheet-compatible)
//! - JSON (machine-readable)

mod console;
mod csv;
mod json;

pub use console::format_human_output;
pub use csv::generate_csv_report;
pub use json::{JsonReport, generate_json_report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// CSV for spreadsheets
    Csv,
    /// JSON with full result detail
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!("HUMAN".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("Csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
