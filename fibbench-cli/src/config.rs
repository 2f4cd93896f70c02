//! Configuration loading from fibbench.toml
//!
//! Benchmark defaults can be specified in a `fibbench.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory; CLI flags override it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// FibBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FibbenchConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Runner configuration for benchmark execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerSection {
    /// Time budget per technique (e.g., "1s", "500ms")
    #[serde(default = "default_duration")]
    pub duration: String,
    /// Check results against the known-value table
    #[serde(default = "default_validate")]
    pub validate: bool,
    /// Show a progress bar while running
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for RunnerSection {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            validate: default_validate(),
            progress: default_progress(),
        }
    }
}

fn default_duration() -> String {
    "1s".to_string()
}
fn default_validate() -> bool {
    true
}
fn default_progress() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Default output format: "human", "csv", "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Directory for report files; reports go to stdout when unset
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: default_format(),
            directory: None,
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl FibbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("fibbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# FibBench Configuration

[runner]
# Time budget per technique
duration = "1s"
# Check results against the known Fibonacci table
validate = true
# Show a progress bar while running
progress = true

[output]
# Default output format: human, csv, json
format = "human"
# Directory for report files (uncomment to write files instead of stdout)
# directory = "target/fibbench"
"#
        .to_string()
    }

    /// Parse duration string (e.g., "1s", "500ms", "2m") to a [`Duration`]
    pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
        let s = s.trim();
        if s.is_empty() {
            return Err(anyhow::anyhow!("Empty duration string"));
        }

        // Find where the number ends and unit begins
        let (num_part, unit_part) = s
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| s.split_at(i))
            .unwrap_or((s, "s"));

        let value: f64 = num_part
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid duration number: {}", num_part))?;

        let multiplier: u64 = match unit_part.to_lowercase().as_str() {
            "ns" => 1,
            "us" => 1_000,
            "ms" => 1_000_000,
            "s" | "" => 1_000_000_000,
            "m" | "min" => 60_000_000_000,
            _ => return Err(anyhow::anyhow!("Unknown duration unit: {}", unit_part)),
        };

        Ok(Duration::from_nanos((value * multiplier as f64) as u64))
    }
}
