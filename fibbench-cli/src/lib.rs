#![warn(missing_docs)]
//! FibBench CLI Library
//!
//! Provides the command-line surface for the benchmark suite. Use
//! `fibbench_cli::run()` in a main function to get the full CLI with the
//! built-in technique registry.

mod config;

pub use config::{FibbenchConfig, OutputSection, RunnerSection};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fibbench_core::{BenchmarkRunner, BenchmarkSummary, RunnerConfig};
use fibbench_report::{
    OutputFormat, format_human_output, generate_csv_report, generate_json_report,
};
use fibbench_techniques::Registry;
use std::io::Write;
use std::path::PathBuf;

/// FibBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "fibbench")]
#[command(author, version, about = "FibBench - Fibonacci technique benchmark suite")]
pub struct Cli {
    /// Optional subcommand (list, run, single); defaults to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Time budget per technique (e.g., "1s", "500ms")
    #[arg(long, short = 'd')]
    pub duration: Option<String>,

    /// Skip validation against the known Fibonacci table
    #[arg(long)]
    pub no_validate: bool,

    /// Output format: human, csv, json
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered techniques
    List,
    /// Run the full benchmark suite (default)
    Run,
    /// Benchmark a single technique by name
    Single {
        /// Technique name, matched case-insensitively
        name: String,
    },
    /// Print a default fibbench.toml to stdout
    InitConfig,
}

/// Run the FibBench CLI with arguments from the environment.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the FibBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("fibbench=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("fibbench=info")
            .init();
    }

    // Discover fibbench.toml configuration (CLI flags override)
    let config = FibbenchConfig::discover().unwrap_or_default();
    tracing::debug!(?config, "resolved configuration");

    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(&config.output.format)
        .parse()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    match cli.command {
        Some(Commands::List) => list_techniques(),
        Some(Commands::InitConfig) => {
            print!("{}", FibbenchConfig::default_toml());
            Ok(())
        }
        Some(Commands::Single { ref name }) => {
            let summary = run_single(&cli, &config, name)?;
            emit(&cli, &config, format, &summary)
        }
        Some(Commands::Run) | None => {
            let runner = make_runner(&cli, &config)?;
            let summary = runner.run_all(None);
            emit(&cli, &config, format, &summary)
        }
    }
}

/// Build a runner config by layering fibbench.toml defaults under CLI flags.
fn build_runner_config(cli: &Cli, config: &FibbenchConfig) -> anyhow::Result<RunnerConfig> {
    let duration_str = cli.duration.as_deref().unwrap_or(&config.runner.duration);
    let duration = FibbenchConfig::parse_duration(duration_str)
        .with_context(|| format!("invalid duration '{}'", duration_str))?;

    Ok(RunnerConfig {
        duration,
        validate: config.runner.validate && !cli.no_validate,
        progress: config.runner.progress && !cli.quiet,
    })
}

fn make_runner(cli: &Cli, config: &FibbenchConfig) -> anyhow::Result<BenchmarkRunner> {
    let runner_config = build_runner_config(cli, config)?;
    Ok(BenchmarkRunner::with_loader(
        runner_config,
        Box::new(Registry::new()),
    ))
}

fn run_single(cli: &Cli, config: &FibbenchConfig, name: &str) -> anyhow::Result<BenchmarkSummary> {
    let runner = make_runner(cli, config)?;
    let result = runner.run_technique_by_name(name).ok_or_else(|| {
        let available: Vec<String> = fibbench_techniques::all_techniques()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        anyhow::anyhow!(
            "unknown technique '{}'. Available: {}",
            name,
            available.join(", ")
        )
    })?;

    Ok(BenchmarkSummary {
        total_duration: result.duration,
        timestamp: result.timestamp,
        results: vec![result],
    })
}

fn list_techniques() -> anyhow::Result<()> {
    let techniques = fibbench_techniques::all_techniques();
    println!("{} technique(s) registered:", techniques.len());
    for technique in &techniques {
        println!(
            "  {:<28} {} time, {} space - {}",
            technique.name(),
            technique.time_complexity(),
            technique.space_complexity(),
            technique.description()
        );
    }
    Ok(())
}

/// Render the summary and write it to the resolved destination.
fn emit(
    cli: &Cli,
    config: &FibbenchConfig,
    format: OutputFormat,
    summary: &BenchmarkSummary,
) -> anyhow::Result<()> {
    let output = match format {
        OutputFormat::Human => format_human_output(summary),
        OutputFormat::Csv => generate_csv_report(summary),
        OutputFormat::Json => generate_json_report(summary)?,
    };

    if let Some(path) = resolve_output_path(cli, config, format, summary) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::fs::File::create(&path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Explicit --output wins; otherwise a configured output directory gets a
/// timestamped file. No destination means stdout.
fn resolve_output_path(
    cli: &Cli,
    config: &FibbenchConfig,
    format: OutputFormat,
    summary: &BenchmarkSummary,
) -> Option<PathBuf> {
    if let Some(path) = &cli.output {
        return Some(path.clone());
    }
    let directory = config.output.directory.as_ref()?;
    let extension = match format {
        OutputFormat::Human => "txt",
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    let name = format!(
        "fibbench-{}.{}",
        summary.timestamp.format("%Y%m%d-%H%M%S"),
        extension
    );
    Some(PathBuf::from(directory).join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["fibbench"])
    }

    #[test]
    fn cli_defaults_layer_over_config() {
        let cli = bare_cli();
        let config = FibbenchConfig::default();
        let runner_config = build_runner_config(&cli, &config).unwrap();
        assert_eq!(runner_config.duration, std::time::Duration::from_secs(1));
        assert!(runner_config.validate);
        assert!(runner_config.progress);
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from(["fibbench", "--duration", "250ms", "--no-validate", "--quiet"]);
        let config = FibbenchConfig::default();
        let runner_config = build_runner_config(&cli, &config).unwrap();
        assert_eq!(
            runner_config.duration,
            std::time::Duration::from_millis(250)
        );
        assert!(!runner_config.validate);
        assert!(!runner_config.progress);
    }

    #[test]
    fn bad_duration_is_rejected() {
        let cli = Cli::parse_from(["fibbench", "--duration", "fast"]);
        assert!(build_runner_config(&cli, &FibbenchConfig::default()).is_err());
    }

    #[test]
    fn explicit_output_path_wins() {
        let mut cli = bare_cli();
        cli.output = Some(PathBuf::from("report.json"));
        let mut config = FibbenchConfig::default();
        config.output.directory = Some("target/fibbench".to_string());
        let summary = BenchmarkSummary {
            results: vec![],
            total_duration: 0.0,
            timestamp: chrono::Utc::now(),
        };
        let path = resolve_output_path(&cli, &config, OutputFormat::Json, &summary).unwrap();
        assert_eq!(path, PathBuf::from("report.json"));
    }

    #[test]
    fn configured_directory_gets_timestamped_file() {
        let cli = bare_cli();
        let mut config = FibbenchConfig::default();
        config.output.directory = Some("target/fibbench".to_string());
        let summary = BenchmarkSummary {
            results: vec![],
            total_duration: 0.0,
            timestamp: chrono::Utc::now(),
        };
        let path = resolve_output_path(&cli, &config, OutputFormat::Csv, &summary).unwrap();
        assert!(path.starts_with("target/fibbench"));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
    }

    #[test]
    fn no_destination_means_stdout() {
        let cli = bare_cli();
        let summary = BenchmarkSummary {
            results: vec![],
            total_duration: 0.0,
            timestamp: chrono::Utc::now(),
        };
        assert!(
            resolve_output_path(&cli, &FibbenchConfig::default(), OutputFormat::Human, &summary)
                .is_none()
        );
    }
}
