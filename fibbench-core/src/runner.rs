//! Benchmark orchestration.
//!
//! Sequences setup → timed run → teardown for each technique, converts the
//! timer's raw tally plus technique metadata into a result record, and
//! aggregates records into a summary. Each technique's phases are isolated:
//! a faulting technique degrades to a failed result row, never a crashed
//! batch.

use crate::result::{BenchmarkResult, BenchmarkSummary};
use crate::technique::{Technique, TechniqueLoader};
use crate::timing::PrecisionTimer;
use crate::validate::validate_result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use num_bigint::BigUint;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Configuration for a benchmark batch.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Time budget per technique.
    pub duration: Duration,
    /// Whether results are checked against the known-value table.
    pub validate: bool,
    /// Whether to display a progress bar. A side effect only; never alters
    /// results.
    pub progress: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(1),
            validate: true,
            progress: true,
        }
    }
}

/// Orchestrates benchmark execution across techniques.
pub struct BenchmarkRunner {
    config: RunnerConfig,
    timer: PrecisionTimer,
    loader: Option<Box<dyn TechniqueLoader>>,
}

impl BenchmarkRunner {
    /// Create a runner with no technique loader; callers must pass explicit
    /// technique lists to [`run_all`](Self::run_all).
    pub fn new(config: RunnerConfig) -> Self {
        let timer = PrecisionTimer::new(config.duration);
        Self {
            config,
            timer,
            loader: None,
        }
    }

    /// Create a runner that falls back to `loader` for discovery.
    pub fn with_loader(config: RunnerConfig, loader: Box<dyn TechniqueLoader>) -> Self {
        let timer = PrecisionTimer::new(config.duration);
        Self {
            config,
            timer,
            loader: Some(loader),
        }
    }

    /// Run benchmarks for all techniques.
    ///
    /// When `techniques` is `None`, discovery is delegated to the loader;
    /// the summary preserves whatever order it returned. Total duration is
    /// measured around the entire batch, independently of the per-technique
    /// durations.
    pub fn run_all(&self, techniques: Option<Vec<Box<dyn Technique>>>) -> BenchmarkSummary {
        let batch_start = Instant::now();
        let timestamp = Utc::now();

        let mut techniques = match techniques {
            Some(list) => list,
            None => self
                .loader
                .as_ref()
                .map(|loader| loader.load())
                .unwrap_or_default(),
        };

        tracing::info!(
            techniques = techniques.len(),
            duration_secs = self.config.duration.as_secs_f64(),
            "starting benchmark batch"
        );

        let pb = if self.config.progress {
            let pb = ProgressBar::new(techniques.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut results = Vec::with_capacity(techniques.len());
        for technique in techniques.iter_mut() {
            if let Some(pb) = &pb {
                pb.set_message(technique.name().to_string());
            }
            let result = self.run_single(technique.as_mut());
            tracing::debug!(
                technique = %result.technique_name,
                count = result.count,
                max_n = result.max_n,
                error = result.error.as_deref().unwrap_or(""),
                "technique finished"
            );
            results.push(result);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }

        if let Some(pb) = &pb {
            pb.finish_with_message("complete");
        }

        let total_duration = batch_start.elapsed().as_secs_f64();
        tracing::info!(total_duration_secs = total_duration, "batch complete");

        BenchmarkSummary {
            results,
            total_duration,
            timestamp,
        }
    }

    /// Run the benchmark for a single technique.
    ///
    /// A setup fault short-circuits to a zero-effort result and skips both
    /// the timed run and teardown. Teardown faults are swallowed so they can
    /// never overwrite a completed run's data.
    pub fn run_single(&self, technique: &mut dyn Technique) -> BenchmarkResult {
        if let Some(message) = run_hook(|| technique.setup()) {
            return BenchmarkResult {
                technique_name: technique.name().to_string(),
                description: technique.description().to_string(),
                count: 0,
                max_n: 0,
                duration: 0.0,
                time_complexity: technique.time_complexity().to_string(),
                space_complexity: technique.space_complexity().to_string(),
                error: Some(format!("Setup failed: {}", message)),
                timestamp: Utc::now(),
            };
        }

        let outcome = if self.config.validate {
            self.timer.run_for_duration(
                |n| technique.calculate(n),
                0,
                Some(|n: i64, value: &BigUint| validate_result(n, value)),
            )
        } else {
            self.timer.run_for_duration(
                |n| technique.calculate(n),
                0,
                None::<fn(i64, &BigUint) -> bool>,
            )
        };

        if let Some(failure) = &outcome.failure {
            tracing::debug!(
                technique = technique.name(),
                n = failure.at_n(),
                "stopped early"
            );
        }

        if let Some(message) = run_hook(|| technique.teardown()) {
            tracing::warn!(
                technique = technique.name(),
                error = %message,
                "teardown failed; ignored"
            );
        }

        BenchmarkResult {
            technique_name: technique.name().to_string(),
            description: technique.description().to_string(),
            count: outcome.count,
            max_n: outcome.max_n,
            duration: outcome.elapsed,
            time_complexity: technique.time_complexity().to_string(),
            space_complexity: technique.space_complexity().to_string(),
            error: outcome.failure.map(|f| f.to_string()),
            timestamp: Utc::now(),
        }
    }

    /// Run a single technique looked up by name, case-insensitively, among
    /// the loader's techniques. `None` when there is no loader or no match.
    pub fn run_technique_by_name(&self, name: &str) -> Option<BenchmarkResult> {
        let mut technique = self.loader.as_ref()?.by_name(name)?;
        Some(self.run_single(technique.as_mut()))
    }
}

/// Run a lifecycle hook, converting an error or panic into a message.
fn run_hook(
    hook: impl FnOnce() -> Result<(), crate::error::TechniqueError>,
) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(hook)) {
        Ok(Ok(())) => None,
        Ok(Err(err)) => Some(err.to_string()),
        Err(payload) => Some(crate::timing::panic_message(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TechniqueError;
    use crate::validate::reference_fibonacci;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Configurable fake for exercising the orchestrator's state machine.
    struct Fake {
        name: &'static str,
        fail_setup: bool,
        panic_teardown: bool,
        wrong_at: Option<i64>,
        torn_down: Arc<AtomicBool>,
    }

    impl Fake {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                fail_setup: false,
                panic_teardown: false,
                wrong_at: None,
                torn_down: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    impl Technique for Fake {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "fake"
        }
        fn time_complexity(&self) -> &str {
            "O(1)"
        }
        fn space_complexity(&self) -> &str {
            "O(1)"
        }
        fn calculate(&mut self, n: i64) -> Result<BigUint, TechniqueError> {
            if self.wrong_at == Some(n) {
                return Ok(BigUint::from(u8::MAX));
            }
            reference_fibonacci(n)
        }
        fn setup(&mut self) -> Result<(), TechniqueError> {
            if self.fail_setup {
                Err(TechniqueError::Other("no workers available".to_string()))
            } else {
                Ok(())
            }
        }
        fn teardown(&mut self) -> Result<(), TechniqueError> {
            self.torn_down.store(true, Ordering::SeqCst);
            if self.panic_teardown {
                panic!("teardown exploded");
            }
            Ok(())
        }
    }

    fn quick_config() -> RunnerConfig {
        RunnerConfig {
            duration: Duration::from_millis(50),
            validate: true,
            progress: false,
        }
    }

    #[test]
    fn setup_failure_synthesizes_zero_effort_result() {
        let runner = BenchmarkRunner::new(quick_config());
        let mut tech = Fake::new("Broken Setup");
        tech.fail_setup = true;
        let torn_down = tech.torn_down.clone();

        let result = runner.run_single(&mut tech);
        assert_eq!(result.count, 0);
        assert_eq!(result.max_n, 0);
        assert_eq!(result.duration, 0.0);
        assert_eq!(
            result.error.as_deref(),
            Some("Setup failed: no workers available")
        );
        // Teardown is skipped entirely on setup failure.
        assert!(!torn_down.load(Ordering::SeqCst));
    }

    #[test]
    fn teardown_panic_never_overwrites_result() {
        let runner = BenchmarkRunner::new(quick_config());
        let mut tech = Fake::new("Messy Teardown");
        tech.panic_teardown = true;
        let torn_down = tech.torn_down.clone();

        let result = runner.run_single(&mut tech);
        assert!(result.success());
        assert!(result.count > 0);
        assert!(torn_down.load(Ordering::SeqCst));
    }

    #[test]
    fn validation_mismatch_is_reported() {
        let runner = BenchmarkRunner::new(RunnerConfig {
            duration: Duration::from_secs(10),
            validate: true,
            progress: false,
        });
        let mut tech = Fake::new("Goes Wrong");
        tech.wrong_at = Some(3);

        let result = runner.run_single(&mut tech);
        assert_eq!(result.count, 3);
        assert_eq!(result.max_n, 2);
        assert_eq!(result.error.as_deref(), Some("validation failed at n=3"));
    }

    #[test]
    fn disabled_validation_skips_the_table() {
        let runner = BenchmarkRunner::new(RunnerConfig {
            duration: Duration::from_millis(50),
            validate: false,
            progress: false,
        });
        let mut tech = Fake::new("Goes Wrong Quietly");
        tech.wrong_at = Some(3);

        let result = runner.run_single(&mut tech);
        assert!(result.success());
        assert!(result.count > 3);
    }

    #[test]
    fn run_all_preserves_submission_order() {
        let runner = BenchmarkRunner::new(quick_config());
        let techniques: Vec<Box<dyn Technique>> = vec![
            Box::new(Fake::new("Zeta")),
            Box::new(Fake::new("Alpha")),
            Box::new(Fake::new("Mid")),
        ];

        let summary = runner.run_all(Some(techniques));
        let names: Vec<&str> = summary
            .results
            .iter()
            .map(|r| r.technique_name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert!(summary.total_duration >= 0.15);
    }

    #[test]
    fn run_all_without_loader_or_list_is_empty() {
        let runner = BenchmarkRunner::new(quick_config());
        let summary = runner.run_all(None);
        assert!(summary.results.is_empty());
    }

    #[test]
    fn lookup_by_name_uses_loader() {
        struct OneFake;
        impl TechniqueLoader for OneFake {
            fn load(&self) -> Vec<Box<dyn Technique>> {
                vec![Box::new(Fake::new("Solo"))]
            }
        }

        let runner = BenchmarkRunner::with_loader(quick_config(), Box::new(OneFake));
        assert!(runner.run_technique_by_name("sOLo").is_some());
        assert!(runner.run_technique_by_name("missing").is_none());
    }
}
