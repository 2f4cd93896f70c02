//! Benchmark result and summary data model.
//!
//! Results are value objects created once per technique per run and never
//! mutated afterwards. The summary owns its result list in submission order;
//! all derived views are non-mutating.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of benchmarking a single technique.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    /// Display name of the technique, unique within a summary.
    pub technique_name: String,
    /// One-line description of the technique.
    pub description: String,
    /// Number of Fibonacci numbers calculated within the budget.
    pub count: u64,
    /// Highest index reached; 0 when nothing completed.
    pub max_n: i64,
    /// Actual benchmark duration in seconds.
    pub duration: f64,
    /// Declared Big-O time complexity, display only.
    pub time_complexity: String,
    /// Declared Big-O space complexity, display only.
    pub space_complexity: String,
    /// Failure reason; `None` means the run only stopped on the deadline.
    pub error: Option<String>,
    /// When this result was created.
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkResult {
    /// Whether the benchmark completed without errors.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    /// Calculations per second; 0 when no time was spent.
    pub fn rate(&self) -> f64 {
        if self.duration > 0.0 {
            self.count as f64 / self.duration
        } else {
            0.0
        }
    }
}

/// Ordered batch of results plus batch-level timing.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    /// One result per attempted technique, in submission order.
    pub results: Vec<BenchmarkResult>,
    /// Wall time for the entire batch, including orchestration overhead.
    pub total_duration: f64,
    /// When the batch started.
    pub timestamp: DateTime<Utc>,
}

impl BenchmarkSummary {
    /// Results sorted by count, descending. Stable: equal counts keep their
    /// submission order.
    pub fn sorted_by_count(&self) -> Vec<&BenchmarkResult> {
        let mut sorted: Vec<&BenchmarkResult> = self.results.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }

    /// Results sorted by max n reached, descending, stable.
    pub fn sorted_by_max_n(&self) -> Vec<&BenchmarkResult> {
        let mut sorted: Vec<&BenchmarkResult> = self.results.iter().collect();
        sorted.sort_by(|a, b| b.max_n.cmp(&a.max_n));
        sorted
    }

    /// The result with the highest count; first occurrence wins ties.
    pub fn fastest(&self) -> Option<&BenchmarkResult> {
        let mut best: Option<&BenchmarkResult> = None;
        for result in &self.results {
            if best.map_or(true, |b| result.count > b.count) {
                best = Some(result);
            }
        }
        best
    }

    /// The result that reached the highest n; first occurrence wins ties.
    pub fn highest_n(&self) -> Option<&BenchmarkResult> {
        let mut best: Option<&BenchmarkResult> = None;
        for result in &self.results {
            if best.map_or(true, |b| result.max_n > b.max_n) {
                best = Some(result);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, count: u64, max_n: i64, duration: f64) -> BenchmarkResult {
        BenchmarkResult {
            technique_name: name.to_string(),
            description: String::new(),
            count,
            max_n,
            duration,
            time_complexity: "O(n)".to_string(),
            space_complexity: "O(1)".to_string(),
            error: None,
            timestamp: Utc::now(),
        }
    }

    fn summary(results: Vec<BenchmarkResult>) -> BenchmarkSummary {
        BenchmarkSummary {
            results,
            total_duration: 1.0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn rate_is_count_over_duration() {
        assert_eq!(result("a", 100, 99, 2.0).rate(), 50.0);
        assert_eq!(result("a", 100, 99, 0.0).rate(), 0.0);
    }

    #[test]
    fn success_is_absence_of_error() {
        let mut r = result("a", 1, 0, 1.0);
        assert!(r.success());
        r.error = Some("overflow at n=93".to_string());
        assert!(!r.success());
    }

    #[test]
    fn sort_by_count_is_stable_descending() {
        let s = summary(vec![
            result("first", 10, 9, 1.0),
            result("second", 30, 29, 1.0),
            result("third", 10, 9, 1.0),
        ]);
        let sorted = s.sorted_by_count();
        assert_eq!(sorted[0].technique_name, "second");
        // Equal counts keep original relative order.
        assert_eq!(sorted[1].technique_name, "first");
        assert_eq!(sorted[2].technique_name, "third");
    }

    #[test]
    fn sort_by_max_n_descending() {
        let s = summary(vec![
            result("a", 5, 100, 1.0),
            result("b", 50, 49, 1.0),
        ]);
        let sorted = s.sorted_by_max_n();
        assert_eq!(sorted[0].technique_name, "a");
    }

    #[test]
    fn extremal_lookups_empty_and_ties() {
        let empty = summary(vec![]);
        assert!(empty.fastest().is_none());
        assert!(empty.highest_n().is_none());

        let tied = summary(vec![
            result("first", 10, 9, 1.0),
            result("second", 10, 9, 1.0),
        ]);
        assert_eq!(tied.fastest().unwrap().technique_name, "first");
        assert_eq!(tied.highest_n().unwrap().technique_name, "first");
    }

    #[test]
    fn extremal_lookups_are_idempotent() {
        let s = summary(vec![result("a", 10, 9, 1.0), result("b", 20, 19, 1.0)]);
        let first = s.fastest().unwrap().technique_name.clone();
        let second = s.fastest().unwrap().technique_name.clone();
        assert_eq!(first, second);
        assert_eq!(
            s.highest_n().unwrap().technique_name,
            s.highest_n().unwrap().technique_name
        );
    }
}
