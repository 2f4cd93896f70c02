//! Precision timing loop.
//!
//! Runs a calculation function with an incrementing input until a wall-clock
//! deadline elapses, counting completed calls and classifying any failure.
//! The deadline is checked only *between* calls: a single slow call can
//! overrun the requested duration, and the outcome records the time actually
//! spent rather than the time requested.

use crate::error::TechniqueError;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Classified reason a timing loop stopped before its deadline.
///
/// A closed set of tags rather than free-form strings; `Display` renders the
/// human-readable form stored on a benchmark result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Call-stack depth guard tripped inside the technique.
    RecursionLimit {
        /// Input value of the failing call.
        n: i64,
    },
    /// Memory exhaustion inside the technique.
    OutOfMemory {
        /// Input value of the failing call.
        n: i64,
    },
    /// Fixed-width numeric overflow inside the technique.
    Overflow {
        /// Input value of the failing call.
        n: i64,
    },
    /// The validation predicate rejected an otherwise successful call.
    ValidationMismatch {
        /// Input value of the rejected call.
        n: i64,
    },
    /// Any other fault, including panics, with its message preserved.
    Fault {
        /// Input value of the failing call.
        n: i64,
        /// Short fault kind, e.g. `invalid argument` or `panic`.
        kind: String,
        /// Underlying message.
        message: String,
    },
}

impl Failure {
    /// Map a technique error to its failure class, first match wins.
    fn classify(n: i64, err: TechniqueError) -> Self {
        match err {
            TechniqueError::RecursionLimit { .. } => Failure::RecursionLimit { n },
            TechniqueError::OutOfMemory => Failure::OutOfMemory { n },
            TechniqueError::Overflow => Failure::Overflow { n },
            TechniqueError::InvalidArgument(_) => Failure::Fault {
                n,
                kind: "invalid argument".to_string(),
                message: err.to_string(),
            },
            TechniqueError::Other(message) => Failure::Fault {
                n,
                kind: "error".to_string(),
                message,
            },
        }
    }

    /// Input value at which the loop stopped.
    pub fn at_n(&self) -> i64 {
        match self {
            Failure::RecursionLimit { n }
            | Failure::OutOfMemory { n }
            | Failure::Overflow { n }
            | Failure::ValidationMismatch { n }
            | Failure::Fault { n, .. } => *n,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::RecursionLimit { n } => write!(f, "recursion limit exceeded at n={}", n),
            Failure::OutOfMemory { n } => write!(f, "out of memory at n={}", n),
            Failure::Overflow { n } => write!(f, "overflow at n={}", n),
            Failure::ValidationMismatch { n } => write!(f, "validation failed at n={}", n),
            Failure::Fault { n, kind, message } => {
                write!(f, "{} at n={}: {}", kind, n, message)
            }
        }
    }
}

/// Raw tally from one timed loop execution.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingOutcome {
    /// Number of successful calculation calls completed.
    pub count: u64,
    /// Highest input successfully processed; 0 when nothing completed.
    pub max_n: i64,
    /// Wall-clock seconds actually spent.
    pub elapsed: f64,
    /// Why the loop stopped early, `None` when time simply expired.
    pub failure: Option<Failure>,
}

/// Runs a calculation function repeatedly under a wall-clock deadline.
#[derive(Debug, Clone)]
pub struct PrecisionTimer {
    duration: Duration,
}

impl PrecisionTimer {
    /// Create a timer with the given per-run duration budget.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// The configured duration budget.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Call `calc(n)` with `n = start_n, start_n+1, ...` until the deadline
    /// elapses or a failure occurs.
    ///
    /// The while-condition is evaluated before any call, so a non-positive
    /// duration yields `count == 0` without invoking `calc`. When a
    /// validation predicate is supplied and rejects a result, the loop stops
    /// without counting that call. A failure of any kind halts the loop
    /// unconditionally; there is no retry or averaging through.
    pub fn run_for_duration<T, F, V>(
        &self,
        mut calc: F,
        start_n: i64,
        mut validate: Option<V>,
    ) -> TimingOutcome
    where
        F: FnMut(i64) -> Result<T, TechniqueError>,
        V: FnMut(i64, &T) -> bool,
    {
        let start = Instant::now();
        let mut n = start_n;
        let mut count: u64 = 0;
        let mut failure = None;

        while start.elapsed() < self.duration {
            // A panicking technique degrades to a classified fault instead
            // of tearing down the batch.
            let call = panic::catch_unwind(AssertUnwindSafe(|| calc(n)));

            match call {
                Ok(Ok(value)) => {
                    if let Some(check) = validate.as_mut() {
                        if !check(n, &value) {
                            failure = Some(Failure::ValidationMismatch { n });
                            break;
                        }
                    }
                    count += 1;
                    n += 1;
                }
                Ok(Err(err)) => {
                    failure = Some(Failure::classify(n, err));
                    break;
                }
                Err(payload) => {
                    failure = Some(Failure::Fault {
                        n,
                        kind: "panic".to_string(),
                        message: panic_message(payload),
                    });
                    break;
                }
            }
        }

        let elapsed = start.elapsed().as_secs_f64();
        let max_n = if count > 0 { n - 1 } else { 0 };

        TimingOutcome {
            count,
            max_n,
            elapsed,
            failure,
        }
    }

    /// Time a single call, propagating any panic to the caller unmodified.
    pub fn time_single_call<T>(f: impl FnOnce() -> T) -> (T, f64) {
        let start = Instant::now();
        let result = f();
        (result, start.elapsed().as_secs_f64())
    }
}

impl Default for PrecisionTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

pub(crate) fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(n: i64) -> Result<i64, TechniqueError> {
        Ok(n * 2)
    }

    #[test]
    fn zero_duration_never_calls() {
        let timer = PrecisionTimer::new(Duration::ZERO);
        let outcome = timer.run_for_duration(
            |_| -> Result<i64, TechniqueError> { panic!("must not be called") },
            0,
            None::<fn(i64, &i64) -> bool>,
        );
        assert_eq!(outcome.count, 0);
        assert_eq!(outcome.max_n, 0);
        assert!(outcome.failure.is_none());
    }

    #[test]
    fn trivial_function_completes_iterations() {
        let timer = PrecisionTimer::new(Duration::from_millis(100));
        let outcome = timer.run_for_duration(ok, 0, None::<fn(i64, &i64) -> bool>);
        assert!(outcome.count >= 1);
        assert!(outcome.elapsed >= 0.1);
        assert_eq!(outcome.max_n, outcome.count as i64 - 1);
        assert!(outcome.failure.is_none());
    }

    #[test]
    fn validation_failure_stops_without_counting() {
        let timer = PrecisionTimer::new(Duration::from_secs(10));
        // Reject the 5th call (n=4): four successes, then stop.
        let outcome = timer.run_for_duration(ok, 0, Some(|n: i64, _: &i64| n != 4));
        assert_eq!(outcome.count, 4);
        assert_eq!(outcome.max_n, 3);
        let failure = outcome.failure.expect("validation failure expected");
        assert_eq!(failure, Failure::ValidationMismatch { n: 4 });
        assert!(failure.to_string().contains("n=4"));
    }

    #[test]
    fn failure_on_first_call_leaves_zero_count() {
        let timer = PrecisionTimer::new(Duration::from_secs(10));
        let outcome = timer.run_for_duration(
            |_| -> Result<i64, TechniqueError> {
                Err(TechniqueError::RecursionLimit { limit: 1000 })
            },
            0,
            None::<fn(i64, &i64) -> bool>,
        );
        assert_eq!(outcome.count, 0);
        assert_eq!(outcome.max_n, 0);
        assert_eq!(outcome.failure, Some(Failure::RecursionLimit { n: 0 }));
    }

    #[test]
    fn error_variants_classify() {
        let timer = PrecisionTimer::new(Duration::from_secs(10));
        let cases: Vec<(TechniqueError, &str)> = vec![
            (
                TechniqueError::RecursionLimit { limit: 1000 },
                "recursion limit exceeded at n=3",
            ),
            (TechniqueError::OutOfMemory, "out of memory at n=3"),
            (TechniqueError::Overflow, "overflow at n=3"),
            (
                TechniqueError::InvalidArgument(-1),
                "invalid argument at n=3: n must be non-negative, got -1",
            ),
            (
                TechniqueError::Other("boom".to_string()),
                "error at n=3: boom",
            ),
        ];
        for (err, expected) in cases {
            let e = err.clone();
            let outcome = timer.run_for_duration(
                move |n| {
                    if n < 3 {
                        Ok(n)
                    } else {
                        Err(e.clone())
                    }
                },
                0,
                None::<fn(i64, &i64) -> bool>,
            );
            assert_eq!(outcome.count, 3);
            assert_eq!(outcome.max_n, 2);
            assert_eq!(outcome.failure.map(|f| f.to_string()), Some(expected.to_string()));
        }
    }

    #[test]
    fn panic_is_classified_as_fault() {
        let timer = PrecisionTimer::new(Duration::from_secs(10));
        let outcome = timer.run_for_duration(
            |n| -> Result<i64, TechniqueError> {
                if n < 2 {
                    Ok(n)
                } else {
                    panic!("exploded")
                }
            },
            0,
            None::<fn(i64, &i64) -> bool>,
        );
        assert_eq!(outcome.count, 2);
        let rendered = outcome.failure.expect("panic failure").to_string();
        assert!(rendered.starts_with("panic at n=2"));
        assert!(rendered.contains("exploded"));
    }

    #[test]
    fn at_n_reports_the_stop_index() {
        let failures = vec![
            Failure::RecursionLimit { n: 7 },
            Failure::OutOfMemory { n: 7 },
            Failure::Overflow { n: 7 },
            Failure::ValidationMismatch { n: 7 },
            Failure::Fault {
                n: 7,
                kind: "panic".to_string(),
                message: "boom".to_string(),
            },
        ];
        for failure in failures {
            assert_eq!(failure.at_n(), 7, "{}", failure);
        }
    }

    #[test]
    fn start_index_offsets_max_n() {
        let timer = PrecisionTimer::new(Duration::from_secs(10));
        let outcome = timer.run_for_duration(ok, 10, Some(|n: i64, _: &i64| n < 13));
        assert_eq!(outcome.count, 3);
        assert_eq!(outcome.max_n, 12);
    }

    #[test]
    fn time_single_call_returns_result_and_elapsed() {
        let (value, elapsed) = PrecisionTimer::time_single_call(|| {
            std::thread::sleep(Duration::from_millis(10));
            42
        });
        assert_eq!(value, 42);
        assert!(elapsed >= 0.005);
    }
}
