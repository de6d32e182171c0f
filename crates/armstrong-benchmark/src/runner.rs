//! Benchmark runner.

use std::hint::black_box;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use armstrong_config::{ConfigError, SweepConfig};
use armstrong_core::Strategy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::result::{BenchmarkRecord, BenchmarkReport};
use crate::schedule::{sample_sizes, step_size};

/// Sweep progress, reported after each sample size completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Sample sizes finished so far.
    pub completed: usize,
    /// Sample sizes in the whole sweep.
    pub total: usize,
    /// The sample size that just finished.
    pub sample_size: usize,
}

impl Progress {
    /// Returns the completed share in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Runs a sweep with the default configuration and an OS-seeded generator.
///
/// `max_n <= 0` yields an empty report.
pub fn run_benchmark(max_n: i64) -> BenchmarkReport {
    // The default dataset range is always valid.
    Benchmark {
        config: SweepConfig::new().with_max_n(max_n),
        cancel_flag: None,
    }
    .run()
}

/// Single-threaded benchmark sweep.
///
/// Each sample size gets a fresh random dataset that both classifiers read.
/// The cancel flag, if set, is checked between sample sizes only.
///
/// # Example
///
/// ```
/// use std::sync::atomic::AtomicBool;
/// use std::sync::Arc;
///
/// use armstrong_benchmark::Benchmark;
/// use armstrong_config::{ConfigError, SweepConfig};
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let benchmark = Benchmark::new(SweepConfig::new().with_max_n(30))
///     .unwrap()
///     .with_cancel_flag(flag.clone());
///
/// let mut seen = Vec::new();
/// let report = benchmark.run_with_progress(|p| seen.push(p.fraction()));
/// assert_eq!(report.len(), 3);
/// assert_eq!(seen.last(), Some(&1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Benchmark {
    config: SweepConfig,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl Benchmark {
    /// Creates a benchmark for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the dataset range is inverted.
    pub fn new(config: SweepConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cancel_flag: None,
        })
    }

    /// Attaches a flag that abandons the sweep once set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Runs the sweep and returns the report.
    pub fn run(&self) -> BenchmarkReport {
        self.run_with_progress(|_| {})
    }

    /// Runs the sweep, calling `on_progress` after every sample size.
    pub fn run_with_progress<F>(&self, mut on_progress: F) -> BenchmarkReport
    where
        F: FnMut(Progress),
    {
        let max_n = self.config.max_n;
        let sizes: Vec<usize> = sample_sizes(max_n).collect();
        let range = self.config.dataset.value_range();
        let mut rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut report = BenchmarkReport::new(max_n);
        let started = Instant::now();

        info!(
            event = "sweep_start",
            max_n,
            step = step_size(max_n) as u64,
            steps = sizes.len() as u64,
        );

        for (index, &sample_size) in sizes.iter().enumerate() {
            if self.is_cancelled() {
                report.mark_terminated_early();
                warn!(
                    event = "sweep_cancelled",
                    completed = index as u64,
                    steps = sizes.len() as u64,
                );
                break;
            }

            let dataset = generate_dataset(&mut rng, sample_size, range.clone());
            let (iterative, armstrong_hits) = time_pass(Strategy::Iterative, &dataset);
            let (recursive, _) = time_pass(Strategy::Recursive, &dataset);

            debug!(
                event = "sample",
                sample_size = sample_size as u64,
                iterative_us = iterative.as_micros() as u64,
                recursive_us = recursive.as_micros() as u64,
                hits = armstrong_hits as u64,
            );

            report.push(BenchmarkRecord {
                sample_size,
                iterative,
                recursive,
                armstrong_hits,
            });

            on_progress(Progress {
                completed: index + 1,
                total: sizes.len(),
                sample_size,
            });
        }

        let winner = report
            .conclusion()
            .map_or("N/A", |c| c.winner.name());
        info!(
            event = "sweep_end",
            records = report.len() as u64,
            duration_ms = started.elapsed().as_millis() as u64,
            winner,
        );

        report
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

/// Draws `len` candidates uniformly from `range`.
pub(crate) fn generate_dataset<R: Rng>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<u64>,
) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(range.clone())).collect()
}

/// Times one full classification pass; returns elapsed time and hit count.
pub(crate) fn time_pass(strategy: Strategy, dataset: &[u64]) -> (Duration, usize) {
    let start = Instant::now();
    let mut hits = 0usize;
    for &n in dataset {
        if strategy.classify(black_box(n)) {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();
    (elapsed, black_box(hits))
}
