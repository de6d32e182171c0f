//! Benchmark sweeps comparing the iterative and recursive Armstrong classifiers.
//!
//! # Overview
//!
//! A sweep walks sample sizes `N = step, 2*step, ..= max_n` where
//! `step = max(10, max_n / 10)`. For each `N` it draws one random dataset and
//! times a full pass of each classifier over that same dataset, back to back.
//! The resulting [`BenchmarkReport`] holds one [`BenchmarkRecord`] per `N` in
//! increasing order and can name the faster classifier at the largest `N`.
//!
//! Everything runs on the calling thread. A sweep can be abandoned between
//! sample sizes through a shared cancel flag.
//!
//! # Example
//!
//! ```
//! use armstrong_benchmark::{Benchmark, run_benchmark};
//! use armstrong_config::SweepConfig;
//!
//! let report = run_benchmark(100);
//! assert_eq!(report.len(), 10);
//!
//! let config = SweepConfig::new().with_max_n(50).with_random_seed(1);
//! let report = Benchmark::new(config).unwrap().run();
//! let sizes: Vec<usize> = report.records().iter().map(|r| r.sample_size).collect();
//! assert_eq!(sizes, vec![10, 20, 30, 40, 50]);
//! assert!(report.conclusion().is_some());
//!
//! assert!(run_benchmark(-5).is_empty());
//! ```

mod check;
mod report;
mod result;
mod runner;
mod schedule;

pub use check::{check, CheckOutcome, Timed};
pub use report::{ChartSeries, CsvExporter, MarkdownReport};
pub use result::{BenchmarkRecord, BenchmarkReport, Conclusion};
pub use runner::{run_benchmark, Benchmark, Progress};
pub use schedule::{sample_sizes, step_size, MIN_STEP};

pub use armstrong_core::Strategy;

#[cfg(test)]
mod tests;
