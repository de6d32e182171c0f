//! Benchmark result types.

use std::time::Duration;

use armstrong_core::Strategy;

/// Timings for one sample size.
///
/// Both passes ran over the same dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRecord {
    /// Number of candidates classified in each pass.
    pub sample_size: usize,
    /// Total time of the iterative pass.
    pub iterative: Duration,
    /// Total time of the recursive pass.
    pub recursive: Duration,
    /// Dataset members classified as Armstrong numbers.
    pub armstrong_hits: usize,
}

impl BenchmarkRecord {
    /// Returns the pass time for `strategy`.
    pub fn time_for(&self, strategy: Strategy) -> Duration {
        match strategy {
            Strategy::Iterative => self.iterative,
            Strategy::Recursive => self.recursive,
        }
    }

    /// Returns the iterative pass time in seconds.
    pub fn iterative_secs(&self) -> f64 {
        self.iterative.as_secs_f64()
    }

    /// Returns the recursive pass time in seconds.
    pub fn recursive_secs(&self) -> f64 {
        self.recursive.as_secs_f64()
    }

    /// Returns the faster strategy for this record.
    ///
    /// Iterative wins only when strictly faster; equal times go to recursive.
    pub fn winner(&self) -> Strategy {
        if self.iterative < self.recursive {
            Strategy::Iterative
        } else {
            Strategy::Recursive
        }
    }
}

/// Summary of the largest sample size in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conclusion {
    /// The largest sample size measured.
    pub sample_size: usize,
    /// The faster strategy at that size.
    pub winner: Strategy,
    /// Iterative pass time at that size.
    pub iterative: Duration,
    /// Recursive pass time at that size.
    pub recursive: Duration,
}

impl Conclusion {
    /// Renders the one-line verdict with both raw timings.
    ///
    /// # Example
    ///
    /// ```
    /// use armstrong_benchmark::{Conclusion, Strategy};
    /// use std::time::Duration;
    ///
    /// let conclusion = Conclusion {
    ///     sample_size: 500,
    ///     winner: Strategy::Iterative,
    ///     iterative: Duration::from_millis(12),
    ///     recursive: Duration::from_millis(15),
    /// };
    /// assert_eq!(
    ///     conclusion.summary(),
    ///     "At N = 500 the Iterative classifier was faster (Iterative: 0.0120s vs Recursive: 0.0150s)"
    /// );
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "At N = {} the {} classifier was faster (Iterative: {:.4}s vs Recursive: {:.4}s)",
            self.sample_size,
            self.winner,
            self.iterative.as_secs_f64(),
            self.recursive.as_secs_f64(),
        )
    }
}

/// Ordered records from one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    max_n: i64,
    records: Vec<BenchmarkRecord>,
    terminated_early: bool,
}

impl BenchmarkReport {
    /// Creates an empty report for a sweep bounded by `max_n`.
    pub fn new(max_n: i64) -> Self {
        Self {
            max_n,
            records: Vec::new(),
            terminated_early: false,
        }
    }

    pub(crate) fn push(&mut self, record: BenchmarkRecord) {
        debug_assert!(self
            .records
            .last()
            .map_or(true, |last| last.sample_size < record.sample_size));
        self.records.push(record);
    }

    pub(crate) fn mark_terminated_early(&mut self) {
        self.terminated_early = true;
    }

    /// Returns the requested upper bound.
    pub fn max_n(&self) -> i64 {
        self.max_n
    }

    /// Returns the records in increasing sample-size order.
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no sample size was measured.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns true if the sweep was cancelled before its last sample size.
    pub fn terminated_early(&self) -> bool {
        self.terminated_early
    }

    /// Returns the record for the largest sample size.
    pub fn last(&self) -> Option<&BenchmarkRecord> {
        self.records.last()
    }

    /// Names the faster strategy at the largest sample size.
    ///
    /// Returns `None` for an empty report.
    pub fn conclusion(&self) -> Option<Conclusion> {
        self.last().map(|record| Conclusion {
            sample_size: record.sample_size,
            winner: record.winner(),
            iterative: record.iterative,
            recursive: record.recursive,
        })
    }

    /// Returns the summed pass time of `strategy` across all records.
    pub fn total_time(&self, strategy: Strategy) -> Duration {
        self.records.iter().map(|r| r.time_for(strategy)).sum()
    }

    /// Returns the total number of candidates classified per strategy.
    pub fn total_samples(&self) -> usize {
        self.records.iter().map(|r| r.sample_size).sum()
    }
}
