//! Single-candidate check.

use std::hint::black_box;
use std::time::{Duration, Instant};

use armstrong_core::{digit_power_sum, Strategy};

/// A value together with the time it took to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    /// The computed value.
    pub value: T,
    /// Wall-clock time of the computation.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Runs `f` and records its wall-clock time.
    pub fn measure(f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let value = f();
        let elapsed = start.elapsed();
        Self { value, elapsed }
    }
}

/// Both classifiers' verdicts on one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    /// The classified number.
    pub candidate: u64,
    /// Iterative verdict and its time.
    pub iterative: Timed<bool>,
    /// Recursive verdict and its time.
    pub recursive: Timed<bool>,
    /// Sum of the candidate's digits raised to the digit count.
    pub power_sum: u128,
}

impl CheckOutcome {
    /// Returns the iterative verdict.
    pub fn is_armstrong(&self) -> bool {
        self.iterative.value
    }

    /// Returns true if both classifiers reached the same verdict.
    pub fn agrees(&self) -> bool {
        self.iterative.value == self.recursive.value
    }

    /// Returns the measured time for `strategy`.
    pub fn elapsed(&self, strategy: Strategy) -> Duration {
        match strategy {
            Strategy::Iterative => self.iterative.elapsed,
            Strategy::Recursive => self.recursive.elapsed,
        }
    }
}

/// Classifies `candidate` with both strategies, timing each call.
///
/// # Example
///
/// ```
/// use armstrong_benchmark::check;
///
/// let outcome = check(153);
/// assert!(outcome.is_armstrong());
/// assert!(outcome.agrees());
/// assert_eq!(outcome.power_sum, 153);
///
/// let outcome = check(154);
/// assert!(!outcome.is_armstrong());
/// assert_eq!(outcome.power_sum, 1 + 125 + 64);
/// ```
pub fn check(candidate: u64) -> CheckOutcome {
    let iterative = Timed::measure(|| Strategy::Iterative.classify(black_box(candidate)));
    let recursive = Timed::measure(|| Strategy::Recursive.classify(black_box(candidate)));

    CheckOutcome {
        candidate,
        iterative,
        recursive,
        power_sum: digit_power_sum(candidate),
    }
}
