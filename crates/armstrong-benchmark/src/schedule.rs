//! Sample-size schedule for a sweep.

/// Smallest step between consecutive sample sizes.
pub const MIN_STEP: i64 = 10;

/// Returns the gap between sample sizes: `max(10, max_n / 10)`.
///
/// # Example
///
/// ```
/// use armstrong_benchmark::step_size;
///
/// assert_eq!(step_size(500), 50);
/// assert_eq!(step_size(55), 10);
/// assert_eq!(step_size(-3), 10);
/// ```
pub fn step_size(max_n: i64) -> i64 {
    MIN_STEP.max(max_n / 10)
}

/// Returns the sample sizes for a sweep bounded by `max_n`, ascending.
///
/// The last size may fall short of `max_n` when the step does not divide it.
/// Non-positive bounds yield nothing.
///
/// # Example
///
/// ```
/// use armstrong_benchmark::sample_sizes;
///
/// let sizes: Vec<usize> = sample_sizes(105).collect();
/// assert_eq!(sizes, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
/// assert_eq!(sample_sizes(9).count(), 0);
/// assert_eq!(sample_sizes(0).count(), 0);
/// ```
pub fn sample_sizes(max_n: i64) -> impl Iterator<Item = usize> {
    let step = step_size(max_n);
    // An empty range when max_n < step covers every non-positive bound.
    (step..=max_n)
        .step_by(step as usize)
        .map(|n| n as usize)
}
