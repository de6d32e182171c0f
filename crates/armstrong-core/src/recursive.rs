//! Self-recursive classifier.

use crate::digits::Digits;

/// Result of the recursive power-sum, with the number of self-calls made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveTrace {
    /// Sum of every digit raised to the digit count.
    pub power_sum: u128,
    /// Number of recursive self-calls; equals the digit count.
    pub depth: usize,
}

/// Returns true iff `n` equals the sum of its digits raised to the digit count.
///
/// The sum is built by a procedure that handles one digit index per call and
/// recurses on the next index, returning at the end of the sequence.
///
/// # Example
///
/// ```
/// use armstrong_core::is_armstrong_recursive;
///
/// assert!(is_armstrong_recursive(1634));
/// assert!(!is_armstrong_recursive(1635));
/// ```
pub fn is_armstrong_recursive(n: u64) -> bool {
    trace_recursive(n).power_sum == u128::from(n)
}

/// Runs the recursive power-sum for `n` and reports how deep it went.
///
/// # Example
///
/// ```
/// use armstrong_core::trace_recursive;
///
/// let trace = trace_recursive(9474);
/// assert_eq!(trace.power_sum, 9474);
/// assert_eq!(trace.depth, 4);
/// ```
pub fn trace_recursive(n: u64) -> RecursiveTrace {
    let digits = Digits::of(n);
    accumulate(digits.as_slice(), digits.power(), 0, 0, 0)
}

// Tail-position accumulator over the digit index.
fn accumulate(
    digits: &[u8],
    power: u32,
    index: usize,
    acc: u128,
    depth: usize,
) -> RecursiveTrace {
    if index == digits.len() {
        return RecursiveTrace {
            power_sum: acc,
            depth,
        };
    }

    let term = u128::from(digits[index]).pow(power);
    accumulate(digits, power, index + 1, acc + term, depth + 1)
}
