//! Loop-based classifier.

use crate::digits::Digits;

/// Returns true iff `n` equals the sum of its digits raised to the digit count.
///
/// Walks the digit sequence once with a running sum.
///
/// # Example
///
/// ```
/// use armstrong_core::is_armstrong_iterative;
///
/// assert!(is_armstrong_iterative(153));
/// assert!(is_armstrong_iterative(0));
/// assert!(!is_armstrong_iterative(100));
/// ```
pub fn is_armstrong_iterative(n: u64) -> bool {
    let digits = Digits::of(n);
    let power = digits.power();

    let mut sum: u128 = 0;
    for &digit in digits.as_slice() {
        sum += u128::from(digit).pow(power);
    }

    sum == u128::from(n)
}
