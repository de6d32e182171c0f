//! Armstrong-number classification.
//!
//! An Armstrong (narcissistic) number equals the sum of its decimal digits,
//! each raised to the power of the digit count: `153 = 1^3 + 5^3 + 3^3`.
//!
//! Two classifiers decide the same property:
//!
//! - [`is_armstrong_iterative`] - a plain loop over the digits
//! - [`is_armstrong_recursive`] - a self-call per digit index with a base case
//!   at the end of the digit sequence
//!
//! Both are total over `u64` and must agree on every input. [`Strategy`]
//! names them so timings and verdicts can be labelled.
//!
//! # Example
//!
//! ```
//! use armstrong_core::{is_armstrong_iterative, is_armstrong_recursive, Strategy};
//!
//! assert!(is_armstrong_iterative(9474));
//! assert!(is_armstrong_recursive(9474));
//! assert!(!Strategy::Recursive.classify(100));
//! ```

mod digits;
mod iterative;
mod recursive;
mod strategy;

pub use digits::{digit_power_sum, Digits, MAX_DIGITS};
pub use iterative::is_armstrong_iterative;
pub use recursive::{is_armstrong_recursive, trace_recursive, RecursiveTrace};
pub use strategy::Strategy;
