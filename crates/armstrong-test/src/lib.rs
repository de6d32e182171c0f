//! Shared test fixtures for the Armstrong benchmark crates.
//!
//! - [`KNOWN_ARMSTRONG`] - every Armstrong number with at most 10 digits
//! - [`reference_is_armstrong`] - definition-level checker built on string
//!   formatting, independent of the digit buffer the classifiers share
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! armstrong-test = { workspace = true }
//! ```

/// Every Armstrong number below `10^10`, ascending.
pub const KNOWN_ARMSTRONG: &[u64] = &[
    0,
    1,
    2,
    3,
    4,
    5,
    6,
    7,
    8,
    9,
    153,
    370,
    371,
    407,
    1634,
    8208,
    9474,
    54748,
    92727,
    93084,
    548834,
    1741725,
    4210818,
    9800817,
    9926315,
    24678050,
    24678051,
    88593477,
    146511208,
    472335975,
    534494836,
    912985153,
    4679307774,
];

/// Candidates that look plausible but are not Armstrong numbers.
pub const NEAR_MISSES: &[u64] = &[10, 100, 154, 372, 1000, 1633, 9475, 54749, 999_999];

/// Checks the Armstrong property straight from its definition.
///
/// Formats `n` in base 10 and sums `digit^len` with wide arithmetic.
pub fn reference_is_armstrong(n: u64) -> bool {
    let text = n.to_string();
    let power = text.len() as u32;
    let sum: u128 = text
        .bytes()
        .map(|b| u128::from(b - b'0').pow(power))
        .sum();
    sum == u128::from(n)
}

/// Returns the known Armstrong numbers that fall within `range`.
pub fn known_in(range: std::ops::RangeInclusive<u64>) -> Vec<u64> {
    KNOWN_ARMSTRONG
        .iter()
        .copied()
        .filter(|n| range.contains(n))
        .collect()
}
