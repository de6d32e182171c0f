//! Decimal digit decomposition.

/// Number of decimal digits in `u64::MAX`.
pub const MAX_DIGITS: usize = 20;

/// The decimal digits of a candidate, most significant first.
///
/// Stack-allocated; `0` decomposes to the single digit `[0]`.
///
/// # Example
///
/// ```
/// use armstrong_core::Digits;
///
/// let digits = Digits::of(1634);
/// assert_eq!(digits.as_slice(), &[1, 6, 3, 4]);
/// assert_eq!(digits.power(), 4);
///
/// assert_eq!(Digits::of(0).as_slice(), &[0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits {
    buf: [u8; MAX_DIGITS],
    len: usize,
}

impl Digits {
    /// Decomposes `n` into its decimal digits.
    pub fn of(n: u64) -> Self {
        let mut buf = [0u8; MAX_DIGITS];
        let mut len = 0;
        let mut rest = n;

        // Fill from the right so the slice reads most significant first.
        loop {
            len += 1;
            buf[MAX_DIGITS - len] = (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }

        buf.copy_within(MAX_DIGITS - len.., 0);
        Self { buf, len }
    }

    /// Returns the digits, most significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Returns the digit count.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; every integer has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the exponent each digit is raised to (the digit count).
    pub fn power(&self) -> u32 {
        self.len as u32
    }
}

/// Returns the sum of each digit of `n` raised to the digit count.
///
/// Accumulated in `u128`; the largest possible sum (`20 * 9^20`) fits.
///
/// # Example
///
/// ```
/// use armstrong_core::digit_power_sum;
///
/// assert_eq!(digit_power_sum(153), 153);
/// assert_eq!(digit_power_sum(100), 1);
/// ```
pub fn digit_power_sum(n: u64) -> u128 {
    let digits = Digits::of(n);
    let power = digits.power();
    digits
        .as_slice()
        .iter()
        .map(|&d| u128::from(d).pow(power))
        .sum()
}
