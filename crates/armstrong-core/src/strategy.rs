//! Names for the two classifiers.

use std::fmt;

use crate::{is_armstrong_iterative, is_armstrong_recursive};

/// Which classifier to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Loop over the digits.
    Iterative,
    /// Recurse over the digit index.
    Recursive,
}

impl Strategy {
    /// Both strategies, in the order they are timed.
    pub const ALL: [Strategy; 2] = [Strategy::Iterative, Strategy::Recursive];

    /// Classifies `n` with this strategy.
    #[inline]
    pub fn classify(self, n: u64) -> bool {
        match self {
            Strategy::Iterative => is_armstrong_iterative(n),
            Strategy::Recursive => is_armstrong_recursive(n),
        }
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Iterative => "Iterative",
            Strategy::Recursive => "Recursive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
