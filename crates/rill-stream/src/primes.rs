//! Unbounded sequence of integers that pass a trial-division primality test.

use crate::source::{Extent, SequenceSource};

/// Returns `true` if `n >= 2` and no `d` in `[2, floor(sqrt(n))]` divides it.
///
/// Plain trial division, `O(sqrt(n))` per call.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    // `d <= n / d` is `d * d <= n` without the overflow.
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Yields `2, 3, 5, 7, 11, ...` by testing each candidate in turn.
///
/// The cursor is a plain `u64`. If it would step past `u64::MAX` the source
/// exhausts, which no realistic prefix reaches, so [`extent`] still reports
/// [`Extent::Unbounded`].
///
/// [`extent`]: SequenceSource::extent
#[derive(Debug, Clone)]
pub struct PrimeSequence {
    cursor: Option<u64>,
}

impl PrimeSequence {
    /// Creates a sequence whose first value is 2.
    pub fn new() -> Self {
        Self { cursor: Some(2) }
    }
}

impl Default for PrimeSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for PrimeSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let mut candidate = self.cursor?;
        while !is_prime(candidate) {
            match candidate.checked_add(1) {
                Some(n) => candidate = n,
                None => {
                    self.cursor = None;
                    return None;
                }
            }
        }
        self.cursor = candidate.checked_add(1);
        Some(candidate)
    }

    fn extent(&self) -> Extent {
        Extent::Unbounded
    }

    fn name(&self) -> &'static str {
        "primes"
    }
}
