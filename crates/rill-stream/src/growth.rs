//! Unbounded additive growth sequence.

use serde::{Deserialize, Serialize};

use crate::source::{Extent, SequenceSource};

/// What happens when the next term no longer fits in a `u64`.
///
/// The first unrepresentable term is term 94 (`term(93)` is the largest
/// that fits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Clamp to `u64::MAX`. Once saturated, every later term is `u64::MAX`.
    #[default]
    Saturate,
    /// Add modulo 2^64.
    Wrap,
}

/// Yields `0, 1, 1, 2, 3, 5, 8, ...` where each term is the sum of the
/// previous two. Never exhausts.
#[derive(Debug, Clone)]
pub struct GrowthSequence {
    current: u64,
    following: u64,
    policy: OverflowPolicy,
    // Whether `current` / `following` were clamped instead of computed exactly.
    current_clamped: bool,
    following_clamped: bool,
    emitted: u64,
    saturated: bool,
}

impl GrowthSequence {
    /// Creates a sequence with the default [`OverflowPolicy::Saturate`].
    pub fn new() -> Self {
        Self::with_policy(OverflowPolicy::default())
    }

    /// Creates a sequence that applies `policy` once terms outgrow `u64`.
    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self {
            current: 0,
            following: 1,
            policy,
            current_clamped: false,
            following_clamped: false,
            emitted: 0,
            saturated: false,
        }
    }

    /// Returns the overflow policy in effect.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns the next sum and whether it had to be clamped.
    fn advance_sum(&self) -> (u64, bool) {
        match self.policy {
            OverflowPolicy::Wrap => (self.current.wrapping_add(self.following), false),
            OverflowPolicy::Saturate => match self.current.checked_add(self.following) {
                Some(sum) => (sum, false),
                None => (u64::MAX, true),
            },
        }
    }
}

impl Default for GrowthSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceSource for GrowthSequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let term = self.current;
        if self.current_clamped && !self.saturated {
            self.saturated = true;
            tracing::warn!(
                term_index = self.emitted,
                "growth sequence saturated at u64::MAX"
            );
        }

        let (sum, clamped) = self.advance_sum();
        self.current = self.following;
        self.current_clamped = self.following_clamped;
        self.following = sum;
        self.following_clamped = clamped;
        self.emitted += 1;
        Some(term)
    }

    fn extent(&self) -> Extent {
        Extent::Unbounded
    }

    fn name(&self) -> &'static str {
        "growth"
    }
}
