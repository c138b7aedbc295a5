//! Bounded consumption of a sequence source.

use crate::source::{Extent, SequenceSource};

/// Upper bound on the up-front allocation when the source is unbounded.
const UNBOUNDED_PREALLOC: usize = 64;

/// Pulls at most `limit` values from `source`, in order.
///
/// Stops at the first exhaustion or after `limit` successful pulls, whichever
/// comes first, so it is safe on unbounded sources. A `limit` of zero returns
/// an empty vector without touching the source.
///
/// Pass `&mut source` to keep the source afterwards; its cursor is left just
/// past the last collected value.
pub fn collect<S: SequenceSource>(mut source: S, limit: usize) -> Vec<S::Item> {
    if limit == 0 {
        return Vec::new();
    }

    let capacity = match source.extent() {
        Extent::Finite { remaining } => {
            limit.min(usize::try_from(remaining).unwrap_or(usize::MAX))
        }
        Extent::Unbounded => limit.min(UNBOUNDED_PREALLOC),
    };

    let mut values = Vec::with_capacity(capacity);
    while values.len() < limit {
        match source.next() {
            Some(value) => values.push(value),
            None => break,
        }
    }

    tracing::debug!(
        source = source.name(),
        limit,
        pulled = values.len(),
        "bounded collection finished"
    );

    values
}
