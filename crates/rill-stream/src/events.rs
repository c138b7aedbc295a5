//! Deterministic finite source of synthetic game events.

use rill_types::{Catalog, EventRecord};

use crate::source::{Extent, SequenceSource};

/// Level of the event with the given 1-based `sequence_id`.
///
/// Equal to `((sequence_id * 7) mod 20) + 1`, reduced first so the
/// multiplication cannot overflow. Always in `1..=20`.
pub fn level_for(sequence_id: u64) -> u8 {
    ((sequence_id % 20) * 7 % 20 + 1) as u8
}

/// Yields `count` event records, then exhausts.
///
/// The n-th record (1-based) has `sequence_id = n`, the actor at index
/// `(n - 1) mod A`, the action at index `(n - 1) mod B`, and
/// [`level_for(n)`](level_for) as its level.
#[derive(Debug, Clone)]
pub struct FiniteEventSource {
    count: u64,
    emitted: u64,
    catalog: Catalog,
}

impl FiniteEventSource {
    /// Creates a source over the default actor and action rosters.
    pub fn new(count: u64) -> Self {
        Self::with_catalog(count, Catalog::default())
    }

    /// Creates a source that draws actors and actions from `catalog`.
    pub fn with_catalog(count: u64, catalog: Catalog) -> Self {
        Self {
            count,
            emitted: 0,
            catalog,
        }
    }

    /// Total number of records this source produces over its lifetime.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the rosters records are drawn from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl SequenceSource for FiniteEventSource {
    type Item = EventRecord;

    fn next(&mut self) -> Option<EventRecord> {
        if self.emitted >= self.count {
            return None;
        }
        self.emitted += 1;

        let n = self.emitted;
        Some(EventRecord {
            sequence_id: n,
            actor: self.catalog.actor(n - 1).to_string(),
            level: level_for(n),
            action: self.catalog.action(n - 1).to_string(),
        })
    }

    fn extent(&self) -> Extent {
        Extent::Finite {
            remaining: self.count - self.emitted,
        }
    }

    fn name(&self) -> &'static str {
        "finite-events"
    }
}
