//! Single-pass aggregation over a finite stream of event records.

use std::collections::BTreeMap;

use rill_types::EventRecord;
use serde::Serialize;

use crate::error::StreamError;
use crate::source::{Extent, SequenceSource};

/// Counters accumulated over one traversal.
///
/// Built incrementally; no record is retained after it has been counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunningAggregate {
    /// Number of records observed.
    pub processed_count: u64,
    /// Number of records with `level >= 10`.
    pub high_level_count: u64,
    /// Per-action record counts.
    pub action_counts: BTreeMap<String, u64>,
}

impl RunningAggregate {
    /// Returns how many records carried `action`, or zero if none did.
    pub fn count_for(&self, action: &str) -> u64 {
        self.action_counts.get(action).copied().unwrap_or(0)
    }

    fn record(&mut self, record: EventRecord) {
        self.processed_count += 1;
        if record.is_high_level() {
            self.high_level_count += 1;
        }
        *self.action_counts.entry(record.action).or_insert(0) += 1;
    }
}

/// Folds a finite source of [`EventRecord`]s into a [`RunningAggregate`].
///
/// Unbounded sources are rejected before the first pull. An optional record
/// ceiling stops traversal with an error instead of running past a caller's
/// budget.
#[derive(Debug, Clone, Default)]
pub struct StreamAnalyzer {
    record_ceiling: Option<u64>,
}

impl StreamAnalyzer {
    /// Creates an analyzer with no record ceiling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails any traversal that would observe more than `ceiling` records.
    pub fn with_record_ceiling(mut self, ceiling: u64) -> Self {
        self.record_ceiling = Some(ceiling);
        self
    }

    /// Traverses `source` to exhaustion.
    ///
    /// # Errors
    ///
    /// - [`StreamError::UnboundedSource`] if the source declares no end.
    /// - [`StreamError::CeilingExceeded`] if the record ceiling is hit.
    pub fn analyze<S>(&self, source: S) -> Result<RunningAggregate, StreamError>
    where
        S: SequenceSource<Item = EventRecord>,
    {
        self.analyze_with(source, |_| {})
    }

    /// Like [`analyze`](Self::analyze), but hands each record to `observe`
    /// before it is counted.
    pub fn analyze_with<S, F>(
        &self,
        mut source: S,
        mut observe: F,
    ) -> Result<RunningAggregate, StreamError>
    where
        S: SequenceSource<Item = EventRecord>,
        F: FnMut(&EventRecord),
    {
        let name = source.name();
        let remaining = match source.extent() {
            Extent::Finite { remaining } => remaining,
            Extent::Unbounded => return Err(StreamError::UnboundedSource { name }),
        };

        if let Some(ceiling) = self.record_ceiling {
            if remaining > ceiling {
                return Err(StreamError::CeilingExceeded { ceiling });
            }
        }

        let mut aggregate = RunningAggregate::default();
        while let Some(record) = source.next() {
            if let Some(ceiling) = self.record_ceiling {
                if aggregate.processed_count >= ceiling {
                    return Err(StreamError::CeilingExceeded { ceiling });
                }
            }

            tracing::trace!(
                sequence_id = record.sequence_id,
                level = record.level,
                action = %record.action,
                "observed record"
            );

            observe(&record);
            aggregate.record(record);
        }

        tracing::debug!(
            source = name,
            processed = aggregate.processed_count,
            high_level = aggregate.high_level_count,
            "stream analysis finished"
        );

        Ok(aggregate)
    }
}

/// Analyzes `source` with a default [`StreamAnalyzer`].
///
/// # Errors
///
/// Returns [`StreamError::UnboundedSource`] for sources that never end.
pub fn analyze<S>(source: S) -> Result<RunningAggregate, StreamError>
where
    S: SequenceSource<Item = EventRecord>,
{
    StreamAnalyzer::new().analyze(source)
}
