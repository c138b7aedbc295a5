//! Lazy sequence sources and bounded streaming consumers.
//!
//! Every producer in this crate is an explicit pull cursor implementing
//! [`SequenceSource`]. Consumers depend only on that trait, never on a
//! concrete source, and never materialise more of a sequence than asked for.
//!
//! # Sources
//!
//! | Source | Extent | Produces |
//! |--------|--------|----------|
//! | [`FiniteEventSource`] | finite | synthetic [`EventRecord`]s derived from their index |
//! | [`GrowthSequence`] | unbounded | the additive recurrence `0, 1, 1, 2, 3, 5, ...` |
//! | [`PrimeSequence`] | unbounded | integers with no divisor up to their square root |
//!
//! # Consumers
//!
//! - [`collect`] pulls at most `limit` values from any source.
//! - [`StreamAnalyzer`] folds a finite event source into a
//!   [`RunningAggregate`] in a single pass.
//!
//! # Usage
//!
//! ```rust
//! use rill_stream::{analyze, collect, FiniteEventSource, GrowthSequence, PrimeSequence};
//!
//! assert_eq!(collect(GrowthSequence::new(), 5), vec![0, 1, 1, 2, 3]);
//! assert_eq!(collect(PrimeSequence::new(), 3), vec![2, 3, 5]);
//!
//! let aggregate = analyze(FiniteEventSource::new(20)).unwrap();
//! assert_eq!(aggregate.processed_count, 20);
//! ```
//!
//! [`EventRecord`]: rill_types::EventRecord

mod analyze;
mod collect;
mod error;
mod events;
mod growth;
mod primes;
mod source;

pub use analyze::{analyze, RunningAggregate, StreamAnalyzer};
pub use collect::collect;
pub use error::StreamError;
pub use events::{level_for, FiniteEventSource};
pub use growth::{GrowthSequence, OverflowPolicy};
pub use primes::{is_prime, PrimeSequence};
pub use source::{Extent, SequenceSource, Values};
