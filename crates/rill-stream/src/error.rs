//! Error types for stream consumers.
//!
//! Exhaustion is not an error: sources report it as `None`. These variants
//! cover misuse that would otherwise turn into unbounded work.

/// Errors that can occur while consuming a sequence source.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A full traversal was requested over a source that never ends.
    #[error("cannot traverse unbounded source `{name}` to exhaustion")]
    UnboundedSource {
        /// The [`name`](crate::SequenceSource::name) of the rejected source.
        name: &'static str,
    },

    /// The traversal would observe more records than the configured ceiling.
    #[error("stream exceeded record ceiling of {ceiling}")]
    CeilingExceeded {
        /// The ceiling that was hit.
        ceiling: u64,
    },
}
