//! Error types for shared value construction.

/// Errors that can occur while building shared types.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    /// A catalog roster was empty, so no index could ever resolve into it.
    #[error("catalog {which} set must not be empty")]
    EmptyCatalog {
        /// Which roster was empty (`"actors"` or `"actions"`).
        which: &'static str,
    },
}
